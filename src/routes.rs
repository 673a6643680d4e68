use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::reading::{get_latest, health, list, receive_reading};
use crate::services::ReadingService;

pub fn create_router(service: ReadingService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/sensor_readings", post(receive_reading).get(list))
        .route("/sensor_readings/latest", get(get_latest))
        .with_state(service)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

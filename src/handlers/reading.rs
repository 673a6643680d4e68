use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};

use crate::error::Result;
use crate::models::{Acknowledgement, ReadingListResponse, ReadingQueryParams, StoredReading};
use crate::services::ReadingService;

/// POST /sensor_readings
///
/// Takes the raw body so a missing or wrong `Content-Type` from the device does not
/// reject an otherwise valid payload.
pub async fn receive_reading(
    State(service): State<ReadingService>,
    body: Bytes,
) -> Result<Json<Acknowledgement>> {
    let ack = service.receive_reading(&body).await?;
    Ok(Json(ack))
}

/// GET /sensor_readings
pub async fn list(
    State(service): State<ReadingService>,
    Query(params): Query<ReadingQueryParams>,
) -> Result<Json<ReadingListResponse>> {
    let response = service.list(params).await?;
    Ok(Json(response))
}

/// GET /sensor_readings/latest
pub async fn get_latest(State(service): State<ReadingService>) -> Result<Json<StoredReading>> {
    let reading = service.get_latest().await?;
    Ok(Json(reading))
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "ok" })),
    )
}

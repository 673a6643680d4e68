use crate::config::Config;
use crate::error::Result;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};
use std::time::Duration;

pub type DbPool = Pool<Postgres>;

const CREATE_COLLECTION: &str = include_str!("../migrations/0001_create_sensor_readings.sql");

pub async fn create_pool(config: &Config) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect(&config.database.url)
        .await?;

    Ok(pool)
}

/// Creates the `sensor_readings` collection if it does not exist yet.
pub async fn ensure_collection(pool: &DbPool) -> Result<()> {
    sqlx::query(CREATE_COLLECTION).execute(pool).await?;
    Ok(())
}

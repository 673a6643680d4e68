use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{Reading, StoredReading};
use sqlx::{postgres::PgRow, types::Json, Row};

#[derive(Clone)]
pub struct ReadingRepository {
    pool: DbPool,
}

impl ReadingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Appends one document. Every call creates a new row, duplicates included.
    pub async fn insert(&self, reading: &Reading) -> Result<i64> {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO sensor_readings (document) VALUES ($1) RETURNING id")
                .bind(Json(reading))
                .fetch_one(&self.pool)
                .await?;

        Ok(id)
    }

    pub async fn find_recent(&self, limit: i64, offset: i64) -> Result<Vec<StoredReading>> {
        let rows = sqlx::query(
            "SELECT id, document FROM sensor_readings
             ORDER BY id DESC
             LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(to_stored_reading).collect()
    }

    pub async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM sensor_readings")
            .fetch_one(&self.pool)
            .await?;
        let count: i64 = row.get("count");

        Ok(count)
    }

    pub async fn find_latest(&self) -> Result<StoredReading> {
        let row = sqlx::query(
            "SELECT id, document FROM sensor_readings
             ORDER BY id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => to_stored_reading(&row),
            None => Err(AppError::NotFound("No sensor readings found".to_string())),
        }
    }
}

fn to_stored_reading(row: &PgRow) -> Result<StoredReading> {
    let Json(reading): Json<Reading> = row.try_get("document")?;

    Ok(StoredReading {
        id: row.try_get("id")?,
        reading,
    })
}

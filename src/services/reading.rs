use crate::error::{AppError, Result};
use crate::models::{
    Acknowledgement, IncomingReading, ReadingListResponse, ReadingQueryParams, StoredReading,
};
use crate::repositories::ReadingRepository;
use chrono::Utc;
use serde_json::Value;
use tracing::info;

const MAX_PAGE_SIZE: i64 = 1000;

#[derive(Clone)]
pub struct ReadingService {
    repository: ReadingRepository,
}

impl ReadingService {
    pub fn new(repository: ReadingRepository) -> Self {
        Self { repository }
    }

    /// Parses a raw request body, stamps it with the receive time and stores it.
    ///
    /// Nothing is written when the body is rejected. Store failures are returned
    /// as-is, there is no retry.
    pub async fn receive_reading(&self, body: &[u8]) -> Result<Acknowledgement> {
        let incoming = parse_reading(body)?;
        let reading = incoming.into_reading(Utc::now());

        let id = self.repository.insert(&reading).await?;
        info!(id, temperature = %reading.temperature, "Reading stored");

        Ok(Acknowledgement::ok())
    }

    pub async fn list(&self, params: ReadingQueryParams) -> Result<ReadingListResponse> {
        self.validate_query_params(&params)?;

        let limit = params.limit.unwrap_or(100);
        let offset = params.offset.unwrap_or(0);

        let data = self.repository.find_recent(limit, offset).await?;
        let total = self.repository.count().await?;

        Ok(ReadingListResponse {
            data,
            total,
            limit,
            offset,
        })
    }

    pub async fn get_latest(&self) -> Result<StoredReading> {
        self.repository.find_latest().await
    }

    fn validate_query_params(&self, params: &ReadingQueryParams) -> Result<()> {
        if let Some(limit) = params.limit {
            if !(1..=MAX_PAGE_SIZE).contains(&limit) {
                return Err(AppError::Validation(format!(
                    "limit must be between 1 and {} readings, got {}",
                    MAX_PAGE_SIZE, limit
                )));
            }
        }

        if let Some(offset) = params.offset {
            if offset < 0 {
                return Err(AppError::Validation(format!(
                    "offset must be a non-negative reading count, got {}",
                    offset
                )));
            }
        }

        Ok(())
    }
}

/// Extracts the temperature from a request body.
///
/// The body must be a JSON object holding a numeric `temperature`. Other keys are ignored.
pub fn parse_reading(body: &[u8]) -> Result<IncomingReading> {
    let payload: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::MalformedRequest(format!("body is not valid JSON: {}", e)))?;

    let Value::Object(mut fields) = payload else {
        return Err(AppError::MalformedRequest(
            "body must be a JSON object".to_string(),
        ));
    };

    match fields.remove("temperature") {
        Some(Value::Number(temperature)) => Ok(IncomingReading { temperature }),
        Some(other) => Err(AppError::MalformedRequest(format!(
            "field `temperature` must be a number, got {}",
            other
        ))),
        None => Err(AppError::MalformedRequest(
            "missing field `temperature`".to_string(),
        )),
    }
}

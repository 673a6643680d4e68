use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Hardware model of the sensor feeding this endpoint.
pub const SENSOR_TYPE: &str = "DS18B20";
pub const UNIT: &str = "°C";

/// Temperature extracted from the body posted by the sensor.
///
/// Kept as the JSON number that was sent so integers are stored unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingReading {
    pub temperature: Number,
}

impl IncomingReading {
    pub fn into_reading(self, timestamp: DateTime<Utc>) -> Reading {
        Reading::new(self.temperature, timestamp)
    }
}

/// Document written to the `sensor_readings` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub temperature: Number,
    pub timestamp: DateTime<Utc>,
    pub sensor_type: String,
    pub unit: String,
}

impl Reading {
    pub fn new(temperature: Number, timestamp: DateTime<Utc>) -> Self {
        Self {
            temperature,
            timestamp,
            sensor_type: SENSOR_TYPE.to_string(),
            unit: UNIT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredReading {
    pub id: i64,
    #[serde(flatten)]
    pub reading: Reading,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub status: String,
}

impl Acknowledgement {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingQueryParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Default for ReadingQueryParams {
    fn default() -> Self {
        Self {
            limit: Some(100),
            offset: Some(0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingListResponse {
    pub data: Vec<StoredReading>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

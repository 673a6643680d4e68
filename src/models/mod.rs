pub mod reading;

pub use reading::{
    Acknowledgement, IncomingReading, Reading, ReadingListResponse, ReadingQueryParams,
    StoredReading, SENSOR_TYPE, UNIT,
};

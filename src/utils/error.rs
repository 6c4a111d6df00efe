use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Unknown timezone: {id}")]
    UnknownTimezone { id: String },

    #[error("Invalid date format: {input}")]
    InvalidDateFormat { input: String },

    /// Wall-clock times inside a DST gap have no UTC equivalent.
    #[error("Local time {datetime} does not exist in timezone {zone}")]
    NonexistentLocalTime {
        datetime: NaiveDateTime,
        zone: String,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

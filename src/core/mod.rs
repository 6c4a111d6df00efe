pub mod convert;
pub mod literal;

pub use crate::domain::model::{DisplayLiteral, Timestamp, TimestampKind};
pub use crate::utils::error::Result;

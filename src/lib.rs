pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::{convert, literal};
pub use crate::domain::model::{DisplayLiteral, Timestamp, TimestampKind};
pub use crate::utils::error::{ConvertError, Result};

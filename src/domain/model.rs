use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provenance of a [`Timestamp`]'s wall-clock value.
///
/// The tag decides which conversion branch applies: a value tagged `Utc` is
/// never re-converted, a value tagged `Local` is interpreted against the
/// process-local zone, and `Unspecified` values are interpreted against the
/// timezone identifier supplied at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampKind {
    Unspecified,
    Local,
    Utc,
}

/// A date-time value carrying its provenance tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub datetime: NaiveDateTime,
    pub kind: TimestampKind,
}

impl Timestamp {
    pub fn new(datetime: NaiveDateTime, kind: TimestampKind) -> Self {
        Self { datetime, kind }
    }

    /// A wall-clock value whose zone is not known yet.
    pub fn unspecified(datetime: NaiveDateTime) -> Self {
        Self::new(datetime, TimestampKind::Unspecified)
    }

    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self::new(datetime.naive_utc(), TimestampKind::Utc)
    }

    pub fn from_local(datetime: DateTime<Local>) -> Self {
        Self::new(datetime.naive_local(), TimestampKind::Local)
    }

    pub fn now_utc() -> Self {
        Self::from_utc(Utc::now())
    }

    pub fn now_local() -> Self {
        Self::from_local(Local::now())
    }
}

/// A string guaranteed free of `\r` and `\n`, safe for single-line rendering.
///
/// Only the normalizer in [`crate::core::literal`] constructs these, so the
/// invariant holds by construction. Whether the content is HTML-escaped is
/// up to the caller; this type only vouches for the absence of line breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayLiteral(String);

impl DisplayLiteral {
    pub(crate) fn from_normalized(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for DisplayLiteral {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

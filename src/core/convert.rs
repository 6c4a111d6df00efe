use crate::domain::model::{Timestamp, TimestampKind};
use crate::utils::error::{ConvertError, Result};
use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// SQL datetime rendering: 24-hour, zero-padded, no timezone suffix.
pub const SQL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// ISO-8601 rendering without offset; a literal `Z` is appended after the
/// value has been converted to UTC.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Human-oriented rendering for the local display path. Deliberately not a
/// stable machine format; callers needing one use the SQL or ISO strings.
const DISPLAY_FORMAT: &str = "%c";

/// Offset-less formats accepted by [`parse_timestamp`], tried in order.
/// `%.f` also matches the no-fraction case.
const PARSE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Resolves a timezone identifier against the IANA database. Empty means
/// "use the default" and resolves to `None`; that is never an error.
fn resolve_timezone(timezone_id: &str) -> Result<Option<Tz>> {
    if timezone_id.is_empty() {
        return Ok(None);
    }

    timezone_id
        .parse::<Tz>()
        .map(Some)
        .map_err(|_| ConvertError::UnknownTimezone {
            id: timezone_id.to_string(),
        })
}

/// Maps a wall-clock time in `zone` to the UTC instant it names.
///
/// Ambiguous times (the repeated hour when DST falls back) resolve to the
/// standard-time reading, i.e. the later of the two candidate instants.
/// Times inside a DST gap name no instant at all and are an error.
fn wall_clock_to_utc<Z>(datetime: NaiveDateTime, zone: &Z, zone_name: &str) -> Result<NaiveDateTime>
where
    Z: TimeZone,
{
    match zone.from_local_datetime(&datetime) {
        LocalResult::Single(dt) => Ok(dt.naive_utc()),
        LocalResult::Ambiguous(_, standard) => Ok(standard.naive_utc()),
        LocalResult::None => Err(ConvertError::NonexistentLocalTime {
            datetime,
            zone: zone_name.to_string(),
        }),
    }
}

/// Converts a timestamp to UTC.
///
/// A value already tagged `Utc` is returned unchanged whatever the
/// identifier says. `Local` values are read against the process-local zone.
/// `Unspecified` values are read against `timezone_id`: empty re-tags the
/// value as UTC without touching it, a named zone converts DST-aware.
pub fn to_utc(timestamp: Timestamp, timezone_id: &str) -> Result<Timestamp> {
    match timestamp.kind {
        TimestampKind::Utc => Ok(timestamp),
        TimestampKind::Local => {
            let utc = wall_clock_to_utc(timestamp.datetime, &Local, "local")?;
            Ok(Timestamp::new(utc, TimestampKind::Utc))
        }
        TimestampKind::Unspecified => match resolve_timezone(timezone_id)? {
            None => Ok(Timestamp::new(timestamp.datetime, TimestampKind::Utc)),
            Some(tz) => {
                let utc = wall_clock_to_utc(timestamp.datetime, &tz, timezone_id)?;
                Ok(Timestamp::new(utc, TimestampKind::Utc))
            }
        },
    }
}

/// Converts a timestamp to wall-clock time in a zone.
///
/// A value already tagged `Local` is returned unchanged; anything else is
/// treated as a UTC instant. With an empty identifier the result is the
/// process-local wall clock, tagged `Local`. With a named zone the result is
/// tagged `Unspecified`: only the process-local path may claim the `Local`
/// tag, and the untagged result is what lets a later [`to_utc`] with the
/// same identifier find the original instant again.
pub fn to_local(timestamp: Timestamp, timezone_id: &str) -> Result<Timestamp> {
    if timestamp.kind == TimestampKind::Local {
        return Ok(timestamp);
    }

    let instant = Utc.from_utc_datetime(&timestamp.datetime);
    match resolve_timezone(timezone_id)? {
        None => Ok(Timestamp::new(
            instant.with_timezone(&Local).naive_local(),
            TimestampKind::Local,
        )),
        Some(tz) => Ok(Timestamp::new(
            instant.with_timezone(&tz).naive_local(),
            TimestampKind::Unspecified,
        )),
    }
}

/// Parses date-time text into a [`Timestamp`].
///
/// Text carrying an explicit offset (RFC 3339) is converted to UTC and
/// tagged `Utc`. Offset-less text keeps its wall-clock value and is tagged
/// `Unspecified`; a bare date reads as midnight.
pub fn parse_timestamp(text: &str) -> Result<Timestamp> {
    let trimmed = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Timestamp::from_utc(dt.with_timezone(&Utc)));
    }

    for format in PARSE_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Timestamp::unspecified(datetime));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Timestamp::unspecified(date.and_time(NaiveTime::MIN)));
    }

    Err(ConvertError::InvalidDateFormat {
        input: text.to_string(),
    })
}

/// Renders a timestamp as a SQL datetime string (`YYYY-MM-DD HH:MM:SS`),
/// converting to UTC first.
pub fn to_sql_string(timestamp: Timestamp, timezone_id: &str) -> Result<String> {
    let utc = to_utc(timestamp, timezone_id)?;
    Ok(utc.datetime.format(SQL_FORMAT).to_string())
}

/// Absent input is the "no data" sentinel and renders as an empty string.
pub fn to_sql_string_opt(timestamp: Option<Timestamp>, timezone_id: &str) -> Result<String> {
    match timestamp {
        None => Ok(String::new()),
        Some(ts) => to_sql_string(ts, timezone_id),
    }
}

/// Strict text entry point: parse failures surface as `InvalidDateFormat`.
pub fn parse_to_sql_string(text: &str, timezone_id: &str) -> Result<String> {
    to_sql_string(parse_timestamp(text)?, timezone_id)
}

/// Renders a timestamp as `YYYY-MM-DDTHH:MM:SSZ`, converting to UTC first.
pub fn to_iso_string(timestamp: Timestamp, timezone_id: &str) -> Result<String> {
    let utc = to_utc(timestamp, timezone_id)?;
    Ok(format!("{}Z", utc.datetime.format(ISO_FORMAT)))
}

/// Absent input is the "no data" sentinel and renders as an empty string.
pub fn to_iso_string_opt(timestamp: Option<Timestamp>, timezone_id: &str) -> Result<String> {
    match timestamp {
        None => Ok(String::new()),
        Some(ts) => to_iso_string(ts, timezone_id),
    }
}

/// Strict text entry point: parse failures surface as `InvalidDateFormat`.
pub fn parse_to_iso_string(text: &str, timezone_id: &str) -> Result<String> {
    to_iso_string(parse_timestamp(text)?, timezone_id)
}

/// Renders a timestamp as local wall-clock time in a human-oriented format.
pub fn to_local_display_string(timestamp: Timestamp, timezone_id: &str) -> Result<String> {
    let local = to_local(timestamp, timezone_id)?;
    Ok(local.datetime.format(DISPLAY_FORMAT).to_string())
}

/// Absent input is the "no data" sentinel and renders as an empty string.
pub fn to_local_display_string_opt(
    timestamp: Option<Timestamp>,
    timezone_id: &str,
) -> Result<String> {
    match timestamp {
        None => Ok(String::new()),
        Some(ts) => to_local_display_string(ts, timezone_id),
    }
}

/// Lenient text entry point for display contexts: any failure in the
/// parse/convert/render chain, bad timezone identifiers included, returns
/// the input verbatim instead of an error.
pub fn parse_to_local_display_string(text: &str, timezone_id: &str) -> String {
    match parse_timestamp(text).and_then(|ts| to_local_display_string(ts, timezone_id)) {
        Ok(rendered) => rendered,
        Err(err) => {
            tracing::debug!("Display fallback, returning input as-is ({}): {}", err, text);
            text.to_string()
        }
    }
}

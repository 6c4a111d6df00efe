use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use viewfmt::convert;
use viewfmt::{ConvertError, Timestamp, TimestampKind};

fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

#[test]
fn test_absent_input_renders_empty_everywhere() {
    viewfmt::utils::logger::init_logger(false);

    assert_eq!(convert::to_sql_string_opt(None, "").unwrap(), "");
    assert_eq!(convert::to_iso_string_opt(None, "").unwrap(), "");
    assert_eq!(convert::to_local_display_string_opt(None, "").unwrap(), "");

    // Absent is checked before the identifier is even resolved, so a bogus
    // zone never turns "no data" into an error
    assert_eq!(convert::to_sql_string_opt(None, "Not/AZone").unwrap(), "");
    assert_eq!(convert::to_iso_string_opt(None, "Not/AZone").unwrap(), "");
}

#[test]
fn test_iso_output_shape() {
    let ts = Timestamp::from_utc(Utc.with_ymd_and_hms(2026, 2, 21, 5, 59, 0).unwrap());
    let iso = convert::to_iso_string(ts, "").unwrap();

    assert_eq!(iso, "2026-02-21T05:59:00Z");
    assert!(iso.ends_with('Z'));
    assert!(NaiveDateTime::parse_from_str(&iso[..iso.len() - 1], "%Y-%m-%dT%H:%M:%S").is_ok());
}

#[test]
fn test_named_zone_round_trip_reproduces_the_instant() {
    let original = Timestamp::from_utc(Utc.with_ymd_and_hms(2026, 7, 20, 17, 0, 0).unwrap());

    let wall_clock = convert::to_local(original, "America/Chicago").unwrap();
    assert_eq!(wall_clock.datetime, naive(2026, 7, 20, 12, 0, 0));
    assert_eq!(wall_clock.kind, TimestampKind::Unspecified);

    let back = convert::to_utc(wall_clock, "America/Chicago").unwrap();
    assert_eq!(back, original);
}

#[test]
fn test_round_trip_across_zones_preserves_instants_not_wall_clocks() {
    let original = Timestamp::from_utc(Utc.with_ymd_and_hms(2026, 2, 21, 5, 59, 0).unwrap());

    for zone in ["America/Chicago", "Europe/Paris", "Asia/Tokyo"] {
        let there = convert::to_local(original, zone).unwrap();
        assert_ne!(there.datetime, original.datetime, "{zone}");
        assert_eq!(convert::to_utc(there, zone).unwrap(), original, "{zone}");
    }
}

#[test]
fn test_strict_text_paths_surface_parse_errors() {
    let err = convert::parse_to_sql_string("not a date", "").unwrap_err();
    assert!(matches!(err, ConvertError::InvalidDateFormat { ref input } if input == "not a date"));

    let err = convert::parse_to_iso_string("not a date", "").unwrap_err();
    assert!(matches!(err, ConvertError::InvalidDateFormat { .. }));

    let err = convert::parse_to_sql_string("2026-07-20 12:00:00", "Not/AZone").unwrap_err();
    assert!(matches!(err, ConvertError::UnknownTimezone { .. }));
}

#[test]
fn test_display_path_returns_malformed_input_verbatim() {
    assert_eq!(
        convert::parse_to_local_display_string("not a date", "America/Chicago"),
        "not a date"
    );
    assert_eq!(convert::parse_to_local_display_string("", ""), "");

    // The catch-all covers bad identifiers too, not just parse failures
    assert_eq!(
        convert::parse_to_local_display_string("2026-07-20 12:00:00", "Not/AZone"),
        "2026-07-20 12:00:00"
    );
}

#[test]
fn test_display_path_renders_valid_input() {
    let rendered = convert::parse_to_local_display_string("2026-07-20T17:00:00Z", "America/Chicago");

    // Chicago is UTC-5 in July; the exact layout is human-oriented, so only
    // pin the converted wall-clock time
    assert!(rendered.contains("12:00:00"), "{rendered}");
    assert!(rendered.contains("2026"), "{rendered}");
    assert_ne!(rendered, "2026-07-20T17:00:00Z");
}

#[test]
fn test_sql_text_path_end_to_end() {
    assert_eq!(
        convert::parse_to_sql_string("2026-02-20 23:59:00", "America/Chicago").unwrap(),
        "2026-02-21 05:59:00"
    );
    assert_eq!(
        convert::parse_to_iso_string("2026-02-20 23:59:00", "America/Chicago").unwrap(),
        "2026-02-21T05:59:00Z"
    );
}

#[test]
fn test_utc_tagged_values_never_reconvert() {
    let ts = Timestamp::new(naive(2026, 7, 20, 17, 0, 0), TimestampKind::Utc);

    for zone in ["", "America/Chicago", "Asia/Tokyo"] {
        assert_eq!(convert::to_utc(ts, zone).unwrap(), ts, "{zone}");
        assert_eq!(
            convert::to_sql_string(ts, zone).unwrap(),
            "2026-07-20 17:00:00",
            "{zone}"
        );
    }
}

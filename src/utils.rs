// Utility functions
use crate::model::{FlightTime, ParserError};
use chrono::{DateTime, FixedOffset};
use serde_json::Value;

/// Fixed upstream timestamp layout, e.g. `2024-05-01T08:15:00.000-05:00`.
pub const UPSTREAM_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Parses an upstream timestamp string. Fractional seconds are mandatory.
pub fn parse_datetime(value: &str) -> Result<DateTime<FixedOffset>, ParserError> {
    // chrono treats `%.f` as optional when parsing
    if !has_fractional_seconds(value) {
        return Err(ParserError::MalformedTimestamp {
            value: value.to_string(),
            source: None,
        });
    }
    DateTime::parse_from_str(value, UPSTREAM_DATETIME_FORMAT).map_err(|source| {
        ParserError::MalformedTimestamp {
            value: value.to_string(),
            source: Some(source),
        }
    })
}

/// `HH:MM:SS` after the `T` must be followed by `.` and at least one digit.
fn has_fractional_seconds(value: &str) -> bool {
    value
        .split_once('T')
        .and_then(|(_, time)| time.get(8..10))
        .is_some_and(|frac| {
            let mut chars = frac.chars();
            chars.next() == Some('.') && chars.next().is_some_and(|c| c.is_ascii_digit())
        })
}

/// Splits an upstream timestamp into date, time (fraction dropped) and offset.
pub fn split_datetime(value: &str) -> Result<FlightTime, ParserError> {
    let dt = parse_datetime(value)?;
    Ok(FlightTime {
        date: dt.format("%Y-%m-%d").to_string(),
        time: dt.format("%H:%M:%S").to_string(),
        timezone: format_offset(dt.offset()),
    })
}

/// `UTC` for a zero offset, `±HH:MM` otherwise.
pub fn format_offset(offset: &FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    if seconds == 0 {
        return "UTC".to_string();
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

/// Joins the non-empty, trimmed aircraft code and short name with a hyphen.
pub fn join_aircraft(code: Option<&str>, short_name: Option<&str>) -> String {
    [code, short_name]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Integer from a JSON number or numeric string; fractions are truncated.
pub fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    }
}

/// Float from a JSON number or numeric string.
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Loose JSON truthiness: null, false, zero, and empty strings or collections are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn splits_negative_offset() {
        let parts = split_datetime("2024-05-01T08:15:00.000-05:00").unwrap();
        assert_eq!(parts.date, "2024-05-01");
        assert_eq!(parts.time, "08:15:00");
        assert_eq!(parts.timezone, "-05:00");
    }

    #[test]
    fn splits_positive_and_zero_offsets() {
        assert_eq!(
            split_datetime("2024-06-01T22:05:30.123+05:30").unwrap().timezone,
            "+05:30"
        );
        assert_eq!(
            split_datetime("2024-06-01T22:05:30.000+00:00").unwrap().timezone,
            "UTC"
        );
    }

    #[test]
    fn split_parts_recompose_to_the_same_instant() {
        let source = "2024-05-01T23:59:58.999-07:00";
        let parts = split_datetime(source).unwrap();
        let offset = if parts.timezone == "UTC" {
            "+00:00".to_string()
        } else {
            parts.timezone.clone()
        };
        let rejoined = DateTime::parse_from_str(
            &format!("{}T{}{}", parts.date, parts.time, offset),
            "%Y-%m-%dT%H:%M:%S%z",
        )
        .unwrap();
        let original = parse_datetime(source).unwrap();
        assert_eq!(rejoined.timestamp(), original.timestamp());
        assert_eq!(rejoined.offset(), original.offset());
    }

    #[test_case("2024-05-01 08:15:00.000-05:00" ; "space separator")]
    #[test_case("2024-05-01T08:15:00.000" ; "missing offset")]
    #[test_case("01/05/2024T08:15:00.000-05:00" ; "foreign date layout")]
    #[test_case("" ; "empty")]
    #[test_case("2024-05-01T08:15:00-05:00" ; "missing fractional seconds")]
    #[test_case("2024-05-01T08:15:00.-05:00" ; "empty fraction")]
    fn rejects_non_conforming_timestamps(value: &str) {
        let err = split_datetime(value).unwrap_err();
        assert!(matches!(err, ParserError::MalformedTimestamp { value: v, .. } if v == value));
    }

    #[test]
    fn parsed_wall_clock_matches_source() {
        let dt = parse_datetime("2024-05-01T08:15:00.000-05:00").unwrap();
        assert_eq!(
            dt.naive_local(),
            NaiveDateTime::parse_from_str("2024-05-01 08:15:00", "%Y-%m-%d %H:%M:%S").unwrap()
        );
    }

    #[test_case(Some("77W"), Some(" Boeing 777-300ER"), "77W-Boeing 777-300ER" ; "code and short name")]
    #[test_case(Some(""), Some(""), "" ; "both empty")]
    #[test_case(None, Some("A321"), "A321" ; "missing code")]
    #[test_case(Some(" 738 "), None, "738" ; "missing short name")]
    fn joins_aircraft_parts(code: Option<&str>, short_name: Option<&str>, expected: &str) {
        assert_eq!(join_aircraft(code, short_name), expected);
    }

    #[test]
    fn loose_numbers_accept_floats_and_strings() {
        assert_eq!(value_as_i64(&json!(415)), Some(415));
        assert_eq!(value_as_i64(&json!(415.0)), Some(415));
        assert_eq!(value_as_i64(&json!(" 30000 ")), Some(30000));
        assert_eq!(value_as_i64(&json!("n/a")), None);
        assert_eq!(value_as_f64(&json!("5.60")), Some(5.6));
        assert_eq!(value_as_f64(&json!(12)), Some(12.0));
        assert_eq!(value_as_f64(&json!([1])), None);
    }

    #[test]
    fn truthiness_follows_loose_json_rules() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!(12500)));
        assert!(is_truthy(&json!("309")));
        assert!(is_truthy(&json!(true)));
    }
}

use chrono::NaiveDateTime;
use tracing::warn;

use crate::error::TimestampError;

/// `YYYY-MM-DD HH:MM:SS`, 24-hour clock.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse `raw` against `format`, accepting only the exact field widths.
///
/// chrono alone takes short numeric fields, a leading `+` and runs of
/// whitespace, so the parsed time must format back to `raw` unchanged.
pub fn parse_timestamp(raw: &str, format: &str) -> Result<NaiveDateTime, TimestampError> {
    let time = NaiveDateTime::parse_from_str(raw, format)?;

    let expected = time.format(format).to_string();
    if expected != raw {
        return Err(TimestampError::NotCanonical { expected });
    }
    Ok(time)
}

/// Parse a memo timestamp for ordering.
///
/// Failure is not an error: a warning names the raw string and `None` is
/// returned, which orders before every parsed instant.
#[must_use]
pub fn interpret(raw: &str, format: &str) -> Option<NaiveDateTime> {
    match parse_timestamp(raw, format) {
        Ok(time) => Some(time),
        Err(e) => {
            warn!("Could not parse time '{raw}': {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_default_format() {
        let parsed = parse_timestamp("2023-01-02 10:00:00", DEFAULT_TIMESTAMP_FORMAT);
        let expected = NaiveDate::from_ymd_opt(2023, 1, 2).and_then(|d| d.and_hms_opt(10, 0, 0));
        assert_eq!(parsed.ok(), expected);
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        for raw in [
            "not-a-date",
            "",
            "2023-01-02",
            "2023/01/02 10:00:00",
            "2023-01-02T10:00:00",
            "2023-13-02 10:00:00",
            "2023-01-02 25:00:00",
            "2023-1-2 9:0:0",
            "+2023-01-02 10:00:00",
            "23-01-02 10:00:00",
            "2023-01-02  10:00:00",
            " 2023-01-02 10:00:00",
        ] {
            assert!(
                parse_timestamp(raw, DEFAULT_TIMESTAMP_FORMAT).is_err(),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_reports_canonical_form() {
        assert_eq!(
            parse_timestamp("2023-1-2 9:0:0", DEFAULT_TIMESTAMP_FORMAT),
            Err(TimestampError::NotCanonical {
                expected: "2023-01-02 09:00:00".to_string()
            })
        );
    }

    #[test]
    fn test_short_fields_fall_back() {
        let short = interpret("2023-1-2 9:0:0", DEFAULT_TIMESTAMP_FORMAT);
        assert_eq!(short, None);
        assert!(short < interpret("0001-01-01 00:00:00", DEFAULT_TIMESTAMP_FORMAT));
    }

    #[test]
    fn test_interpret_falls_back_to_none() {
        assert_eq!(interpret("not-a-date", DEFAULT_TIMESTAMP_FORMAT), None);
        assert!(interpret("2023-01-01 09:00:00", DEFAULT_TIMESTAMP_FORMAT).is_some());
    }

    #[test]
    fn test_fallback_orders_first() {
        let parsed = interpret("1970-01-01 00:00:00", DEFAULT_TIMESTAMP_FORMAT);
        assert!(interpret("garbage", DEFAULT_TIMESTAMP_FORMAT) < parsed);
    }

    #[test]
    fn test_custom_format() {
        assert!(interpret("02/01/2023 10:00", "%d/%m/%Y %H:%M").is_some());
        assert!(interpret("2023-01-02 10:00:00", "%d/%m/%Y %H:%M").is_none());
    }
}

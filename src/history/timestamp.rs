//! Minute-resolution local timestamps as they appear in the history file.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer, de::Error};

pub const FORMAT: &str = "%Y-%m-%d %H:%M";

/// Current local time truncated to the minute.
#[must_use]
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_second(0).and_then(|now| now.with_nanosecond(0)).unwrap_or(now)
}

pub fn parse(value: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, FORMAT)
}

pub fn serialize<S: Serializer>(
    timestamp: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format(FORMAT))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    parse(&String::deserialize(deserializer)?).map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_parse_ok() -> Result<(), chrono::ParseError> {
        assert_eq!(
            parse("2024-06-01 23:58")?,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(23, 58, 0).unwrap(),
        );
        Ok(())
    }

    #[test]
    fn test_parse_rejects_seconds_and_garbage() {
        assert!(parse("2024-06-01 23:58:12").is_err());
        assert!(parse("yesterday").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_now_is_truncated() {
        let now = now();
        assert_eq!(now.second(), 0);
        assert_eq!(now.nanosecond(), 0);
    }
}

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::AnalysisError;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

// Time Helper functions

/// Parses a `YYYY-MM-DD` event date.
pub fn parse_anchor_date(input: &str) -> Result<NaiveDate, AnalysisError> {
    NaiveDate::parse_from_str(input.trim(), TimeUtils::STANDARD_TIME_FORMAT).map_err(|e| {
        AnalysisError::MalformedDate {
            input: input.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Midnight of a naive date, read as UTC, in epoch milliseconds.
/// Candles and the event marker share this x-axis unit.
pub fn date_to_epoch_ms(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default()
}

/// Midnight of a naive date, read as UTC, in epoch seconds.
pub fn date_to_epoch_sec(date: NaiveDate) -> i64 {
    date_to_epoch_ms(date) / TimeUtils::MS_IN_S
}

/// Converts an exchange timestamp (epoch seconds + UTC offset) into the
/// timezone-naive wall clock of the exchange.
pub fn normalize_timestamp(epoch_sec: i64, gmt_offset_sec: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(epoch_sec + gmt_offset_sec, 0).map(|dt| dt.naive_utc())
}

pub fn epoch_ms_to_date_string(epoch_ms: i64) -> String {
    // Used for display purposes
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date = parse_anchor_date("2026-01-28").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 28).unwrap());
        assert!(parse_anchor_date(" 2026-01-28 ").is_ok());
    }

    #[test]
    fn rejects_malformed_dates() {
        for bad in ["2026/01/28", "28-01-2026", "2026-02-30", "", "tomorrow"] {
            let err = parse_anchor_date(bad).unwrap_err();
            assert!(
                matches!(err, AnalysisError::MalformedDate { .. }),
                "expected MalformedDate for {:?}",
                bad
            );
        }
    }

    #[test]
    fn epoch_ms_is_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 28).unwrap();
        assert_eq!(date_to_epoch_ms(date), 1_769_558_400_000);
        assert_eq!(epoch_ms_to_date_string(date_to_epoch_ms(date)), "2026-01-28");
    }

    #[test]
    fn normalizes_new_york_session_open() {
        // 2026-01-28 09:30 EST is 14:30 UTC
        let ts = 1_769_610_600;
        let naive = normalize_timestamp(ts, -5 * 3600).unwrap();
        assert_eq!(naive.date(), NaiveDate::from_ymd_opt(2026, 1, 28).unwrap());
        assert_eq!(naive.format("%H:%M").to_string(), "09:30");
    }
}

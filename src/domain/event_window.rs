use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::WindowConfig;
use crate::utils::today_utc;

/// Date range fetched around an event. `end` is exclusive.
/// Invariant: `start < anchor_date <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWindow {
    pub anchor_date: NaiveDate,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl EventWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowCalculator {
    config: WindowConfig,
}

impl WindowCalculator {
    pub fn new(config: WindowConfig) -> Self {
        Self { config }
    }

    /// Window relative to the current UTC date.
    pub fn window(&self, anchor_date: NaiveDate) -> EventWindow {
        self.window_at(anchor_date, today_utc())
    }

    /// `start = anchor - lookback`, `end = max(today + lookahead, anchor)`.
    ///
    /// A past anchor still reaches up to today so the reaction after the event
    /// is captured. A scheduled (future) anchor ends on the anchor itself, so
    /// the marker can be placed before any data for that day exists.
    pub fn window_at(&self, anchor_date: NaiveDate, today: NaiveDate) -> EventWindow {
        let start = anchor_date - Duration::days(self.config.lookback_days.max(1));
        let end = (today + Duration::days(self.config.lookahead_days)).max(anchor_date);
        EventWindow {
            anchor_date,
            start,
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn earnings_example_window() {
        let calc = WindowCalculator::default();
        let w = calc.window_at(date(2026, 1, 28), date(2026, 1, 29));
        assert_eq!(w.start, date(2026, 1, 18));
        assert_eq!(w.end, date(2026, 1, 30));
        assert_eq!(w.anchor_date, date(2026, 1, 28));
    }

    #[test]
    fn past_anchor_reaches_past_today() {
        let calc = WindowCalculator::default();
        let today = date(2026, 10, 19);
        let w = calc.window_at(date(2025, 3, 1), today);
        assert_eq!(w.start, date(2025, 2, 19));
        assert!(w.end > today);
        assert!(w.contains(today));
    }

    #[test]
    fn future_anchor_ends_on_anchor() {
        let calc = WindowCalculator::default();
        let anchor = date(2026, 12, 1);
        let w = calc.window_at(anchor, date(2026, 10, 19));
        assert_eq!(w.end, anchor);
        assert!(w.start < w.anchor_date && w.anchor_date <= w.end);
    }

    #[test]
    fn invariant_holds_across_anchors() {
        let calc = WindowCalculator::default();
        let today = date(2026, 1, 29);
        let mut anchor = date(2025, 12, 1);
        while anchor < date(2026, 3, 1) {
            let w = calc.window_at(anchor, today);
            assert_eq!(w.start, anchor - Duration::days(10));
            assert!(w.start < w.anchor_date && w.anchor_date <= w.end);
            assert!(w.end >= today + Duration::days(1));
            anchor += Duration::days(1);
        }
    }

    #[test]
    fn custom_lookback() {
        let calc = WindowCalculator::new(WindowConfig {
            lookback_days: 30,
            lookahead_days: 1,
        });
        let w = calc.window_at(date(2026, 1, 28), date(2026, 1, 29));
        assert_eq!(w.len_days(), 32);
    }
}

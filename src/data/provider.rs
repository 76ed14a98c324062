use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Candle, EventWindow};

/// Abstract interface for fetching daily market data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily candles for `ticker` with `start <= date < end`, ascending.
    /// An empty vector is a valid answer.
    async fn fetch_candles(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Candle>>;
}

/// Brings provider output into the shape the chart expects: ascending,
/// one candle per date, inside the window, no malformed prices.
pub fn validate_series(candles: Vec<Candle>, window: &EventWindow) -> Vec<Candle> {
    let received = candles.len();
    let mut by_date: BTreeMap<NaiveDate, Candle> = BTreeMap::new();

    for candle in candles {
        if !window.contains(candle.date) {
            continue;
        }
        if !candle.is_well_formed() {
            log::warn!("Dropping malformed candle for {}: {:?}", candle.date, candle);
            continue;
        }
        // Later rows win: the provider's last word on a session is the freshest
        by_date.insert(candle.date, candle);
    }

    let series: Vec<Candle> = by_date.into_values().collect();
    if series.len() != received {
        log::info!(
            "Validated series: kept {} of {} candles in [{}, {})",
            series.len(),
            received,
            window.start,
            window.end
        );
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    fn window() -> EventWindow {
        EventWindow {
            anchor_date: date(28),
            start: date(18),
            end: date(30),
        }
    }

    fn candle(d: u32, close: f64) -> Candle {
        Candle::new(date(d), close, close + 1.0, close - 1.0, close, Some(100))
    }

    #[test]
    fn sorts_and_deduplicates() {
        let raw = vec![candle(27, 10.0), candle(26, 9.0), candle(27, 11.0)];
        let series = validate_series(raw, &window());
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, date(26));
        assert_eq!(series[1].close_price, 11.0);
    }

    #[test]
    fn drops_out_of_window_and_bad_rows() {
        let raw = vec![
            candle(17, 10.0),
            candle(18, 10.0),
            candle(29, 10.0),
            candle(30, 10.0),
            Candle::new(date(20), -1.0, 2.0, -2.0, 1.0, None),
        ];
        let series = validate_series(raw, &window());
        let dates: Vec<_> = series.iter().map(|c| c.date).collect();
        assert_eq!(dates, vec![date(18), date(29)]);
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(validate_series(Vec::new(), &window()).is_empty());
    }
}

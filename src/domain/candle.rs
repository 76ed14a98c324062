use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date_to_epoch_ms;

#[derive(Debug, PartialEq)]
pub enum CandleType {
    Bullish,
    Bearish,
}

/// One daily OHLC record. Dates are timezone-naive exchange dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub date: NaiveDate,

    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,

    pub volume: Option<u64>,
}

impl Candle {
    pub fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: Option<u64>,
    ) -> Self {
        Candle {
            date,
            open_price: open,
            high_price: high,
            low_price: low,
            close_price: close,
            volume,
        }
    }

    /// x coordinate on the chart
    pub fn timestamp_ms(&self) -> i64 {
        date_to_epoch_ms(self.date)
    }

    pub fn get_type(&self) -> CandleType {
        if self.close_price >= self.open_price {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        match self.get_type() {
            CandleType::Bullish => (self.open_price, self.close_price),
            CandleType::Bearish => (self.close_price, self.open_price),
        }
    }

    /// All four prices finite and strictly positive, high/low enclosing the body.
    pub fn is_well_formed(&self) -> bool {
        let prices = [
            self.open_price,
            self.high_price,
            self.low_price,
            self.close_price,
        ];
        if prices.iter().any(|p| !p.is_finite() || *p <= 0.0) {
            return false;
        }
        let (body_low, body_high) = self.body_range();
        self.low_price <= body_low && self.high_price >= body_high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    #[test]
    fn classifies_candle_direction() {
        let up = Candle::new(day(27), 400.0, 412.0, 398.0, 410.0, Some(1));
        let down = Candle::new(day(28), 410.0, 411.0, 390.0, 395.0, None);
        assert_eq!(up.get_type(), CandleType::Bullish);
        assert_eq!(down.get_type(), CandleType::Bearish);
        assert_eq!(down.body_range(), (395.0, 410.0));
    }

    #[test]
    fn rejects_non_positive_or_inverted_prices() {
        assert!(Candle::new(day(27), 400.0, 412.0, 398.0, 410.0, None).is_well_formed());
        assert!(!Candle::new(day(27), 0.0, 412.0, 398.0, 410.0, None).is_well_formed());
        assert!(!Candle::new(day(27), 400.0, 405.0, 398.0, 410.0, None).is_well_formed());
        assert!(!Candle::new(day(27), 400.0, f64::NAN, 398.0, 410.0, None).is_well_formed());
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Compound polarity of a text, always within [-1.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct SentimentScore(f64);

impl SentimentScore {
    pub const NEUTRAL: SentimentScore = SentimentScore(0.0);

    /// Clamps into range. NaN collapses to neutral.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NEUTRAL;
        }
        Self(value.clamp(-1.0, 1.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }
}

impl fmt::Display for SentimentScore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(SentimentScore::new(1.7).value(), 1.0);
        assert_eq!(SentimentScore::new(-3.0).value(), -1.0);
        assert_eq!(SentimentScore::new(f64::NAN), SentimentScore::NEUTRAL);
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(SentimentScore::new(0.8765).to_string(), "0.88");
        assert_eq!(SentimentScore::new(-0.5).to_string(), "-0.50");
    }
}

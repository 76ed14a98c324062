use std::{error::Error, fmt};

use chrono::NaiveDate;

/// Terminal failures an operator can see. Each variant has its own message.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The lexicon model could not be loaded. Fatal for the run.
    SentimentUnavailable(String),
    /// The event date was not `YYYY-MM-DD`.
    MalformedDate { input: String, reason: String },
    /// The provider returned nothing for the window.
    NoData {
        ticker: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnalysisError::SentimentUnavailable(msg) => {
                write!(f, "sentiment engine unavailable: {}", msg)
            }
            AnalysisError::MalformedDate { input, reason } => {
                write!(
                    f,
                    "input date malformed: {:?} ({}). Expected YYYY-MM-DD.",
                    input, reason
                )
            }
            AnalysisError::NoData { ticker, start, end } => {
                write!(
                    f,
                    "no data available for window: {} from {} to {} (exclusive)",
                    ticker, start, end
                )
            }
        }
    }
}

impl Error for AnalysisError {}

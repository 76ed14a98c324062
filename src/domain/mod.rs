// Domain types and value objects
mod candle;
mod event_window;
mod sentiment_score;

// Re-export commonly used types to the world
pub use candle::{Candle, CandleType};
pub use event_window::{EventWindow, WindowCalculator};
pub use sentiment_score::SentimentScore;

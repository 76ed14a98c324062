//! Configuration module for the earnings-pulse application.

mod analysis;
mod yahoo;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisConfig, WindowConfig};
pub use yahoo::{YAHOO, YahooApiConfig};

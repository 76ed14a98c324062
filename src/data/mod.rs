mod provider;
mod yahoo;

pub use {
    provider::{MarketDataProvider, validate_series},
    yahoo::YahooProvider,
};

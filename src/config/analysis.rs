/// Lookback/lookahead around the event date, in calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    pub lookback_days: i64,
    pub lookahead_days: i64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        ANALYSIS.window
    }
}

pub struct AnalysisConfig {
    pub window: WindowConfig,
    pub default_ticker: &'static str,
    /// Human readable reporting period shown in the title.
    pub period_label: &'static str,
    /// Prefix for the event marker, e.g. "Q4 2025 Earnings (Score: 0.87)"
    pub event_label: &'static str,
    pub currency_symbol: &'static str,
    pub currency_code: &'static str,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    window: WindowConfig {
        lookback_days: 10,
        lookahead_days: 1, // Reach past "today" so the latest session is included
    },
    default_ticker: "TSLA",
    period_label: "Q4 2025",
    event_label: "Q4 2025 Earnings",
    currency_symbol: "$",
    currency_code: "USD",
};

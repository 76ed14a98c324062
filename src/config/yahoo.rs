pub struct YahooApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for YahooApiConfig {
    fn default() -> Self {
        Self {
            base_url: YAHOO.chart_base_url.to_string(),
            timeout_ms: YAHOO.client.timeout_ms,
            user_agent: YAHOO.client.user_agent.to_string(),
        }
    }
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub user_agent: &'static str,
}

pub struct YahooConfig {
    pub chart_base_url: &'static str,
    /// Daily bars only
    pub interval: &'static str,
    pub client: ClientDefaults,
}

pub const YAHOO: YahooConfig = YahooConfig {
    chart_base_url: "https://query1.finance.yahoo.com/v8/finance/chart",
    interval: "1d",
    client: ClientDefaults {
        timeout_ms: 10_000,
        // Yahoo rejects requests without a browser-like agent
        user_agent: "Mozilla/5.0",
    },
};

pub struct UiText {
    pub window_title: &'static str,
    pub label_score: &'static str,
    pub label_latest_close: &'static str,
    pub label_candles: &'static str,
    pub plot_id: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "Earnings Pulse",
    label_score: "Sentiment",
    label_latest_close: "Latest close",
    label_candles: "sessions",
    plot_id: "event_chart",
};

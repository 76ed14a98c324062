//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- CANDLESTICKS ---
    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,
    pub candle_width_pct: f64,  // 0.0 to 1.0 (relative to one day)
    pub candle_wick_width: f32, // Pixels

    // --- EVENT MARKER ---
    pub event_marker_width: f32,
    pub event_marker_dash_length: f32,

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    /// Horizontal padding in days on each side of the series
    pub plot_x_padding_days: f64,

    pub color_text_primary: Color32,
    pub color_text_subdued: Color32,

    pub window_width: f32,
    pub window_height: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    candle_bullish_color: Color32::from_rgb(38, 166, 154), // TradingView Green
    candle_bearish_color: Color32::from_rgb(239, 83, 80),  // TradingView Red
    candle_width_pct: 0.6,
    candle_wick_width: 1.0,

    event_marker_width: 2.0,
    event_marker_dash_length: 8.0,

    plot_y_padding_pct: 0.05,
    plot_x_padding_days: 1.0,

    color_text_primary: Color32::from_rgb(220, 220, 220),
    color_text_subdued: Color32::from_rgb(140, 140, 140),

    window_width: 1200.0,
    window_height: 720.0,
};

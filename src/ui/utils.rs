use eframe::egui::{Color32, Context, Visuals};

use crate::chart::{ChartTheme, RgbColor};
use crate::config::ANALYSIS;
use crate::utils::epoch_ms_to_date_string;

pub fn to_color32(color: RgbColor) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Two decimals with the configured currency prefix, e.g. `$421.06`.
pub fn format_price(price: f64) -> String {
    format!("{}{:.2}", ANALYSIS.currency_symbol, price)
}

/// Axis tick label for an epoch-ms x value.
pub fn format_axis_date(epoch_ms: f64) -> String {
    epoch_ms_to_date_string(epoch_ms.round() as i64)
}

/// Applies the chart theme to the whole window
pub fn apply_theme(ctx: &Context, theme: ChartTheme) {
    let visuals = match theme {
        ChartTheme::Dark => Visuals::dark(),
        ChartTheme::Light => Visuals::light(),
    };
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_prices_with_currency() {
        assert_eq!(format_price(421.056), "$421.06");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn formats_axis_dates() {
        assert_eq!(format_axis_date(1_769_558_400_000.0), "2026-01-28");
    }

    #[test]
    fn converts_colors() {
        assert_eq!(
            to_color32(RgbColor::new(255, 215, 0)),
            Color32::from_rgb(255, 215, 0)
        );
    }
}

use eframe::egui::{Align2, Color32, RichText, Stroke};
use egui_plot::{Line, LineStyle, PlotPoint, PlotPoints, PlotUi, Polygon, Text, VLine};

use crate::chart::{AnnotationPosition, ChartDescription, MarkerStyle};
use crate::config::plot::PLOT_CONFIG;
use crate::domain::{Candle, CandleType};
use crate::ui::utils::to_color32;
use crate::utils::TimeUtils;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub chart: &'a ChartDescription,
    pub y_bounds: (f64, f64),
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

pub struct CandlestickLayer;

impl PlotLayer for CandlestickLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for candle in &ctx.chart.series {
            draw_candle(plot_ui, candle);
        }
    }
}

/// Dashed vertical line on the event date with its label at the top.
pub struct EventMarkerLayer;

impl PlotLayer for EventMarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let annotation = &ctx.chart.annotation;
        let x = annotation.timestamp_ms as f64;
        let color = to_color32(annotation.color);

        let style = match annotation.style {
            MarkerStyle::Dashed => LineStyle::Dashed {
                length: PLOT_CONFIG.event_marker_dash_length,
            },
            MarkerStyle::Solid => LineStyle::Solid,
        };

        plot_ui.vline(
            VLine::new("", x)
                .color(color)
                .style(style)
                .width(PLOT_CONFIG.event_marker_width),
        );

        // Text anchored by its opposite corner so it sits beside the line
        let anchor = match annotation.position {
            AnnotationPosition::TopLeft => Align2::RIGHT_TOP,
            AnnotationPosition::TopRight => Align2::LEFT_TOP,
        };
        let (_, y_max) = ctx.y_bounds;
        plot_ui.text(
            Text::new(
                "",
                PlotPoint::new(x, y_max),
                RichText::new(&annotation.label).strong().color(color),
            )
            .anchor(anchor),
        );
    }
}

// --- HELPERS ---
fn draw_candle(ui: &mut PlotUi, candle: &Candle) {
    let x = candle.timestamp_ms() as f64;
    let color = match candle.get_type() {
        CandleType::Bullish => PLOT_CONFIG.candle_bullish_color,
        CandleType::Bearish => PLOT_CONFIG.candle_bearish_color,
    };

    draw_wick_line(ui, x, candle.high_price, candle.low_price, color);

    let (body_bot, body_top_raw) = candle.body_range();
    // Doji check
    let body_top = if (body_top_raw - body_bot).abs() < f64::EPSILON {
        body_bot * 1.0001
    } else {
        body_top_raw
    };
    draw_body_rect(ui, x, body_top, body_bot, color);
}

#[inline]
fn draw_wick_line(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    ui.line(
        Line::new("", PlotPoints::new(vec![[x, bottom], [x, top]]))
            .color(color)
            .width(PLOT_CONFIG.candle_wick_width),
    );
}

#[inline]
fn draw_body_rect(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    let half_w = PLOT_CONFIG.candle_width_pct * TimeUtils::MS_IN_D as f64 / 2.0;
    let pts = vec![
        [x - half_w, bottom],
        [x + half_w, bottom],
        [x + half_w, top],
        [x - half_w, top],
    ];

    ui.polygon(
        Polygon::new("", PlotPoints::new(pts))
            .fill_color(color)
            .stroke(Stroke::NONE),
    );
}

use anyhow::{Result, anyhow};
use eframe::egui::{CentralPanel, Context, RichText, TopBottomPanel, ViewportBuilder};
use eframe::{Frame, NativeOptions};
use egui_plot::{Axis, AxisHints, HPlacement, Plot};

use crate::chart::ChartDescription;
use crate::config::plot::PLOT_CONFIG;
use crate::pipeline::ChartRenderer;
use crate::ui::plot_layers::{CandlestickLayer, EventMarkerLayer, LayerContext, PlotLayer};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::{apply_theme, format_axis_date, format_price, to_color32};
use crate::utils::TimeUtils;

/// Read-only window showing one chart description.
pub struct ChartApp {
    chart: ChartDescription,
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
}

impl ChartApp {
    pub fn new(cc: &eframe::CreationContext<'_>, chart: ChartDescription) -> Self {
        apply_theme(&cc.egui_ctx, chart.theme);
        Self::from_chart(chart)
    }

    fn from_chart(chart: ChartDescription) -> Self {
        let x_bounds = x_bounds(&chart);
        let y_bounds = y_bounds(&chart);
        Self {
            chart,
            x_bounds,
            y_bounds,
        }
    }

    fn latest_close(&self) -> Option<f64> {
        self.chart.series.last().map(|c| c.close_price)
    }
}

/// Series extent plus the marker, padded by whole days.
fn x_bounds(chart: &ChartDescription) -> (f64, f64) {
    let marker = chart.annotation.timestamp_ms as f64;
    let (min, max) = chart
        .x_values_ms()
        .iter()
        .fold((marker, marker), |(lo, hi), &x| {
            (lo.min(x as f64), hi.max(x as f64))
        });
    let pad = PLOT_CONFIG.plot_x_padding_days * TimeUtils::MS_IN_D as f64;
    (min - pad, max + pad)
}

fn y_bounds(chart: &ChartDescription) -> (f64, f64) {
    let (lo, hi) = chart.price_bounds().unwrap_or((0.0, 1.0));
    let pad = ((hi - lo) * PLOT_CONFIG.plot_y_padding_pct).max(f64::EPSILON);
    (lo - pad, hi + pad)
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        TopBottomPanel::top("chart_title").show(ctx, |ui| {
            ui.heading(&self.chart.title);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{}: {}",
                        UI_TEXT.label_score, self.chart.annotation.label
                    ))
                    .color(to_color32(self.chart.annotation.color)),
                );
                if let Some(close) = self.latest_close() {
                    ui.separator();
                    ui.label(
                        RichText::new(format!(
                            "{}: {}",
                            UI_TEXT.label_latest_close,
                            format_price(close)
                        ))
                        .color(PLOT_CONFIG.color_text_primary),
                    );
                }
                ui.separator();
                ui.label(
                    RichText::new(format!(
                        "{} {}",
                        self.chart.series.len(),
                        UI_TEXT.label_candles
                    ))
                    .color(PLOT_CONFIG.color_text_subdued),
                );
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            let x_axis = AxisHints::new(Axis::X)
                .label(self.chart.x_axis_label.clone())
                .formatter(|mark, _range| format_axis_date(mark.value));
            let y_axis = AxisHints::new_y()
                .label(self.chart.y_axis_label.clone())
                .formatter(|mark, _range| format_price(mark.value))
                .placement(HPlacement::Right);

            let (x_min, x_max) = self.x_bounds;
            let (y_min, y_max) = self.y_bounds;

            Plot::new(UI_TEXT.plot_id)
                .custom_x_axes(vec![x_axis])
                .custom_y_axes(vec![y_axis])
                .label_formatter(|_, point| {
                    format!("{}\n{}", format_axis_date(point.x), format_price(point.y))
                })
                .include_x(x_min)
                .include_x(x_max)
                .include_y(y_min)
                .include_y(y_max)
                .show(ui, |plot_ui| {
                    let ctx = LayerContext {
                        chart: &self.chart,
                        y_bounds: self.y_bounds,
                    };

                    // Marker under the candles so it never hides a session
                    let layers: [&dyn PlotLayer; 2] = [&EventMarkerLayer, &CandlestickLayer];
                    for layer in layers {
                        layer.render(plot_ui, &ctx);
                    }
                });
        });
    }
}

/// Opens a native window and blocks until it is closed.
#[derive(Debug, Default)]
pub struct EguiRenderer;

impl ChartRenderer for EguiRenderer {
    fn render(&mut self, chart: &ChartDescription) -> Result<()> {
        let chart = chart.clone();
        let options = NativeOptions {
            viewport: ViewportBuilder::default()
                .with_inner_size([PLOT_CONFIG.window_width, PLOT_CONFIG.window_height])
                .with_title(format!("{} - {}", UI_TEXT.window_title, chart.title)),
            ..Default::default()
        };

        eframe::run_native(
            UI_TEXT.window_title,
            options,
            Box::new(move |cc| Ok(Box::new(ChartApp::new(cc, chart)))),
        )
        .map_err(|e| anyhow!("Chart window failed: {}", e))
    }
}

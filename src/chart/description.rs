use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::domain::Candle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum AnnotationPosition {
    #[strum(serialize = "top left")]
    TopLeft,
    #[strum(serialize = "top right")]
    TopRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum MarkerStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum ChartTheme {
    Dark,
    Light,
}

/// The vertical event marker and its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAnnotation {
    /// Same unit as the candle x-axis: epoch ms at naive midnight
    pub timestamp_ms: i64,
    pub label: String,
    pub color: RgbColor,
    pub position: AnnotationPosition,
    pub style: MarkerStyle,
}

/// Everything a renderer needs to draw one chart. Consumed by a single render call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescription {
    pub series: Vec<Candle>,
    pub annotation: EventAnnotation,
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub theme: ChartTheme,
}

impl ChartDescription {
    pub fn x_values_ms(&self) -> Vec<i64> {
        self.series.iter().map(Candle::timestamp_ms).collect()
    }

    /// (min low, max high) across the series, `None` when empty.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        self.series.iter().fold(None, |acc, c| match acc {
            None => Some((c.low_price, c.high_price)),
            Some((lo, hi)) => Some((lo.min(c.low_price), hi.max(c.high_price))),
        })
    }
}

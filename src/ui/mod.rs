mod app;
mod plot_layers;
mod ui_text;
mod utils;

pub use app::{ChartApp, EguiRenderer};
pub use utils::{format_axis_date, format_price, to_color32};

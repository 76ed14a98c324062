mod builder;
mod description;
mod export;

pub use builder::ChartBuilder;
pub use export::JsonExporter;
pub use description::{
    AnnotationPosition, ChartDescription, ChartTheme, EventAnnotation, MarkerStyle, RgbColor,
};

// Core modules
pub mod chart;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod sentiment;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use chart::{ChartBuilder, ChartDescription, JsonExporter};
pub use data::{MarketDataProvider, YahooProvider};
pub use domain::{Candle, EventWindow, SentimentScore, WindowCalculator};
pub use error::AnalysisError;
pub use pipeline::{
    AnalysisOutcome, AnalysisPipeline, AnalysisRequest, AnalysisResult, ChartRenderer,
    PipelineStage,
};
pub use sentiment::SentimentScorer;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{ANALYSIS, YahooApiConfig};
use crate::ui::EguiRenderer;

// CLI argument parsing
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Equity ticker symbol
    #[arg(long, default_value = ANALYSIS.default_ticker)]
    pub ticker: String,

    /// Event (anchor) date, YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// Narrative text to score, e.g. an earnings-call summary
    #[arg(long, allow_hyphen_values = true)]
    pub text: String,

    /// Also write the chart description as JSON to this path
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Skip the interactive chart window
    #[arg(long, default_value_t = false)]
    pub no_display: bool,
}

/// Runs one analysis from CLI arguments against Yahoo Finance.
/// This is the public API for the binary to call
pub fn run_analysis(args: Cli) -> Result<AnalysisOutcome> {
    // Malformed input fails before anything is loaded or fetched
    let request = AnalysisRequest::parse(args.ticker, &args.date, args.text)?;

    let scorer = SentimentScorer::initialize();
    let provider = YahooProvider::new(YahooApiConfig::default())?;
    let renderer = (
        args.export.map(JsonExporter::new),
        (!args.no_display).then_some(EguiRenderer),
    );

    let mut pipeline = AnalysisPipeline::new(scorer, provider, renderer)?;
    pipeline.run(&request)
}

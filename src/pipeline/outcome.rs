use chrono::NaiveDate;
use serde::Serialize;
use strum_macros::Display;

use crate::{
    chart::ChartDescription,
    config::ANALYSIS,
    domain::{Candle, EventWindow, SentimentScore},
    error::AnalysisError,
};

/// `Idle -> Scored -> WindowComputed -> Fetched -> {Empty | Built -> Rendered}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PipelineStage {
    Idle,
    Scored,
    WindowComputed,
    Fetched,
    Empty,
    Built,
    Rendered,
}

impl PipelineStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineStage::Empty | PipelineStage::Rendered)
    }
}

/// Inputs for one run.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub ticker: String,
    pub anchor_date: NaiveDate,
    pub text: String,
}

impl AnalysisRequest {
    /// Parses the event date up front so a malformed date creates no state.
    pub fn parse(
        ticker: impl Into<String>,
        anchor_date: &str,
        text: impl Into<String>,
    ) -> Result<Self, AnalysisError> {
        Ok(Self {
            ticker: ticker.into(),
            anchor_date: crate::utils::parse_anchor_date(anchor_date)?,
            text: text.into(),
        })
    }
}

/// Immutable record of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub ticker: String,
    pub score: SentimentScore,
    pub window: EventWindow,
    pub chart: ChartDescription,
}

impl AnalysisResult {
    pub fn series(&self) -> &[Candle] {
        &self.chart.series
    }

    /// Close of the last session in the window. The series is never empty here.
    pub fn latest_close(&self) -> f64 {
        self.chart
            .series
            .last()
            .map(|c| c.close_price)
            .unwrap_or_default()
    }

    pub fn summary(&self) -> String {
        format!(
            "Latest {} Close Price: {}{:.2}",
            self.ticker,
            ANALYSIS.currency_symbol,
            self.latest_close()
        )
    }
}

#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    /// Provider had nothing for the window; nothing was built or rendered.
    Empty {
        ticker: String,
        score: SentimentScore,
        window: EventWindow,
    },
    Rendered(AnalysisResult),
}

impl AnalysisOutcome {
    pub fn stage(&self) -> PipelineStage {
        match self {
            AnalysisOutcome::Empty { .. } => PipelineStage::Empty,
            AnalysisOutcome::Rendered(_) => PipelineStage::Rendered,
        }
    }

    pub fn score(&self) -> SentimentScore {
        match self {
            AnalysisOutcome::Empty { score, .. } => *score,
            AnalysisOutcome::Rendered(result) => result.score,
        }
    }

    pub fn window(&self) -> &EventWindow {
        match self {
            AnalysisOutcome::Empty { window, .. } => window,
            AnalysisOutcome::Rendered(result) => &result.window,
        }
    }

    /// The single line reported to the operator.
    pub fn summary(&self) -> String {
        match self {
            AnalysisOutcome::Empty { ticker, window, .. } => AnalysisError::NoData {
                ticker: ticker.clone(),
                start: window.start,
                end: window.end,
            }
            .to_string(),
            AnalysisOutcome::Rendered(result) => result.summary(),
        }
    }
}

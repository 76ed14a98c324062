use anyhow::{Context, Result};
use tokio::runtime::{Builder, Runtime};

use crate::{
    chart::{ChartBuilder, ChartDescription},
    data::{MarketDataProvider, validate_series},
    domain::{Candle, EventWindow, WindowCalculator},
    pipeline::{AnalysisOutcome, AnalysisRequest, AnalysisResult, PipelineStage},
    sentiment::SentimentScorer,
};

/// Consumer of a finished chart description.
pub trait ChartRenderer {
    fn render(&mut self, chart: &ChartDescription) -> Result<()>;
}

/// A disabled renderer is a no-op.
impl<R: ChartRenderer> ChartRenderer for Option<R> {
    fn render(&mut self, chart: &ChartDescription) -> Result<()> {
        match self {
            Some(renderer) => renderer.render(chart),
            None => Ok(()),
        }
    }
}

/// Both renderers see the same chart, in order.
impl<A: ChartRenderer, B: ChartRenderer> ChartRenderer for (A, B) {
    fn render(&mut self, chart: &ChartDescription) -> Result<()> {
        self.0.render(chart)?;
        self.1.render(chart)
    }
}

/// Runs one analysis at a time, stage by stage.
///
/// The provider is async; its single call is driven to completion on a
/// private current-thread runtime so no stage ever overlaps another.
pub struct AnalysisPipeline<P, R> {
    scorer: SentimentScorer,
    windows: WindowCalculator,
    provider: P,
    builder: ChartBuilder,
    renderer: R,
    runtime: Runtime,
}

impl<P: MarketDataProvider, R: ChartRenderer> AnalysisPipeline<P, R> {
    pub fn new(scorer: SentimentScorer, provider: P, renderer: R) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start the fetch runtime")?;
        Ok(Self {
            scorer,
            windows: WindowCalculator::default(),
            provider,
            builder: ChartBuilder::default(),
            renderer,
            runtime,
        })
    }

    pub fn with_window_calculator(mut self, windows: WindowCalculator) -> Self {
        self.windows = windows;
        self
    }

    pub fn with_chart_builder(mut self, builder: ChartBuilder) -> Self {
        self.builder = builder;
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn enter(&self, stage: PipelineStage, request: &AnalysisRequest) {
        log::info!("[{}] {}", request.ticker, stage);
    }

    /// A failing provider is logged and treated as "no data". One attempt only.
    fn fetch(&self, ticker: &str, window: &EventWindow) -> Vec<Candle> {
        log::info!("Fetching latest market data for {}...", ticker);
        let fetched = self
            .runtime
            .block_on(self.provider.fetch_candles(ticker, window.start, window.end));
        match fetched {
            Ok(candles) => validate_series(candles, window),
            Err(e) => {
                log::error!("Market data fetch failed for {}: {:#}", ticker, e);
                Vec::new()
            }
        }
    }

    /// Score, window, fetch, then either stop at `Empty` or build and render.
    ///
    /// Only an unavailable sentiment engine or a renderer failure is an error.
    pub fn run(&mut self, request: &AnalysisRequest) -> Result<AnalysisOutcome> {
        self.enter(PipelineStage::Idle, request);

        let score = self.scorer.score(&request.text)?;
        self.enter(PipelineStage::Scored, request);
        log::info!("[{}] sentiment score {}", request.ticker, score);

        let window = self.windows.window(request.anchor_date);
        self.enter(PipelineStage::WindowComputed, request);
        log::info!(
            "[{}] window {} .. {} (anchor {})",
            request.ticker,
            window.start,
            window.end,
            window.anchor_date
        );

        let series = self.fetch(&request.ticker, &window);
        self.enter(PipelineStage::Fetched, request);

        if series.is_empty() {
            self.enter(PipelineStage::Empty, request);
            log::warn!(
                "[{}] no data available for {} .. {}",
                request.ticker,
                window.start,
                window.end
            );
            return Ok(AnalysisOutcome::Empty {
                ticker: request.ticker.clone(),
                score,
                window,
            });
        }

        let chart = self
            .builder
            .build(&series, request.anchor_date, score, &request.ticker);
        self.enter(PipelineStage::Built, request);

        let result = AnalysisResult {
            ticker: request.ticker.clone(),
            score,
            window,
            chart,
        };
        log::info!("{}", result.summary());

        self.renderer
            .render(&result.chart)
            .with_context(|| format!("Failed to render chart for {}", request.ticker))?;
        self.enter(PipelineStage::Rendered, request);

        Ok(AnalysisOutcome::Rendered(result))
    }
}

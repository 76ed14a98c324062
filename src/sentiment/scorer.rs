use std::{panic, sync::OnceLock};

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::{domain::SentimentScore, error::AnalysisError};

/// Built at most once per process. `Err` holds the reason the lexicon failed to load.
static ANALYZER: OnceLock<Result<SentimentIntensityAnalyzer<'static>, String>> = OnceLock::new();

/// Handle to the VADER lexicon model.
///
/// Construction never fails: a lexicon that cannot be loaded leaves the
/// handle unavailable and the error is reported by [`SentimentScorer::score`].
#[derive(Clone)]
pub struct SentimentScorer {
    engine: Result<&'static SentimentIntensityAnalyzer<'static>, String>,
}

impl SentimentScorer {
    /// Loads the lexicon on first call; later calls reuse it.
    pub fn initialize() -> Self {
        let loaded = ANALYZER.get_or_init(|| {
            log::info!("Loading VADER sentiment lexicon");
            // The lexicon is parsed lazily, so warm it up inside the guard
            panic::catch_unwind(|| {
                let analyzer = SentimentIntensityAnalyzer::new();
                analyzer.polarity_scores("warm up");
                analyzer
            })
            .map_err(|payload| {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "lexicon failed to load".to_string());
                log::error!("VADER lexicon unavailable: {}", reason);
                reason
            })
        });

        Self {
            engine: loaded.as_ref().map_err(Clone::clone),
        }
    }

    /// A scorer whose engine is known to be missing.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            engine: Err(reason.into()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.engine.is_ok()
    }

    /// Compound polarity of `text`. Empty or whitespace-only text is neutral.
    pub fn score(&self, text: &str) -> Result<SentimentScore, AnalysisError> {
        let analyzer = self
            .engine
            .as_ref()
            .map_err(|reason| AnalysisError::SentimentUnavailable(reason.clone()))?;

        if text.trim().is_empty() {
            return Ok(SentimentScore::NEUTRAL);
        }

        let scores = analyzer.polarity_scores(text);
        let compound = scores.get("compound").copied().unwrap_or(0.0);
        Ok(SentimentScore::new(compound))
    }
}

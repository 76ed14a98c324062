use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::{chart::ChartDescription, pipeline::ChartRenderer};

/// Writes the chart description as pretty JSON instead of drawing it.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    path: PathBuf,
}

impl JsonExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ChartRenderer for JsonExporter {
    fn render(&mut self, chart: &ChartDescription) -> Result<()> {
        let json = serde_json::to_string_pretty(chart).context("Failed to serialize chart")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write chart to {}", self.path.display()))?;
        log::info!("Chart description written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartBuilder;
    use crate::domain::{Candle, SentimentScore};
    use chrono::NaiveDate;

    #[test]
    fn writes_readable_json() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 28).unwrap();
        let chart = ChartBuilder::default().build(
            &[Candle::new(date, 1.0, 2.0, 0.5, 1.5, Some(10))],
            date,
            SentimentScore::new(0.25),
            "TSLA",
        );
        let path = std::env::temp_dir().join(format!("earnings_pulse_{}.json", std::process::id()));

        JsonExporter::new(&path).render(&chart).unwrap();
        let restored: ChartDescription =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(restored, chart);
    }
}

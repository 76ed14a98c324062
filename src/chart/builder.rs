use chrono::NaiveDate;

use crate::{
    chart::{
        AnnotationPosition, ChartDescription, ChartTheme, EventAnnotation, MarkerStyle, RgbColor,
    },
    config::ANALYSIS,
    domain::{Candle, SentimentScore},
    utils::date_to_epoch_ms,
};

const GOLD: RgbColor = RgbColor::new(255, 215, 0);

/// Assembles the candlestick + event marker description.
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    pub period_label: String,
    pub event_label: String,
    pub currency_code: String,
    pub marker_color: RgbColor,
    pub theme: ChartTheme,
}

impl Default for ChartBuilder {
    fn default() -> Self {
        Self {
            period_label: ANALYSIS.period_label.to_string(),
            event_label: ANALYSIS.event_label.to_string(),
            currency_code: ANALYSIS.currency_code.to_string(),
            marker_color: GOLD,
            theme: ChartTheme::Dark,
        }
    }
}

impl ChartBuilder {
    /// The series is copied as-is. The marker sits on `anchor_date` in the
    /// same epoch-ms unit as the candles so it lines up with that session.
    pub fn build(
        &self,
        series: &[Candle],
        anchor_date: NaiveDate,
        score: SentimentScore,
        ticker: &str,
    ) -> ChartDescription {
        let annotation = EventAnnotation {
            timestamp_ms: date_to_epoch_ms(anchor_date),
            label: format!("{} (Score: {:.2})", self.event_label, score.value()),
            color: self.marker_color,
            position: AnnotationPosition::TopLeft,
            style: MarkerStyle::Dashed,
        };

        ChartDescription {
            series: series.to_vec(),
            annotation,
            title: format!(
                "{} {} Earnings Analysis: Real-time Market Reaction",
                ticker, self.period_label
            ),
            x_axis_label: "Date".to_string(),
            y_axis_label: format!("Stock Price ({})", self.currency_code),
            theme: self.theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    fn series() -> Vec<Candle> {
        (20..=29)
            .map(|d| {
                let base = 400.0 + d as f64;
                Candle::new(date(d), base, base + 5.0, base - 5.0, base + 1.0, Some(1_000))
            })
            .collect()
    }

    #[test]
    fn keeps_every_candle_and_one_marker() {
        let input = series();
        let chart = ChartBuilder::default().build(&input, date(28), SentimentScore::new(0.87), "TSLA");
        assert_eq!(chart.series.len(), input.len());
        assert_eq!(chart.series, input);
        assert_eq!(chart.annotation.timestamp_ms, date_to_epoch_ms(date(28)));
    }

    #[test]
    fn marker_lines_up_with_anchor_candle() {
        let chart = ChartBuilder::default().build(&series(), date(28), SentimentScore::NEUTRAL, "TSLA");
        let xs = chart.x_values_ms();
        assert!(xs.contains(&chart.annotation.timestamp_ms));
    }

    #[test]
    fn labels_follow_ticker_and_score() {
        let chart = ChartBuilder::default().build(&series(), date(28), SentimentScore::new(-0.456), "AAPL");
        assert_eq!(chart.annotation.label, "Q4 2025 Earnings (Score: -0.46)");
        assert_eq!(
            chart.title,
            "AAPL Q4 2025 Earnings Analysis: Real-time Market Reaction"
        );
        assert_eq!(chart.y_axis_label, "Stock Price (USD)");
        assert_eq!(chart.annotation.position, AnnotationPosition::TopLeft);
        assert_eq!(chart.annotation.style, MarkerStyle::Dashed);
        assert_eq!(chart.theme, ChartTheme::Dark);
        assert_ne!(chart.annotation.color, RgbColor::new(38, 166, 154));
    }

    #[test]
    fn future_anchor_marker_without_data() {
        let chart = ChartBuilder::default().build(&series(), date(31), SentimentScore::NEUTRAL, "TSLA");
        let last = *chart.x_values_ms().last().unwrap();
        assert!(chart.annotation.timestamp_ms > last);
    }

    #[test]
    fn price_bounds_span_series() {
        let chart = ChartBuilder::default().build(&series(), date(28), SentimentScore::NEUTRAL, "TSLA");
        assert_eq!(chart.price_bounds(), Some((415.0, 434.0)));
    }
}

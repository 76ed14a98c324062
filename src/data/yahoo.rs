use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::{YAHOO, YahooApiConfig},
    data::MarketDataProvider,
    domain::Candle,
    utils::{date_to_epoch_sec, normalize_timestamp},
};

// Yahoo Finance v8 chart payload. Only the fields we read are modelled.

#[derive(Debug, Deserialize)]
struct YahooResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartData>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    meta: ChartMeta,
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    symbol: String,
    /// Exchange offset from UTC in seconds, e.g. -18000 for New York in winter
    #[serde(default)]
    gmtoffset: i64,
    #[serde(rename = "exchangeTimezoneName")]
    exchange_timezone_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    code: String,
    description: String,
}

fn cell<T: Copy>(values: &[Option<T>], idx: usize) -> Option<T> {
    values.get(idx).copied().flatten()
}

/// Turns a chart payload into naive-dated candles. Rows with a missing
/// price (holidays, halted sessions) are skipped; volume may be missing.
fn parse_chart_response(response: YahooResponse) -> Result<Vec<Candle>> {
    if let Some(error) = response.chart.error {
        bail!("Yahoo Finance error: {} - {}", error.code, error.description);
    }

    let Some(data) = response.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(Vec::new());
    };
    let Some(timestamps) = data.timestamp else {
        return Ok(Vec::new());
    };
    let quote = data.indicators.quote.into_iter().next().unwrap_or_default();

    log::debug!(
        "{}: {} rows, exchange tz {:?} (offset {}s)",
        data.meta.symbol,
        timestamps.len(),
        data.meta.exchange_timezone_name,
        data.meta.gmtoffset
    );

    let mut candles = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let (Some(open), Some(high), Some(low), Some(close)) = (
            cell(&quote.open, i),
            cell(&quote.high, i),
            cell(&quote.low, i),
            cell(&quote.close, i),
        ) else {
            continue;
        };
        let Some(local) = normalize_timestamp(ts, data.meta.gmtoffset) else {
            log::warn!("{}: skipping out-of-range timestamp {}", data.meta.symbol, ts);
            continue;
        };
        candles.push(Candle::new(
            local.date(),
            open,
            high,
            low,
            close,
            cell(&quote.volume, i),
        ));
    }

    candles.sort_by_key(|c| c.date);
    Ok(candles)
}

/// Daily bars from the public Yahoo Finance chart endpoint.
pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    pub fn new(config: YahooApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent)
            .build()
            .context("Failed to build HTTP client for Yahoo Finance")?;
        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn fetch_candles(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Candle>> {
        let url = format!("{}/{}", self.base_url, ticker);
        let query = [
            ("period1", date_to_epoch_sec(start).to_string()),
            ("period2", date_to_epoch_sec(end).to_string()),
            ("interval", YAHOO.interval.to_string()),
        ];

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .with_context(|| format!("Yahoo Finance request failed for {}", ticker))?;

        // Unknown symbols come back as 404 with a chart.error body, so parse before status
        let status = response.status();
        let body: YahooResponse = response.json().await.with_context(|| {
            format!("Unexpected Yahoo Finance payload for {} (HTTP {})", ticker, status)
        })?;

        parse_chart_response(body).with_context(|| format!("{} {}..{}", ticker, start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Vec<Candle>> {
        parse_chart_response(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn parses_daily_bars_into_exchange_dates() {
        // Timestamps are 09:30 New York, i.e. 14:30 UTC
        let json = r#"{"chart":{"result":[{
            "meta":{"symbol":"TSLA","gmtoffset":-18000,"exchangeTimezoneName":"America/New_York"},
            "timestamp":[1769610600,1769524200],
            "indicators":{"quote":[{
                "open":[430.0,420.5],
                "high":[440.0,425.0],
                "low":[428.0,415.0],
                "close":[438.5,421.0],
                "volume":[90000000,null]
            }]}
        }],"error":null}}"#;

        let candles = parse(json).unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].date, NaiveDate::from_ymd_opt(2026, 1, 27).unwrap());
        assert_eq!(candles[0].volume, None);
        assert_eq!(candles[1].date, NaiveDate::from_ymd_opt(2026, 1, 28).unwrap());
        assert_eq!(candles[1].close_price, 438.5);
        assert_eq!(candles[1].volume, Some(90_000_000));
    }

    #[test]
    fn skips_rows_with_missing_prices() {
        let json = r#"{"chart":{"result":[{
            "meta":{"symbol":"TSLA","gmtoffset":-18000},
            "timestamp":[1769524200,1769610600],
            "indicators":{"quote":[{
                "open":[null,430.0],
                "high":[null,440.0],
                "low":[null,428.0],
                "close":[null,438.5],
                "volume":[null,1]
            }]}
        }],"error":null}}"#;
        assert_eq!(parse(json).unwrap().len(), 1);
    }

    #[test]
    fn missing_result_is_empty_not_error() {
        let json = r#"{"chart":{"result":[{
            "meta":{"symbol":"TSLA","gmtoffset":-18000},
            "indicators":{"quote":[{}]}
        }],"error":null}}"#;
        assert!(parse(json).unwrap().is_empty());
        assert!(parse(r#"{"chart":{"result":null,"error":null}}"#).unwrap().is_empty());
    }

    #[test]
    fn surfaces_yahoo_errors() {
        let json = r#"{"chart":{"result":null,"error":{
            "code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        let err = parse(json).unwrap_err();
        assert!(err.to_string().contains("Not Found"));
    }
}

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use futures::future::join_all;
use serde::Deserialize;
use tokio::{task::JoinError, task::JoinHandle, time::Instant};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{ASSETS, COINGECKO};
use crate::data::{CreateSeriesData, SeriesCollection};
use crate::domain::PriceSeries;

/// The slice of the market_chart payload we care about: `prices` is an array
/// of `[timestamp_ms, price]` pairs (CoinGecko sends both as JSON numbers).
#[derive(Deserialize, Debug)]
struct MarketChart {
    prices: Vec<(f64, f64)>,
}

pub struct CoinGeckoVersion;

#[async_trait]
impl CreateSeriesData for CoinGeckoVersion {
    fn signature(&self) -> &'static str {
        "CoinGecko API"
    }

    async fn create_series_data(&self) -> Result<SeriesCollection> {
        let start_time = Instant::now();

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(COINGECKO.client.timeout_ms))
            .build()
            .context("Failed to build the HTTP client")?;

        let mut handles: Vec<JoinHandle<Result<PriceSeries>>> = Vec::new();
        for asset in ASSETS.assets {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_fetch_progress {
                log::info!("Fetching market chart for: {}", asset.id);
            }
            let handle = tokio::spawn(fetch_market_chart(client.clone(), asset.id));
            handles.push(handle);
        }

        let results: Vec<Result<Result<PriceSeries>, JoinError>> = join_all(handles).await;
        log::info!(
            "...Time to complete all market chart fetches: {:?}",
            start_time.elapsed()
        );

        let mut series_data = Vec::new();
        let mut errors = Vec::new();

        for result in results {
            let fetched = match result {
                Ok(inner_result) => inner_result,
                Err(e) => {
                    errors.push(format!("Request task failed: {:?}", e));
                    continue;
                }
            };

            match fetched {
                Ok(series) => {
                    log::info!(
                        "{}: {} price points from CoinGecko",
                        series.asset_id,
                        series.len()
                    );
                    series_data.push(series);
                }
                Err(e) => {
                    errors.push(format!("{:#}", e));
                }
            }
        }

        // Partial data would silently skew every comparison chart, so any
        // failed asset fails the whole provider and the chain moves on.
        if !errors.is_empty() {
            return Err(anyhow!("Failed to fetch data: {}", errors.join(", ")));
        }

        if series_data.is_empty() {
            bail!("CoinGecko returned no usable series at all");
        }

        Ok(SeriesCollection {
            name: "CoinGecko Series Collection".to_string(),
            series_data,
        })
    }
}

/// Fetch one asset's daily price history, with retry + backoff for the
/// free tier's rate limiting.
pub async fn fetch_market_chart(client: reqwest::Client, asset_id: &'static str) -> Result<PriceSeries> {
    let url = format!("{}/coins/{}/market_chart", COINGECKO.base_url, asset_id);
    let days = COINGECKO.history_days.to_string();

    let mut last_error = None;
    for attempt in 0..=COINGECKO.client.retries {
        if attempt > 0 {
            tokio::time::sleep(Duration::from_millis(
                COINGECKO.client.backoff_ms * attempt as u64,
            ))
            .await;
        }

        let response = client
            .get(&url)
            .query(&[
                ("vs_currency", COINGECKO.vs_currency),
                ("days", days.as_str()),
            ])
            .send()
            .await;

        match response {
            Ok(response) => match response.error_for_status() {
                Ok(response) => {
                    let chart: MarketChart = response
                        .json()
                        .await
                        .context(format!("Bad market_chart payload for {}", asset_id))?;
                    return chart_to_series(asset_id, chart);
                }
                Err(e) => last_error = Some(anyhow!(e)),
            },
            Err(e) => last_error = Some(anyhow!(e)),
        }

        log::warn!(
            "⚠️  Fetch attempt {}/{} failed for {}",
            attempt + 1,
            COINGECKO.client.retries + 1,
            asset_id
        );
    }

    Err(last_error
        .unwrap_or_else(|| anyhow!("exhausted retries"))
        .context(format!("Giving up on {}", asset_id)))
}

/// Convert the raw payload into a validated series.
///
/// CoinGecko occasionally repeats the most recent timestamp or interleaves a
/// live tick; those rows are dropped here so the series invariants hold.
fn chart_to_series(asset_id: &str, chart: MarketChart) -> Result<PriceSeries> {
    let mut timestamps_ms = Vec::with_capacity(chart.prices.len());
    let mut prices = Vec::with_capacity(chart.prices.len());
    let mut dropped = 0usize;

    for (raw_ts, price) in chart.prices {
        let ts = raw_ts as i64;
        let in_order = timestamps_ms.last().map(|last| ts > *last).unwrap_or(true);
        if !in_order || !price.is_finite() || price <= 0.0 {
            dropped += 1;
            continue;
        }
        timestamps_ms.push(ts);
        prices.push(price);
    }

    if dropped > 0 {
        log::warn!("{}: dropped {} out-of-order or invalid rows", asset_id, dropped);
    }

    if timestamps_ms.is_empty() {
        bail!("Empty market chart for {}", asset_id);
    }

    PriceSeries::new(asset_id.to_string(), timestamps_ms, prices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_to_series_drops_bad_rows() {
        let chart = MarketChart {
            prices: vec![
                (1_000.0, 10.0),
                (2_000.0, 11.0),
                (2_000.0, 11.5), // duplicate timestamp: dropped
                (3_000.0, -1.0), // non-positive price: dropped
                (4_000.0, 12.0),
            ],
        };

        let series = chart_to_series("bitcoin", chart).unwrap();
        assert_eq!(series.timestamps_ms, vec![1_000, 2_000, 4_000]);
        assert_eq!(series.prices, vec![10.0, 11.0, 12.0]);
    }

    #[test]
    fn test_empty_chart_is_an_error() {
        let chart = MarketChart { prices: vec![] };
        assert!(chart_to_series("bitcoin", chart).is_err());
    }

    #[test]
    fn test_payload_shape_deserializes() {
        let json = r#"{"prices": [[1700000000000, 3500000.5], [1700086400000, 3512345.0]]}"#;
        let chart: MarketChart = serde_json::from_str(json).unwrap();
        assert_eq!(chart.prices.len(), 2);
        assert_eq!(chart.prices[0].1, 3_500_000.5);
    }
}

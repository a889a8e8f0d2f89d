//! Standalone CSV refresh tool: pulls every cataloged asset's price history
//! from CoinGecko and rewrites the local store, without starting the GUI.

use anyhow::{Context, Result};
use risk_radar::config::{ASSETS, COINGECKO, DATA_PATH};
use risk_radar::data::coingecko::CoinGeckoVersion;
use risk_radar::data::csv_store::write_series_data_locally;
use risk_radar::data::CreateSeriesData;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Fetching {} days of history for {} assets (quoted in {})...",
        COINGECKO.history_days,
        ASSETS.assets.len(),
        COINGECKO.vs_currency.to_uppercase()
    );

    let provider = CoinGeckoVersion;
    let collection = provider
        .create_series_data()
        .await
        .context("CoinGecko fetch failed")?;

    for series in &collection.series_data {
        log::info!(
            "  {}: {} points ({} -> {})",
            series.asset_id,
            series.len(),
            series
                .first_timestamp_ms()
                .map(risk_radar::utils::time_utils::epoch_ms_to_utc)
                .unwrap_or_default(),
            series
                .last_timestamp_ms()
                .map(risk_radar::utils::time_utils::epoch_ms_to_utc)
                .unwrap_or_default(),
        );
    }

    write_series_data_locally(provider.signature(), &collection)?;
    log::info!(
        "✅ CSV store written to {:?} with {} assets.",
        DATA_PATH,
        collection.series_data.len()
    );
    Ok(())
}

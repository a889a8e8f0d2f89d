use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use csv::{Reader, Writer};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{ASSETS, DATA_PATH, csv_filename};
use crate::data::{CreateSeriesData, SeriesCollection};
use crate::domain::PriceSeries;
use crate::utils::time_utils::{epoch_ms_to_rfc3339, how_many_seconds_ago, rfc3339_to_epoch_ms};

pub fn asset_csv_path(asset_id: &str) -> PathBuf {
    PathBuf::from(DATA_PATH).join(csv_filename(asset_id))
}

/// Load one asset's CSV (header `timestamp,price`, RFC 3339 timestamps).
/// The series invariants are validated on the way in, so a hand-edited or
/// truncated file fails loudly here instead of poisoning the metrics.
pub fn load_series_from_path(asset_id: &str, path: &Path) -> Result<PriceSeries> {
    let file = File::open(path).context(format!("Failed to open CSV file: {:?}", path))?;
    let mut reader = Reader::from_reader(BufReader::new(file));

    let mut timestamps_ms = Vec::new();
    let mut prices = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result.context(format!("Failed to read CSV record in {:?}", path))?;
        if record.len() < 2 {
            bail!("Row {} of {:?} has {} fields, expected 2", row, path, record.len());
        }

        let timestamp_ms = rfc3339_to_epoch_ms(&record[0])
            .with_context(|| format!("Bad timestamp {:?} at row {} of {:?}", &record[0], row, path))?;
        let price: f64 = record[1]
            .parse()
            .with_context(|| format!("Bad price {:?} at row {} of {:?}", &record[1], row, path))?;

        timestamps_ms.push(timestamp_ms);
        prices.push(price);
    }

    PriceSeries::new(asset_id.to_string(), timestamps_ms, prices)
}

pub fn save_series_to_path(series: &PriceSeries, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }

    let file = File::create(path).context(format!("Failed to create file: {}", path.display()))?;
    let mut writer = Writer::from_writer(BufWriter::new(file));

    writer.write_record(["timestamp", "price"])?;
    for (ts, price) in series.timestamps_ms.iter().zip(series.prices.iter()) {
        writer.write_record([epoch_ms_to_rfc3339(*ts), price.to_string()])?;
    }

    writer
        .flush()
        .context(format!("Failed to flush CSV to: {}", path.display()))
}

/// Verify every cataloged asset has a CSV file younger than the limit.
/// When this fails, the only sensible choice left is the API.
pub fn check_local_data_validity(recency_required_secs: i64) -> Result<()> {
    for asset in ASSETS.assets {
        let path = asset_csv_path(asset.id);

        let metadata = std::fs::metadata(&path)
            .context(format!("Missing CSV file for {}: {:?}", asset.id, path))?;
        let modified_ms = metadata
            .modified()
            .context(format!("No modification time for {:?}", path))?
            .duration_since(UNIX_EPOCH)
            .context("File modification time predates the epoch")?
            .as_millis() as i64;

        let seconds_ago = how_many_seconds_ago(modified_ms);
        if seconds_ago > recency_required_secs {
            bail!(
                "CSV for {} too old: written {} seconds ago (limit: {} seconds)",
                asset.id,
                seconds_ago,
                recency_required_secs
            );
        }
    }

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_serde {
        log::info!(
            "✅ CSV store valid: {} assets within {}s",
            ASSETS.assets.len(),
            recency_required_secs
        );
    }

    Ok(())
}

/// Write every series in the collection back to the CSV store.
/// Only data that actually came from the API is worth persisting.
pub fn write_series_data_locally(
    series_signature: &'static str,
    collection: &SeriesCollection,
) -> Result<()> {
    if series_signature != "CoinGecko API" {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_serde {
            log::info!("Skipping CSV write (data not from CoinGecko API)");
        }
        return Ok(());
    }

    #[cfg(debug_assertions)]
    let start_time = DEBUG_FLAGS.print_serde.then(|| {
        log::info!("Writing CSV store to {:?}...", DATA_PATH);
        std::time::Instant::now()
    });

    for series in &collection.series_data {
        let path = asset_csv_path(&series.asset_id);
        save_series_to_path(series, &path)?;
    }

    #[cfg(debug_assertions)]
    if let Some(start) = start_time {
        log::info!(
            "✅ CSV store written: {} assets in {:.2}s",
            collection.series_data.len(),
            start.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

/// Async wrapper for write_series_data_locally
/// Spawns blocking task to avoid freezing UI
pub async fn write_series_data_async(
    series_signature: &'static str,
    collection: SeriesCollection,
) -> Result<()> {
    tokio::task::spawn_blocking(move || write_series_data_locally(series_signature, &collection))
        .await
        .context("CSV write task panicked")?
}

pub struct CsvStoreVersion;

#[async_trait]
impl CreateSeriesData for CsvStoreVersion {
    fn signature(&self) -> &'static str {
        "Local CSV Store"
    }

    async fn create_series_data(&self) -> Result<SeriesCollection> {
        #[cfg(debug_assertions)]
        let start_time = DEBUG_FLAGS.print_serde.then(|| {
            log::info!("Reading CSV store from {:?}...", DATA_PATH);
            std::time::Instant::now()
        });

        let collection = tokio::task::spawn_blocking(move || -> Result<SeriesCollection> {
            let mut series_data = Vec::new();
            for asset in ASSETS.assets {
                let path = asset_csv_path(asset.id);
                let series = load_series_from_path(asset.id, &path)?;
                series_data.push(series);
            }
            Ok(SeriesCollection {
                name: "CSV Series Collection".to_string(),
                series_data,
            })
        })
        .await
        .context("CSV load task panicked")?
        .context("Failed to load the CSV store")?;

        #[cfg(debug_assertions)]
        if let Some(start) = start_time {
            log::info!(
                "✅ CSV store loaded: {} assets in {:.2}s",
                collection.series_data.len(),
                start.elapsed().as_secs_f64()
            );
        }

        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_records_in_memory() {
        let csv_text = "timestamp,price\n\
                        2024-01-01T00:00:00+00:00,100.5\n\
                        2024-01-02T00:00:00+00:00,101.25\n";
        let mut reader = Reader::from_reader(csv_text.as_bytes());

        let mut timestamps = Vec::new();
        let mut prices = Vec::new();
        for record in reader.records() {
            let record = record.unwrap();
            timestamps.push(rfc3339_to_epoch_ms(&record[0]).unwrap());
            prices.push(record[1].parse::<f64>().unwrap());
        }

        let series = PriceSeries::new("bitcoin".to_string(), timestamps, prices).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.latest_price(), Some(101.25));
    }

    #[test]
    fn test_written_rows_parse_back() {
        // Exercises both formatting directions without touching the filesystem
        let ts = 1_700_000_000_000i64;
        let rendered = epoch_ms_to_rfc3339(ts);
        assert_eq!(rfc3339_to_epoch_ms(&rendered), Some(ts));
    }
}

// Data loading and caching
pub mod coingecko;
pub mod csv_store;
pub mod startup;

// Re-export commonly used items
pub use startup::load_series_data;

use std::collections::BTreeSet;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::PriceSeries;

#[async_trait]
pub trait CreateSeriesData {
    // Either create a full series collection OR return an anyhow::error
    async fn create_series_data(&self) -> Result<SeriesCollection>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

pub async fn get_series_data_async(
    implementations: &[Box<dyn CreateSeriesData>],
) -> Result<(SeriesCollection, &'static str)> {
    for imp in implementations {
        match imp.create_series_data().await {
            Ok(data) => {
                let signature = imp.signature();
                return Ok((data, signature));
            }
            Err(e) => {
                log::info!("Error with an async implementation: {}", e);
                // Continue to the next implementation
            }
        }
    }
    Err(anyhow!("All async implementations failed to create data"))
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct SeriesCollection {
    pub name: String, // Metadata e.g. "CoinGecko Series Collection".
    pub series_data: Vec<PriceSeries>,
}

impl SeriesCollection {
    pub fn asset_ids(&self) -> Vec<String> {
        // BTreeSet maintains sorted order and ensures uniqueness
        self.series_data
            .iter()
            .map(|s| s.asset_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn find_series(&self, asset_id: &str) -> Result<&PriceSeries> {
        self.series_data
            .iter()
            .find(|s| s.asset_id == asset_id)
            .ok_or_else(|| anyhow!("No price series loaded for asset {}", asset_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_ids_are_sorted_and_unique() {
        let make = |id: &str| {
            PriceSeries::new(id.to_string(), vec![0, 1], vec![1.0, 2.0]).unwrap()
        };
        let collection = SeriesCollection {
            name: "test".to_string(),
            series_data: vec![make("solana"), make("bitcoin"), make("solana")],
        };

        assert_eq!(collection.asset_ids(), vec!["bitcoin", "solana"]);
        assert!(collection.find_series("bitcoin").is_ok());
        assert!(collection.find_series("cardano").is_err());
    }
}

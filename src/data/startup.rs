// Async code to run in main before egui starts up

use crate::Cli;
use crate::config::PERSISTENCE;
use crate::data::coingecko::CoinGeckoVersion;
use crate::data::csv_store::{CsvStoreVersion, check_local_data_validity};
use crate::data::{CreateSeriesData, SeriesCollection, get_series_data_async};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Load the price data before the GUI starts (so it can't rely on app state).
///
/// If the CSV store fails its freshness check the API is the only choice;
/// otherwise both providers are available and the CLI flag picks which one
/// gets the first try.
pub async fn load_series_data(args: &Cli) -> (SeriesCollection, &'static str) {
    let providers: Vec<Box<dyn CreateSeriesData>> = {
        let api_first = args.prefer_api;
        match (
            api_first,
            check_local_data_validity(PERSISTENCE.csv.acceptable_age_secs),
        ) {
            (false, Ok(_)) => vec![Box::new(CsvStoreVersion), Box::new(CoinGeckoVersion)], // local first
            (true, Ok(_)) => vec![Box::new(CoinGeckoVersion), Box::new(CsvStoreVersion)], // API first
            (_, Err(e)) => {
                log::warn!("⚠️  Local CSV store validation failed: {:#}", e);
                log::warn!("⚠️  Falling back to the CoinGecko API...");
                vec![Box::new(CoinGeckoVersion)] // API only
            }
        }
    };

    let (collection, signature) = get_series_data_async(&providers)
        .await
        .expect("failed to retrieve any price data so exiting main function!");

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_serde {
        log::info!("Successfully retrieved price data using: {}.", signature);
        log::info!("Data load complete.");
    }
    (collection, signature)
}

//! Configuration module for the risk analyzer application.

pub mod analysis;
pub mod assets;
pub mod coingecko;

mod debug; // Can be private now because we have a public re-export. Forces files to use crate::config::DEBUG_FLAGS not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use analysis::ANALYSIS;
pub use assets::{ASSETS, AssetCatalog, AssetSpec};
pub use coingecko::COINGECKO;
pub use persistence::{APP_STATE_PATH, DATA_PATH, PERSISTENCE, csv_filename};

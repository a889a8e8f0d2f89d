//! File persistence configuration

/// Directory path for storing per-asset CSV price files
pub const DATA_PATH: &str = "data";

pub struct CsvStoreConfig {
    /// Maximum age of the CSV files (seconds) before the store is
    /// considered stale and the API takes priority
    pub acceptable_age_secs: i64,
}

pub struct PersistenceConfig {
    pub csv: CsvStoreConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    csv: CsvStoreConfig {
        // 24 hours (60 * 60 * 24)
        acceptable_age_secs: 86_400,
    },
};

/// Generate the CSV filename for an asset
/// Example: "bitcoin.csv"
pub fn csv_filename(asset_id: &str) -> String {
    format!("{}.csv", asset_id)
}

// App state persistence
/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = ".states.json";

#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use analysis::{MetricBundle, MetricsError, RiskLabel, classify_risk, compute_metrics};
pub use data::{SeriesCollection, load_series_data};
pub use domain::{PriceSeries, ReturnSeries};
pub use ui::RiskRadarApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use the CoinGecko API as primary source instead of the local CSV store
    #[arg(long, default_value_t = false)]
    pub prefer_api: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    collection: SeriesCollection,
    source: &str,
) -> Box<dyn eframe::App> {
    let app = ui::RiskRadarApp::new(cc, &config::ASSETS, collection, source);
    Box::new(app)
}

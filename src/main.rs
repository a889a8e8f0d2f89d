#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use risk_radar::{Cli, load_series_data, run_app};

fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use risk_radar::config::APP_STATE_PATH;
    use risk_radar::data::csv_store::write_series_data_async;
    use std::path::PathBuf;
    use tokio::runtime::Runtime;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Data Loading (Blocking)
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let (collection, source_signature) = rt.block_on(load_series_data(&args));

    // D. Background CSV Write (only persists API-sourced data)
    let store_copy = collection.clone();
    rt.spawn(async move {
        if let Err(e) = write_series_data_async(source_signature, store_copy).await {
            log::error!("⚠️  Failed to write CSV store: {}", e);
        }
    });

    // E. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        "Risk Radar - Crypto Volatility & Risk Analyzer",
        options,
        Box::new(move |cc| Ok(run_app(cc, collection, source_signature))),
    )
}

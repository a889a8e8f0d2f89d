use eframe::egui;
use poll_promise::Promise;

use crate::data::coingecko::CoinGeckoVersion;
use crate::data::csv_store::write_series_data_locally;
use crate::data::CreateSeriesData;
use crate::ui::app::{AppError, RiskRadarApp};

impl RiskRadarApp {
    /// Kick off a background CoinGecko refresh. No-op while one is running.
    pub(super) fn start_refresh(&mut self) {
        if self.refresh_promise.is_some() {
            return;
        }

        log::info!("⟳ Refreshing price data from CoinGecko...");

        // The fetch is async but the UI thread must not block, so the worker
        // thread hosts its own small runtime for the duration of the call.
        let promise = Promise::spawn_thread("coingecko_refresh", move || {
            let provider = CoinGeckoVersion;
            let runtime = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;

            let collection = runtime
                .block_on(provider.create_series_data())
                .map_err(|e| format!("{:#}", e))?;

            // Persist while still off the UI thread; a failed write is worth
            // a log line but not a failed refresh.
            if let Err(e) = write_series_data_locally(provider.signature(), &collection) {
                log::error!("⚠️  Failed to write refreshed CSV store: {:#}", e);
            }

            Ok(collection)
        });

        self.refresh_promise = Some(promise);
    }

    pub(super) fn poll_refresh(&mut self, ctx: &egui::Context) {
        let outcome = self
            .refresh_promise
            .as_ref()
            .and_then(|promise| promise.ready().cloned());

        if let Some(result) = outcome {
            self.refresh_promise = None;

            match result {
                Ok(collection) => {
                    log::info!(
                        "✅ Refresh complete: {} assets loaded",
                        collection.series_data.len()
                    );
                    self.data_state.collection = collection;
                    self.data_state.source = "CoinGecko API".to_string();
                    self.data_state.last_error = None;

                    // Force the next frame to recompute against the new data
                    self.last_calculated_params = None;
                }
                Err(message) => {
                    log::error!("❌ Refresh failed: {}", message);
                    self.data_state.last_error = Some(AppError::RefreshFailed(message));
                }
            }
        } else if self.refresh_promise.is_some() {
            ctx.request_repaint();
        }
    }

    pub(super) fn is_refreshing(&self) -> bool {
        self.refresh_promise.is_some()
    }
}

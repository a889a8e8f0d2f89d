use eframe::{Frame, egui};
use poll_promise::Promise;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::analysis::classifier::{RiskLabel, classify_risk};
use crate::analysis::metrics::{MetricBundle, MetricsError, compute_metrics};
use crate::config::{ANALYSIS, ASSETS, AssetCatalog};
use crate::data::SeriesCollection;
use crate::domain::PriceSeries;
use crate::ui::ui_plot_view::{ChartKind, ChartView};
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Error types for application operations
#[derive(Debug, Clone)]
pub enum AppError {
    /// No data is available for the operation
    DataNotAvailable,
    /// The selected asset is invalid or not found
    UnknownAsset(String),
    /// A background refresh failed
    RefreshFailed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DataNotAvailable => write!(f, "No data available"),
            AppError::UnknownAsset(asset) => write!(f, "Invalid or missing asset: {}", asset),
            AppError::RefreshFailed(msg) => write!(f, "Refresh failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Parameters that feed the metric computations.
///
/// Implements PartialEq so a render can cheaply detect whether anything that
/// affects the summaries actually changed since the last computation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsParams {
    pub selected_asset: Option<String>,
    pub comparison_assets: Vec<String>,
    pub lookback_days: u64,
}

/// Everything the dashboard derives from one asset under the current params.
#[derive(Clone, Debug)]
pub struct AssetRiskSummary {
    pub asset_id: String,
    pub metrics: Result<MetricBundle, MetricsError>,
    pub risk: Option<RiskLabel>,
    pub latest_price: Option<f64>,
}

#[derive(Default)]
pub struct DataState {
    pub collection: SeriesCollection,
    pub source: String,
    pub last_error: Option<AppError>,
}

impl DataState {
    pub fn new(collection: SeriesCollection, source: String) -> Self {
        Self {
            collection,
            source,
            last_error: None,
        }
    }
}

#[derive(Deserialize, Serialize)]
pub struct RiskRadarApp {
    // UI state
    #[serde(default = "default_selected_asset")]
    pub(super) selected_asset: Option<String>,
    #[serde(default = "default_comparison_assets")]
    pub(super) comparison_assets: Vec<String>,
    #[serde(default = "default_lookback_days")]
    pub(super) lookback_days: u64,
    #[serde(default = "default_rolling_window_days")]
    pub(super) rolling_window_days: usize,
    #[serde(default)]
    pub(super) chart_kind: ChartKind,

    // Data state - skip serialization since it contains runtime-only data
    #[serde(skip)]
    pub(super) data_state: DataState,
    #[serde(skip)]
    pub(super) chart_view: ChartView,
    #[serde(skip, default = "default_catalog")]
    pub(super) catalog: &'static AssetCatalog,

    // Per-asset outputs for the current params, plus the params snapshot that
    // produced them so focus changes don't force pointless recomputes.
    #[serde(skip)]
    pub(super) summaries: HashMap<String, AssetRiskSummary>,
    #[serde(skip)]
    pub(super) last_calculated_params: Option<MetricsParams>,

    // Background refresh state
    #[serde(skip)]
    pub(super) refresh_promise: Option<Promise<Result<SeriesCollection, String>>>,

    // Help panel visibility
    #[serde(skip)]
    pub(super) show_help: bool,
}

/// Default value for selected asset - used by serde and initialization
fn default_selected_asset() -> Option<String> {
    ASSETS.assets.first().map(|a| a.id.to_string())
}

fn default_comparison_assets() -> Vec<String> {
    ASSETS
        .assets
        .iter()
        .take(ASSETS.default_comparison_count)
        .map(|a| a.id.to_string())
        .collect()
}

fn default_lookback_days() -> u64 {
    ANALYSIS.lookback.default_days
}

fn default_rolling_window_days() -> usize {
    ANALYSIS.rolling.default_days
}

fn default_catalog() -> &'static AssetCatalog {
    &ASSETS
}

impl RiskRadarApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        catalog: &'static AssetCatalog,
        collection: SeriesCollection,
        source: &str,
    ) -> Self {
        let mut app: RiskRadarApp;

        // Attempt to load the persisted state
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Successfully loaded persisted state");
                }
                app = value;
            } else {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Failed to get app state from storage. Creating anew.");
                }
                app = RiskRadarApp::new_with_initial_state();
            }
        } else {
            app = RiskRadarApp::new_with_initial_state();
        }

        app.catalog = catalog;
        app.data_state = DataState::new(collection, source.to_string());
        app.chart_view = ChartView::new();
        app.summaries = HashMap::new();
        app.last_calculated_params = None;

        let available = app.data_state.collection.asset_ids();
        if available.is_empty() {
            app.data_state.last_error = Some(AppError::DataNotAvailable);
            log::error!("No assets available in the loaded collection");
            return app;
        }

        // Validate that the selected asset exists in current data, or pick the first one
        let selected_is_known = app
            .selected_asset
            .as_ref()
            .map(|selected| available.contains(selected))
            .unwrap_or(false);
        if !selected_is_known {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!(
                    "Selected asset {:?} not found, defaulting to first available",
                    app.selected_asset
                );
            }
            app.selected_asset = available.first().cloned();
        }

        // Drop any persisted comparison picks the collection no longer has
        app.comparison_assets.retain(|id| available.contains(id));
        if app.comparison_assets.is_empty() {
            app.comparison_assets = available
                .iter()
                .take(catalog.default_comparison_count)
                .cloned()
                .collect();
        }

        app.lookback_days = app
            .lookback_days
            .clamp(ANALYSIS.lookback.min_days, ANALYSIS.lookback.max_days);
        app.rolling_window_days = app
            .rolling_window_days
            .clamp(ANALYSIS.rolling.min_days, ANALYSIS.rolling.max_days);

        app.recompute_summaries();
        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            selected_asset: default_selected_asset(),
            comparison_assets: default_comparison_assets(),
            lookback_days: default_lookback_days(),
            rolling_window_days: default_rolling_window_days(),
            chart_kind: ChartKind::default(),
            data_state: DataState::default(),
            chart_view: ChartView::default(),
            catalog: default_catalog(),
            summaries: HashMap::new(),
            last_calculated_params: None,
            refresh_promise: None,
            show_help: false,
        }
    }

    pub(super) fn current_params(&self) -> MetricsParams {
        // Sorted so toggling order can't masquerade as a parameter change
        let mut comparison_assets = self.comparison_assets.clone();
        comparison_assets.sort();

        MetricsParams {
            selected_asset: self.selected_asset.clone(),
            comparison_assets,
            lookback_days: self.lookback_days,
        }
    }

    pub(super) fn recompute_if_needed(&mut self) {
        let params = self.current_params();
        if self.last_calculated_params.as_ref() != Some(&params) {
            self.recompute_summaries();
        }
    }

    /// Recompute every visible asset's metric summary.
    ///
    /// Pure, independent computations, so the comparison set is fanned out
    /// across threads. The benchmark series is trimmed once and shared.
    pub(super) fn recompute_summaries(&mut self) {
        let params = self.current_params();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_metrics_events {
            log::info!(
                "Recomputing metric summaries for {:?} over {} days",
                params.selected_asset,
                params.lookback_days
            );
        }

        let benchmark: Option<PriceSeries> = self
            .data_state
            .collection
            .find_series(self.catalog.benchmark_id)
            .ok()
            .map(|series| series.tail_days(params.lookback_days));

        // Selected asset plus every comparison pick, deduplicated
        let mut targets = params.comparison_assets.clone();
        if let Some(selected) = &params.selected_asset {
            if !targets.contains(selected) {
                targets.push(selected.clone());
            }
        }

        let collection = &self.data_state.collection;
        let lookback_days = params.lookback_days;

        let computed: Vec<AssetRiskSummary> = targets
            .par_iter()
            .filter_map(|asset_id| {
                let series = match collection.find_series(asset_id) {
                    Ok(series) => series.tail_days(lookback_days),
                    Err(e) => {
                        log::warn!("Skipping {}: {}", asset_id, e);
                        return None;
                    }
                };

                let metrics = compute_metrics(&series, benchmark.as_ref());
                let risk = metrics
                    .as_ref()
                    .ok()
                    .map(|m| classify_risk(m.daily_volatility, m.sharpe_ratio));

                Some(AssetRiskSummary {
                    asset_id: asset_id.clone(),
                    metrics,
                    risk,
                    latest_price: series.latest_price(),
                })
            })
            .collect();

        self.summaries = computed
            .into_iter()
            .map(|summary| (summary.asset_id.clone(), summary))
            .collect();

        // Surface a missing *selected* asset; missing comparison picks just
        // drop out of the charts.
        self.data_state.last_error = match &params.selected_asset {
            Some(selected) if !self.summaries.contains_key(selected) => {
                Some(AppError::UnknownAsset(selected.clone()))
            }
            None => Some(AppError::DataNotAvailable),
            _ => None,
        };

        self.last_calculated_params = Some(params);
    }

    pub(super) fn selected_summary(&self) -> Option<&AssetRiskSummary> {
        self.selected_asset
            .as_ref()
            .and_then(|id| self.summaries.get(id))
    }

    /// The selected asset's series, already trimmed to the lookback window.
    pub(super) fn selected_series(&self) -> Option<PriceSeries> {
        self.selected_asset
            .as_ref()
            .and_then(|id| self.data_state.collection.find_series(id).ok())
            .map(|series| series.tail_days(self.lookback_days))
    }

    pub(super) fn handle_asset_selection(&mut self, asset_id: String) {
        if self.selected_asset.as_ref() == Some(&asset_id) {
            return;
        }
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("A new asset was selected: {}", asset_id);
        }
        self.selected_asset = Some(asset_id);
    }

    pub(super) fn toggle_comparison_asset(&mut self, asset_id: String) {
        if let Some(pos) = self.comparison_assets.iter().position(|id| *id == asset_id) {
            self.comparison_assets.remove(pos);
        } else {
            self.comparison_assets.push(asset_id);
        }
    }
}

impl eframe::App for RiskRadarApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Cancel and clean up any in-flight refresh
        if let Some(promise) = self.refresh_promise.take() {
            drop(promise);
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Swap in freshly fetched data once the background refresh lands
        self.poll_refresh(ctx);

        // Cheap change detection keeps recomputes off the per-frame path
        self.recompute_if_needed();

        self.handle_global_shortcuts(ctx);

        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
        self.render_status_panel(ctx);
        if self.show_help {
            self.render_help_panel(ctx);
        }
    }
}

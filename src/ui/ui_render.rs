use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Grid, Key, Margin, RichText, SidePanel, TopBottomPanel,
    Ui, Window,
};
use strum::IntoEnumIterator;

use crate::analysis::metrics::MetricBundle;
use crate::analysis::rolling::rolling_volatility;
use crate::config::plot::PLOT_CONFIG;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{ControlsEventChanged, ControlsPanel, Panel};
use crate::ui::ui_plot_view::{ChartKind, ComparisonLine, ScatterEntry};
use crate::ui::utils::format_price;

use super::app::RiskRadarApp;

impl RiskRadarApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("left_panel")
            .min_width(180.0)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let events = self.controls_panel(ui);

                for event in events {
                    match event {
                        ControlsEventChanged::Asset(asset_id) => {
                            self.handle_asset_selection(asset_id);
                        }
                        ControlsEventChanged::ComparisonToggled(asset_id) => {
                            self.toggle_comparison_asset(asset_id);
                        }
                        ControlsEventChanged::LookbackDays(days) => {
                            self.lookback_days = days;
                        }
                        ControlsEventChanged::RollingWindowDays(window) => {
                            self.rolling_window_days = window;
                        }
                        ControlsEventChanged::RefreshRequested => {
                            self.start_refresh();
                        }
                    }
                }
            });
    }

    fn controls_panel(&mut self, ui: &mut Ui) -> Vec<ControlsEventChanged> {
        let available_assets = self.data_state.collection.asset_ids();
        let mut panel = ControlsPanel::new(
            self.catalog,
            self.selected_asset.clone(),
            &self.comparison_assets,
            available_assets,
            self.lookback_days,
            self.rolling_window_days,
            self.is_refreshing(),
        );
        panel.render(ui)
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.add_space(10.0);

                self.render_header(ui);
                ui.separator();

                self.render_metrics_strip(ui);
                ui.add_space(8.0);
                ui.separator();

                self.render_chart_tabs(ui);
                ui.add_space(4.0);
                self.render_active_chart(ui);
            });
    }

    fn render_header(&mut self, ui: &mut Ui) {
        ui.heading(
            RichText::new(UI_TEXT.app_title)
                .color(UI_CONFIG.colors.heading)
                .strong(),
        );

        if let Some(asset_id) = self.selected_asset.clone() {
            let name = self.catalog.display_name(&asset_id);
            let symbol = self.catalog.symbol(&asset_id);
            let price_text = self
                .selected_summary()
                .and_then(|summary| summary.latest_price)
                .map(format_price)
                .unwrap_or_else(|| UI_TEXT.metric_not_available.to_string());

            ui.label(
                RichText::new(format!("{} ({}) {}", name, symbol, price_text))
                    .heading()
                    .color(UI_CONFIG.colors.accent),
            );
        }
    }

    fn render_metrics_strip(&mut self, ui: &mut Ui) {
        ui.add_space(4.0);
        ui.label_subheader(UI_TEXT.metrics_heading);
        ui.add_space(4.0);

        let summary = match self.selected_summary() {
            Some(summary) => summary.clone(),
            None => {
                ui.label_subdued("No metrics for the current selection.");
                return;
            }
        };

        match &summary.metrics {
            Ok(bundle) => {
                self.render_metric_values(ui, bundle);

                if let Some(risk) = summary.risk {
                    let color = match risk {
                        crate::analysis::RiskLabel::High => PLOT_CONFIG.risk_high_color,
                        crate::analysis::RiskLabel::Medium => PLOT_CONFIG.risk_medium_color,
                        crate::analysis::RiskLabel::Low => PLOT_CONFIG.risk_low_color,
                    };
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{}: {}", UI_TEXT.risk_level_prefix, risk))
                            .strong()
                            .color(color),
                    );
                }
            }
            Err(error) => {
                // The explicit error kinds render as N/A plus an explanation,
                // instead of quietly showing NaN metrics.
                let na = UI_TEXT.metric_not_available;
                ui.horizontal(|ui| {
                    ui.metric(UI_TEXT.metric_daily_vol, na, Color32::GRAY);
                    ui.separator();
                    ui.metric(UI_TEXT.metric_annual_vol, na, Color32::GRAY);
                    ui.separator();
                    ui.metric(UI_TEXT.metric_sharpe, na, Color32::GRAY);
                    ui.separator();
                    ui.metric(UI_TEXT.metric_beta, na, Color32::GRAY);
                });
                ui.add_space(4.0);
                ui.label_warning(format!("{}", error));
            }
        }
    }

    fn render_metric_values(&self, ui: &mut Ui, bundle: &MetricBundle) {
        let value_color = Color32::from_rgb(100, 200, 255);
        ui.horizontal(|ui| {
            ui.metric(
                UI_TEXT.metric_daily_vol,
                &format!("{:.4}", bundle.daily_volatility),
                value_color,
            );
            ui.separator();
            ui.metric(
                UI_TEXT.metric_annual_vol,
                &format!("{:.4}", bundle.annual_volatility),
                value_color,
            );
            ui.separator();
            ui.metric(
                UI_TEXT.metric_sharpe,
                &format!("{:.4}", bundle.sharpe_ratio),
                value_color,
            );
            ui.separator();
            let beta_text = bundle
                .beta
                .map(|beta| format!("{:.4}", beta))
                .unwrap_or_else(|| UI_TEXT.metric_not_available.to_string());
            ui.metric(UI_TEXT.metric_beta, &beta_text, value_color);
        });
    }

    fn render_chart_tabs(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            for kind in ChartKind::iter() {
                let selected = self.chart_kind == kind;
                if ui.selectable_label(selected, kind.to_string()).clicked() {
                    self.chart_kind = kind;
                }
            }
        });
    }

    fn render_active_chart(&mut self, ui: &mut Ui) {
        match self.chart_kind {
            ChartKind::PriceTrend => self.render_price_trend(ui),
            ChartKind::RollingVolatility => self.render_rolling_volatility(ui),
            ChartKind::Comparison => self.render_comparison(ui),
            ChartKind::RiskReturn => self.render_risk_return(ui),
        }
    }

    fn render_price_trend(&mut self, ui: &mut Ui) {
        let Some(series) = self.selected_series() else {
            self.render_chart_placeholder(ui);
            return;
        };
        let name = self
            .selected_asset
            .as_deref()
            .map(|id| self.catalog.display_name(id).to_string())
            .unwrap_or_default();
        self.chart_view.show_price_trend(ui, &name, &series);
    }

    fn render_rolling_volatility(&mut self, ui: &mut Ui) {
        let Some(series) = self.selected_series() else {
            self.render_chart_placeholder(ui);
            return;
        };
        let points = rolling_volatility(&series, self.rolling_window_days);
        let name = self
            .selected_asset
            .as_deref()
            .map(|id| self.catalog.symbol(id).to_string())
            .unwrap_or_default();
        self.chart_view
            .show_rolling_volatility(ui, &name, &points, self.rolling_window_days);
    }

    fn render_comparison(&mut self, ui: &mut Ui) {
        // Catalog order keeps the palette assignment stable across toggles
        let mut lines = Vec::new();
        for (index, asset) in self.catalog.assets.iter().enumerate() {
            if !self.comparison_assets.iter().any(|id| id == asset.id) {
                continue;
            }
            let Ok(series) = self.data_state.collection.find_series(asset.id) else {
                continue;
            };
            let palette = PLOT_CONFIG.comparison_palette;
            lines.push(ComparisonLine {
                symbol: asset.symbol.to_string(),
                color: palette[index % palette.len()],
                series: series.tail_days(self.lookback_days),
            });
        }

        if lines.is_empty() {
            self.render_chart_placeholder(ui);
            return;
        }
        self.chart_view.show_comparison(ui, lines);
    }

    fn render_risk_return(&mut self, ui: &mut Ui) {
        let entries: Vec<ScatterEntry> = self
            .catalog
            .assets
            .iter()
            .filter(|asset| self.comparison_assets.iter().any(|id| id == asset.id))
            .filter_map(|asset| {
                let summary = self.summaries.get(asset.id)?;
                let bundle = summary.metrics.as_ref().ok()?;
                Some(ScatterEntry {
                    symbol: asset.symbol.to_string(),
                    annual_volatility: bundle.annual_volatility,
                    sharpe_ratio: bundle.sharpe_ratio,
                })
            })
            .collect();

        self.chart_view.show_risk_return(ui, entries);
    }

    fn render_chart_placeholder(&mut self, ui: &mut Ui) {
        if let Some(error) = &self.data_state.last_error {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading("⚠ Unable to Display Chart");
                ui.add_space(10.0);
                ui.label(format!("Error: {}", error));
                ui.add_space(20.0);
                ui.label("Please check your asset selection and try again.");
            });
        } else {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.spinner();
                ui.add_space(12.0);
                ui.heading("Preparing data...");
            });
        }
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. Data provenance
                    let source = if self.data_state.source.is_empty() {
                        UI_TEXT.metric_not_available
                    } else {
                        self.data_state.source.as_str()
                    };
                    ui.metric(
                        UI_TEXT.status_source_label,
                        source,
                        Color32::from_rgb(100, 200, 255),
                    );
                    ui.separator();

                    // 2. Collection stats
                    let asset_count = self.data_state.collection.asset_ids().len();
                    ui.label_subdued(format!("📊 {} {}", asset_count, UI_TEXT.status_assets_label));
                    if let Some(series) = self.selected_series() {
                        ui.label_subdued(format!(
                            "{} {}",
                            series.len(),
                            UI_TEXT.status_points_label
                        ));
                    }
                    ui.separator();

                    // 3. Active analysis window
                    ui.label_subdued(format!(
                        "🕒 {}: {}d / rolling {}d",
                        UI_TEXT.status_window_label, self.lookback_days, self.rolling_window_days
                    ));
                    ui.separator();

                    // 4. Refresh / error state
                    if self.is_refreshing() {
                        ui.label_warning(UI_TEXT.status_refreshing);
                        ui.separator();
                    }
                    if let Some(error) = &self.data_state.last_error {
                        ui.label_error(format!("{}", error));
                    }
                });
            });
    }

    fn render_shortcut_rows(ui: &mut Ui, rows: &[(&str, &str)]) {
        for (key, description) in rows {
            ui.label(RichText::new(*key).monospace().strong());
            ui.label(*description);
            ui.end_row();
        }
    }

    pub(super) fn render_help_panel(&mut self, ctx: &Context) {
        Window::new(UI_TEXT.help_title)
            .open(&mut self.show_help)
            .resizable(false)
            .collapsible(false)
            .default_width(400.0)
            .show(ctx, |ui| {
                ui.heading("Keyboard Shortcuts");
                ui.add_space(10.0);

                let shortcuts = [
                    ("H", "Toggle this help panel"),
                    ("R", "Refresh price data from CoinGecko"),
                    ("1", "Show the price trend chart"),
                    ("2", "Show the rolling volatility chart"),
                    ("3", "Show the price comparison chart"),
                    ("4", "Show the risk vs return scatter"),
                ];

                Grid::new("shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        Self::render_shortcut_rows(ui, &shortcuts);
                    });

                ui.add_space(10.0);
                ui.separator();
                ui.add_space(5.0);
            });
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // Use 1/2/3/4 keys to switch charts
            if i.key_pressed(Key::Num1) {
                self.chart_kind = ChartKind::PriceTrend;
            }
            if i.key_pressed(Key::Num2) {
                self.chart_kind = ChartKind::RollingVolatility;
            }
            if i.key_pressed(Key::Num3) {
                self.chart_kind = ChartKind::Comparison;
            }
            if i.key_pressed(Key::Num4) {
                self.chart_kind = ChartKind::RiskReturn;
            }

            if i.key_pressed(Key::H) {
                self.show_help = !self.show_help;
            }

            if i.key_pressed(Key::Escape) && self.show_help {
                self.show_help = false;
            }

            if i.key_pressed(Key::R) && !self.is_refreshing() {
                self.start_refresh();
            }
        });
    }
}

use eframe::egui::{Button, Color32, RichText, ScrollArea, Slider, Ui};

use crate::config::{ANALYSIS, AssetCatalog};
use crate::ui::config::UI_TEXT;
use crate::ui::utils::{colored_subsection_heading, section_heading, spaced_separator};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug)]
pub enum ControlsEventChanged {
    Asset(String),
    ComparisonToggled(String),
    LookbackDays(u64),
    RollingWindowDays(usize),
    RefreshRequested,
}

/// Panel for the sidebar controls: asset focus, comparison set and the two
/// analysis sliders.
pub struct ControlsPanel<'a> {
    catalog: &'static AssetCatalog,
    selected_asset: Option<String>,
    comparison_assets: &'a [String],
    available_assets: Vec<String>,
    lookback_days: u64,
    rolling_window_days: usize,
    refresh_in_progress: bool,
}

impl<'a> ControlsPanel<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        catalog: &'static AssetCatalog,
        selected_asset: Option<String>,
        comparison_assets: &'a [String],
        available_assets: Vec<String>,
        lookback_days: u64,
        rolling_window_days: usize,
        refresh_in_progress: bool,
    ) -> Self {
        Self {
            catalog,
            selected_asset,
            comparison_assets,
            available_assets,
            lookback_days,
            rolling_window_days,
            refresh_in_progress,
        }
    }

    fn render_asset_selector(&mut self, ui: &mut Ui) -> Option<String> {
        let mut changed = None;
        let previously_selected = self.selected_asset.clone();

        ui.label(colored_subsection_heading(UI_TEXT.asset_selector_heading));
        ScrollArea::vertical()
            .max_height(160.)
            .id_salt("asset_selector")
            .show(ui, |ui| {
                for asset_id in &self.available_assets {
                    let is_selected = self.selected_asset.as_ref() == Some(asset_id);
                    let label = format!(
                        "{} ({})",
                        self.catalog.display_name(asset_id),
                        self.catalog.symbol(asset_id)
                    );
                    if ui.selectable_label(is_selected, label).clicked() {
                        self.selected_asset = Some(asset_id.clone());
                        changed = Some(asset_id.clone());
                    }
                }
            });

        // Defensive check: catch changes even if .clicked() didn't fire
        if self.selected_asset != previously_selected {
            changed = self.selected_asset.clone();
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("A new asset was selected: {:?}", self.selected_asset);
            }
        }

        changed
    }

    fn render_comparison_picker(&mut self, ui: &mut Ui) -> Vec<String> {
        let mut toggled = Vec::new();

        ui.label(colored_subsection_heading(UI_TEXT.comparison_heading));
        for asset_id in &self.available_assets {
            let mut checked = self.comparison_assets.contains(asset_id);
            if ui
                .checkbox(&mut checked, self.catalog.symbol(asset_id))
                .changed()
            {
                toggled.push(asset_id.clone());
            }
        }
        ui.label(
            RichText::new(UI_TEXT.comparison_helper)
                .small()
                .color(Color32::GRAY),
        );

        toggled
    }

    fn render_lookback_slider(&mut self, ui: &mut Ui) -> Option<u64> {
        let mut changed = None;

        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.lookback_heading));

        let mut lookback = self.lookback_days as f64;
        let response = ui.add(
            Slider::new(
                &mut lookback,
                ANALYSIS.lookback.min_days as f64..=ANALYSIS.lookback.max_days as f64,
            )
            .integer()
            .suffix(" days"),
        );

        let new_value = lookback.round() as u64;
        self.lookback_days = new_value;

        if response.changed() {
            changed = Some(new_value);
        }

        let helper_text = format!(
            "{}{}{}",
            UI_TEXT.lookback_helper_prefix, new_value, UI_TEXT.lookback_helper_suffix
        );
        ui.label(RichText::new(helper_text).small().color(Color32::GRAY));

        changed
    }

    fn render_rolling_window_slider(&mut self, ui: &mut Ui) -> Option<usize> {
        let mut changed = None;

        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.rolling_heading));

        let mut window = self.rolling_window_days as f64;
        let response = ui.add(
            Slider::new(
                &mut window,
                ANALYSIS.rolling.min_days as f64..=ANALYSIS.rolling.max_days as f64,
            )
            .integer()
            .suffix(" days"),
        );

        let new_value = window.round() as usize;
        self.rolling_window_days = new_value;

        if response.changed() {
            changed = Some(new_value);
        }

        let helper_text = format!(
            "{}{}{}",
            UI_TEXT.rolling_helper_prefix, new_value, UI_TEXT.rolling_helper_suffix
        );
        ui.label(RichText::new(helper_text).small().color(Color32::GRAY));

        changed
    }

    fn render_refresh_button(&mut self, ui: &mut Ui) -> bool {
        ui.add_space(5.0);
        let button = Button::new(UI_TEXT.refresh_button);
        let clicked = ui
            .add_enabled(!self.refresh_in_progress, button)
            .clicked();

        if self.refresh_in_progress {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(
                    RichText::new(UI_TEXT.refresh_in_progress)
                        .small()
                        .color(Color32::GRAY),
                );
            });
        }

        clicked
    }
}

impl<'a> Panel for ControlsPanel<'a> {
    type Event = ControlsEventChanged;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.controls_heading);

        if let Some(asset) = self.render_asset_selector(ui) {
            events.push(ControlsEventChanged::Asset(asset));
        }
        spaced_separator(ui);

        for asset in self.render_comparison_picker(ui) {
            events.push(ControlsEventChanged::ComparisonToggled(asset));
        }
        spaced_separator(ui);

        if let Some(days) = self.render_lookback_slider(ui) {
            events.push(ControlsEventChanged::LookbackDays(days));
        }
        spaced_separator(ui);

        if let Some(window) = self.render_rolling_window_slider(ui) {
            events.push(ControlsEventChanged::RollingWindowDays(window));
        }
        spaced_separator(ui);

        if self.render_refresh_button(ui) {
            events.push(ControlsEventChanged::RefreshRequested);
        }

        ui.add_space(20.0);
        events
    }
}

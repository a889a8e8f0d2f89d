use colorgrad::Gradient;
use eframe::egui::{self, Align2, Color32, RichText};
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Line, MarkerShape, Plot, PlotPoint,
    PlotPoints, Points, Text};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::PriceSeries;
use crate::ui::config::UI_TEXT;
use crate::ui::utils::format_price;
use crate::utils::maths_utils;
use crate::utils::time_utils::epoch_sec_to_utc;

/// Which of the dashboard charts is showing in the central panel.
#[derive(
    Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ChartKind {
    #[default]
    #[strum(serialize = "Price Trend")]
    PriceTrend,
    #[strum(serialize = "Rolling Volatility")]
    RollingVolatility,
    #[strum(serialize = "Price Comparison")]
    Comparison,
    #[strum(serialize = "Risk vs Return")]
    RiskReturn,
}

/// One asset's coordinates in the risk-return scatter.
pub struct ScatterEntry {
    pub symbol: String,
    pub annual_volatility: f64,
    pub sharpe_ratio: f64,
}

/// A labeled line for the comparison chart. Owns its (already trimmed)
/// series so the caller doesn't have to keep the collection borrowed.
pub struct ComparisonLine {
    pub symbol: String,
    pub color: Color32,
    pub series: PriceSeries,
}

#[derive(Default)]
pub struct ChartView;

impl ChartView {
    pub fn new() -> Self {
        Self
    }

    pub fn show_price_trend(&mut self, ui: &mut egui::Ui, name: &str, series: &PriceSeries) {
        let points = series_to_points(series);

        Plot::new("price_trend")
            .custom_x_axes(vec![date_axis()])
            .custom_y_axes(vec![price_axis()])
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(name.to_string(), PlotPoints::new(points))
                        .color(PLOT_CONFIG.price_line_color)
                        .width(PLOT_CONFIG.line_width),
                );
            });
    }

    pub fn show_rolling_volatility(
        &mut self,
        ui: &mut egui::Ui,
        name: &str,
        rolling_points: &[(i64, f64)],
        window_days: usize,
    ) {
        if rolling_points.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(format!(
                    "Not enough history for a {}-day rolling window.",
                    window_days
                ));
            });
            return;
        }

        let points: Vec<[f64; 2]> = rolling_points
            .iter()
            .map(|(ts, vol)| [*ts as f64 / 1000.0, *vol])
            .collect();

        Plot::new("rolling_volatility")
            .custom_x_axes(vec![date_axis()])
            .custom_y_axes(vec![volatility_axis()])
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(name.to_string(), PlotPoints::new(points))
                        .color(PLOT_CONFIG.rolling_vol_line_color)
                        .width(PLOT_CONFIG.line_width),
                );
            });
    }

    pub fn show_comparison(&mut self, ui: &mut egui::Ui, lines: Vec<ComparisonLine>) {
        let legend = Legend::default().position(Corner::RightTop);

        Plot::new("price_comparison")
            .legend(legend)
            .custom_x_axes(vec![date_axis()])
            .custom_y_axes(vec![price_axis()])
            .show(ui, |plot_ui| {
                for line in lines {
                    plot_ui.line(
                        Line::new(
                            line.symbol.clone(),
                            PlotPoints::new(series_to_points(&line.series)),
                        )
                        .color(line.color)
                        .width(PLOT_CONFIG.line_width),
                    );
                }
            });
    }

    pub fn show_risk_return(&mut self, ui: &mut egui::Ui, entries: Vec<ScatterEntry>) {
        if entries.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label("No comparison assets with computable metrics.");
            });
            return;
        }

        let grad = colorgrad::GradientBuilder::new()
            .html_colors(PLOT_CONFIG.scatter_gradient_colors)
            .build::<colorgrad::CatmullRomGradient>()
            .expect("Failed to create color gradient");

        let vols: Vec<f64> = entries.iter().map(|e| e.annual_volatility).collect();
        let sharpes: Vec<f64> = entries.iter().map(|e| e.sharpe_ratio).collect();
        let (sharpe_min, sharpe_max) =
            (maths_utils::get_min(&sharpes), maths_utils::get_max(&sharpes));
        let sharpe_span = (sharpe_max - sharpe_min).max(f64::EPSILON);

        // Pad explicit bounds so the labels above the points stay inside
        let x_pad = (maths_utils::get_max(&vols) - maths_utils::get_min(&vols)).max(0.1) * 0.2;
        let y_pad = (sharpe_max - sharpe_min).max(0.5) * 0.25;
        let x_min = maths_utils::get_min(&vols) - x_pad;
        let x_max = maths_utils::get_max(&vols) + x_pad;
        let y_min = sharpe_min - y_pad;
        let y_max = sharpe_max + y_pad;

        Plot::new("risk_return_scatter")
            .custom_x_axes(vec![scatter_x_axis()])
            .custom_y_axes(vec![scatter_y_axis()])
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(x_min..=x_max);
                plot_ui.set_plot_bounds_y(y_min..=y_max);

                for entry in &entries {
                    let t = (entry.sharpe_ratio - sharpe_min) / sharpe_span;
                    let color = to_egui_color(grad.at(t as f32));

                    // Bubble size tracks |Sharpe|
                    let radius = (PLOT_CONFIG.scatter_base_radius
                        + PLOT_CONFIG.scatter_radius_per_sharpe
                            * entry.sharpe_ratio.abs() as f32)
                        .min(PLOT_CONFIG.scatter_max_radius);

                    plot_ui.points(
                        Points::new(
                            entry.symbol.clone(),
                            PlotPoints::new(vec![[entry.annual_volatility, entry.sharpe_ratio]]),
                        )
                        .shape(MarkerShape::Circle)
                        .radius(radius)
                        .color(color),
                    );

                    plot_ui.text(
                        Text::new(
                            entry.symbol.clone(),
                            PlotPoint::new(entry.annual_volatility, entry.sharpe_ratio),
                            RichText::new(entry.symbol.clone()).strong(),
                        )
                        .color(color)
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }
            });
    }
}

// Helpers retained locally for the chart builders

fn series_to_points(series: &PriceSeries) -> Vec<[f64; 2]> {
    series
        .timestamps_ms
        .iter()
        .zip(series.prices.iter())
        .map(|(&ts, &price)| [ts as f64 / 1000.0, price])
        .collect()
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

fn date_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis_date)
        .formatter(move |grid_mark, _range| epoch_sec_to_utc(grid_mark.value as i64))
}

fn price_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis_price)
        .formatter(|grid_mark, _range| format_price(grid_mark.value))
        .placement(HPlacement::Left)
}

fn volatility_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis_rolling_vol)
        .formatter(|grid_mark, _range| format!("{:.2}", grid_mark.value))
        .placement(HPlacement::Left)
}

fn scatter_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis_annual_vol)
        .formatter(|grid_mark, _range| format!("{:.2}", grid_mark.value))
}

fn scatter_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis_sharpe)
        .formatter(|grid_mark, _range| format!("{:.2}", grid_mark.value))
        .placement(HPlacement::Left)
}

//! Chart visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub price_line_color: Color32,
    pub rolling_vol_line_color: Color32,
    // One line color per catalog slot in the comparison chart
    pub comparison_palette: &'static [Color32],
    // Gradient colors for the risk-return scatter (low Sharpe -> high Sharpe)
    pub scatter_gradient_colors: &'static [&'static str],
    /// Base radius of a scatter point
    pub scatter_base_radius: f32,
    /// Extra radius per unit of |Sharpe|
    pub scatter_radius_per_sharpe: f32,
    /// Radius ceiling so an outlier Sharpe can't swallow the plot
    pub scatter_max_radius: f32,
    /// Width of the chart lines
    pub line_width: f32,

    // Risk badge colors
    pub risk_high_color: Color32,
    pub risk_medium_color: Color32,
    pub risk_low_color: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    price_line_color: Color32::from_rgb(0, 191, 255),       // Deep sky blue
    rolling_vol_line_color: Color32::from_rgb(255, 165, 0), // Orange
    comparison_palette: &[
        Color32::from_rgb(247, 147, 26), // Bitcoin orange
        Color32::from_rgb(98, 126, 234), // Ethereum violet-blue
        Color32::from_rgb(20, 241, 149), // Solana green
        Color32::from_rgb(194, 166, 51), // Dogecoin gold
        Color32::from_rgb(0, 51, 173),   // Cardano blue
    ],
    // From weak Sharpe (firebrick) to strong Sharpe (green)
    scatter_gradient_colors: &["#b22222", "#ff8c00", "#ffb703", "#9acd32", "#2e8b57"],
    scatter_base_radius: 4.0,
    scatter_radius_per_sharpe: 3.0,
    scatter_max_radius: 18.0,
    line_width: 1.5,

    risk_high_color: Color32::from_rgb(255, 100, 100),
    risk_medium_color: Color32::from_rgb(255, 215, 0),
    risk_low_color: Color32::from_rgb(130, 200, 140),
};

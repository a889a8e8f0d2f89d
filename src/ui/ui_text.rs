//! Every user-facing string in one place.

pub struct UiText {
    // Side panel
    pub controls_heading: &'static str,
    pub asset_selector_heading: &'static str,
    pub comparison_heading: &'static str,
    pub comparison_helper: &'static str,
    pub lookback_heading: &'static str,
    pub lookback_helper_prefix: &'static str,
    pub lookback_helper_suffix: &'static str,
    pub rolling_heading: &'static str,
    pub rolling_helper_prefix: &'static str,
    pub rolling_helper_suffix: &'static str,
    pub refresh_button: &'static str,
    pub refresh_in_progress: &'static str,

    // Central panel
    pub app_title: &'static str,
    pub metrics_heading: &'static str,
    pub metric_daily_vol: &'static str,
    pub metric_annual_vol: &'static str,
    pub metric_sharpe: &'static str,
    pub metric_beta: &'static str,
    pub metric_not_available: &'static str,
    pub risk_level_prefix: &'static str,

    // Charts
    pub plot_x_axis_date: &'static str,
    pub plot_y_axis_price: &'static str,
    pub plot_y_axis_rolling_vol: &'static str,
    pub plot_x_axis_annual_vol: &'static str,
    pub plot_y_axis_sharpe: &'static str,

    // Status bar
    pub status_source_label: &'static str,
    pub status_assets_label: &'static str,
    pub status_points_label: &'static str,
    pub status_window_label: &'static str,
    pub status_refreshing: &'static str,

    // Help panel
    pub help_title: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    controls_heading: "Controls",
    asset_selector_heading: "Cryptocurrency (single view)",
    comparison_heading: "Compare",
    comparison_helper: "Assets shown in the comparison and scatter charts",
    lookback_heading: "History Window",
    lookback_helper_prefix: "Metrics and charts use the last ",
    lookback_helper_suffix: " days of data",
    rolling_heading: "Rolling Volatility Window",
    rolling_helper_prefix: "Standard deviation over ",
    rolling_helper_suffix: "-day windows",
    refresh_button: "⟳  Refresh from CoinGecko",
    refresh_in_progress: "Fetching latest prices…",

    app_title: "Crypto Volatility & Risk Analyzer",
    metrics_heading: "Key Risk Metrics",
    metric_daily_vol: "Daily Volatility",
    metric_annual_vol: "Annual Volatility",
    metric_sharpe: "Sharpe Ratio",
    metric_beta: "Beta (vs BTC)",
    metric_not_available: "N/A",
    risk_level_prefix: "Risk Level",

    plot_x_axis_date: "Date",
    plot_y_axis_price: "Price",
    plot_y_axis_rolling_vol: "Annualized Volatility",
    plot_x_axis_annual_vol: "Annual Volatility",
    plot_y_axis_sharpe: "Sharpe Ratio",

    status_source_label: "Source",
    status_assets_label: "assets",
    status_points_label: "points",
    status_window_label: "Window",
    status_refreshing: "⟳ Refreshing…",

    help_title: "⌨️ Keyboard Shortcuts",
};

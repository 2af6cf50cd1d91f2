//! Plot visualization configuration

use eframe::egui::Color32;

pub struct ChartConfig {
    // --- CANDLESTICKS ---
    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,
    pub candle_width_pct: f64,  // 0.0 to 1.0 (relative to one timeframe step)
    pub candle_wick_width: f32, // Pixels

    // --- TREND RIBBON (dual-series EMA line) ---
    pub ribbon_above_color: Color32,
    pub ribbon_below_color: Color32,
    pub ribbon_width: f32,
    pub slow_ema_color: Color32,
    pub slow_ema_width: f32,

    // --- SIGNAL MARKERS ---
    pub marker_buy_color: Color32,
    pub marker_sell_color: Color32,
    /// Vertical offset in *pixels*: buys sit this far below the bar low,
    /// sells this far above the bar high.
    pub marker_offset_px: f32,
    pub marker_radius_px: f32,

    /// Y-Axis padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_y_padding_pct: f64,
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
    candle_bullish_color: Color32::from_rgb(38, 166, 154),  // Teal
    candle_bearish_color: Color32::from_rgb(239, 83, 80),   // Soft Red
    candle_width_pct: 0.7,
    candle_wick_width: 1.0,

    ribbon_above_color: Color32::from_rgb(0, 200, 83),      // Green while price holds above
    ribbon_below_color: Color32::from_rgb(255, 82, 82),     // Red while price sits below
    ribbon_width: 2.0,
    slow_ema_color: Color32::from_gray(140),
    slow_ema_width: 1.0,

    marker_buy_color: Color32::from_rgb(0, 230, 118),
    marker_sell_color: Color32::from_rgb(255, 90, 90),
    marker_offset_px: 14.0,
    marker_radius_px: 6.0,

    plot_y_padding_pct: 0.05,
};

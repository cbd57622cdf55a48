//! Price chart configuration

use eframe::egui::Color32;

pub struct ChartConfig {
    /// Number of synthetic daily candles.
    pub candle_count: usize,
    /// Price the synthetic walk starts from.
    pub seed_price: f64,
    /// Maximum open->close move per candle (centred, so +/- half of this).
    pub max_body_move: f64,
    /// Maximum distance a wick extends past the body.
    pub max_wick: f64,

    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,
    pub candle_width_pct: f64, // 0.0 to 1.0 (relative to one day)
    pub candle_wick_width: f32, // Pixels
    pub height: f32,
}

pub const CHART: ChartConfig = ChartConfig {
    candle_count: 30,
    seed_price: 85.0,
    max_body_move: 3.0,
    max_wick: 2.0,

    candle_bullish_color: Color32::from_rgb(0x10, 0xb9, 0x81),
    candle_bearish_color: Color32::from_rgb(0xef, 0x44, 0x44),
    candle_width_pct: 0.7,
    candle_wick_width: 1.5,
    height: 400.0,
};

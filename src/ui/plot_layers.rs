use eframe::egui::{Color32, Stroke};
use egui_plot::{Line, LineStyle, PlotPoints, PlotUi, Polygon};

use crate::config::CHART;
use crate::domain::{Candle, CandleType};
use crate::ui::UiPalette;
use crate::utils::date_to_epoch_days;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub candles: &'a [Candle],
    pub palette: &'a UiPalette,
    pub quoted_price: f64,
    pub x_bounds: (f64, f64),
}

pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// CANDLES
// ============================================================================
pub struct CandlestickLayer;

impl PlotLayer for CandlestickLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for candle in ctx.candles {
            let x = date_to_epoch_days(candle.date) as f64;
            let color = match candle.get_type() {
                CandleType::Bullish => CHART.candle_bullish_color,
                CandleType::Bearish => CHART.candle_bearish_color,
            };
            let (body_bottom, body_top) = candle.body_range();

            draw_wick_line(plot_ui, x, candle.high_price, candle.low_price, color);
            // Doji candles still get a visible sliver.
            let body_top = if body_top - body_bottom < 0.05 {
                body_bottom + 0.05
            } else {
                body_top
            };
            draw_body_rect(plot_ui, x, body_top, body_bottom, color);
        }
    }
}

// ============================================================================
// QUOTED PRICE
// ============================================================================
pub struct PriceLineLayer;

impl PlotLayer for PriceLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let (x_min, x_max) = ctx.x_bounds;
        plot_ui.line(
            Line::new(
                "",
                PlotPoints::new(vec![[x_min, ctx.quoted_price], [x_max, ctx.quoted_price]]),
            )
            .color(ctx.palette.accent)
            .width(1.0)
            .style(LineStyle::Dashed { length: 6.0 }),
        );
    }
}

#[inline]
fn draw_wick_line(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    ui.line(
        Line::new("", PlotPoints::new(vec![[x, bottom], [x, top]]))
            .color(color)
            .width(CHART.candle_wick_width),
    );
}

#[inline]
fn draw_body_rect(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    let half_w = CHART.candle_width_pct / 2.0;
    let pts = vec![
        [x - half_w, bottom],
        [x + half_w, bottom],
        [x + half_w, top],
        [x - half_w, top],
    ];

    ui.polygon(
        Polygon::new("", PlotPoints::new(pts))
            .fill_color(color)
            .stroke(Stroke::NONE),
    );
}

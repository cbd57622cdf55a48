use eframe::egui::{Response, Ui, Vec2b};
use egui_plot::{AxisHints, GridMark, HPlacement, Plot};

use crate::config::{CHART, MARKET};
use crate::domain::Candle;
use crate::models::price_bounds;
use crate::ui::UiPalette;
use crate::ui::plot_layers::{CandlestickLayer, LayerContext, PlotLayer, PriceLineLayer};
use crate::ui::utils::format_price;
use crate::utils::{date_to_epoch_days, epoch_days_to_date};

const DAYS_PER_X_MARK: f64 = 5.0;

/// Static daily chart. No panning on x: the series never changes after load.
pub fn render_price_chart(ui: &mut Ui, candles: &[Candle], palette: &UiPalette) -> Response {
    let (x_min, x_max) = match (candles.first(), candles.last()) {
        (Some(first), Some(last)) => (
            date_to_epoch_days(first.date) as f64 - 1.0,
            date_to_epoch_days(last.date) as f64 + 1.0,
        ),
        _ => (0.0, 1.0),
    };
    let (y_min, y_max) = price_bounds(candles)
        .map(|(lo, hi)| (lo.min(MARKET.quoted_price), hi.max(MARKET.quoted_price)))
        .unwrap_or((MARKET.quoted_price - 1.0, MARKET.quoted_price + 1.0));
    let pad = ((y_max - y_min) * 0.05).max(0.5);

    Plot::new("price_chart")
        .height(CHART.height)
        .custom_x_axes(vec![create_date_axis()])
        .custom_y_axes(vec![create_price_axis()])
        .label_formatter(|_, _| String::new())
        .x_grid_spacer(|input| {
            let (min, max) = input.bounds;
            let start = (min / DAYS_PER_X_MARK).ceil() as i64;
            let end = (max / DAYS_PER_X_MARK).floor() as i64;
            (start..=end)
                .map(|i| GridMark {
                    value: i as f64 * DAYS_PER_X_MARK,
                    step_size: DAYS_PER_X_MARK,
                })
                .collect()
        })
        .allow_double_click_reset(false)
        .allow_scroll(false)
        .allow_drag(Vec2b { x: false, y: false })
        .allow_zoom(Vec2b { x: false, y: false })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(x_min..=x_max);
            plot_ui.set_plot_bounds_y((y_min - pad)..=(y_max + pad));

            let ctx = LayerContext {
                candles,
                palette,
                quoted_price: MARKET.quoted_price,
                x_bounds: (x_min, x_max),
            };
            let layers: [&dyn PlotLayer; 2] = [&PriceLineLayer, &CandlestickLayer];
            for layer in layers {
                layer.render(plot_ui, &ctx);
            }
        })
        .response
}

fn create_date_axis() -> AxisHints<'static> {
    AxisHints::new_x().formatter(|grid_mark, _range| {
        epoch_days_to_date(grid_mark.value.round() as i64)
            .map(|d| d.format("%b %d").to_string())
            .unwrap_or_default()
    })
}

fn create_price_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(MARKET.quote_asset)
        .formatter(|grid_mark, _range| format_price(grid_mark.value))
        .placement(HPlacement::Right)
}

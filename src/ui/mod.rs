mod plot_layers;
mod popups;
mod styles;
mod tour_overlay;
mod ui_config;
mod ui_plot_view;
mod ui_render;
mod ui_text;
pub mod utils;

pub(crate) use popups::render_popups;
pub(crate) use tour_overlay::{AnchorRects, render_tour_overlay};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT, UiPalette};

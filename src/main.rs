#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
use cex_breach_sim::{Cli, run_app};

#[cfg(not(target_arch = "wasm32"))]
use {
    clap::Parser,
    eframe::NativeOptions,
    std::{panic, path::PathBuf},
    cex_breach_sim::PERSISTENCE,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, prelude::*};

#[cfg(target_arch = "wasm32")]
fn main() {}

/// Dependencies log warnings, the simulation logs info. Release builds keep errors only.
fn log_levels() -> (log::LevelFilter, log::LevelFilter) {
    if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    }
}

#[cfg(target_arch = "wasm32")]
fn init_console_log() {
    let (deps, sim) = log_levels();
    let _ = fern::Dispatch::new()
        .level(deps)
        .level_for(env!("CARGO_CRATE_NAME"), sim)
        .chain(fern::Output::call(|record| {
            let msg = record.args().to_string();
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&msg.into()),
                log::Level::Warn => web_sys::console::warn_1(&msg.into()),
                log::Level::Info => web_sys::console::info_1(&msg.into()),
                log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&msg.into()),
            }
        }))
        .apply();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    init_console_log();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document on the global window")?;
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("missing element #the_canvas_id")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    // The browser build has no command line, so no forced tour or theme.
    let args = Cli::default();

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(run_app(cc, args)))),
        )
        .await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    let (deps, sim) = log_levels();
    env_logger::Builder::new()
        .filter(None, deps)
        .filter(Some("cex_breach_sim"), sim)
        .init();

    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("Simulation panicked: {}\n{}", info, backtrace);
    }));

    let args = Cli::parse();
    log::info!(
        "Starting breach simulation (start_tour = {}, dark = {})",
        args.start_tour,
        args.dark
    );
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(PERSISTENCE.app.state_path)),
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("CryptoExchange Pro – CEX Breach Simulation"),
        ..Default::default()
    };

    eframe::run_native(
        "CEX Breach Simulation",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)))),
    )
}

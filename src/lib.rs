#![allow(clippy::collapsible_if)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod models;
pub mod tour;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::PERSISTENCE;
pub use engine::BreachEngine;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start the guided tour as soon as the window opens
    #[arg(long, default_value_t = false)]
    pub start_tour: bool,

    /// Force the dark theme for this run, ignoring the saved choice
    #[arg(long, default_value_t = false)]
    pub dark: bool,
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_default_off() {
        let args = Cli::parse_from(["cex-breach-sim"]);
        assert!(!args.start_tour);
        assert!(!args.dark);
    }

    #[test]
    fn cli_flags_parse() {
        let args = Cli::parse_from(["cex-breach-sim", "--start-tour", "--dark"]);
        assert!(args.start_tour);
        assert!(args.dark);
    }
}

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use domain::{Bar, Timeframe};
pub use indicators::{Side, Signal};
pub use ui::App;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Bar source endpoint override
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Initial timeframe label (5m, 15m, 1h, 4h, 1d, 1w, 1M)
    #[arg(long)]
    pub timeframe: Option<String>,

    /// Bars to request per load
    #[arg(long)]
    pub bars: Option<usize>,

    /// Skip the network entirely and render synthetic demo data
    #[arg(long, default_value_t = false)]
    pub demo: bool,
}

/// Main application entry point - creates the GUI app.
/// This is the public API for the binary to call.
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

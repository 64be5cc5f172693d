#![cfg(not(tarpaulin_include))]

use clap::Parser;
use sheetboard::{Config, app, config::init_logger};

/// Main entry point for the web dashboard
///
/// Reads `HOST`, `PORT`, `SHEET_URL` and `FETCH_TIMEOUT_SECS` (or the
/// matching flags) and serves the dashboard until interrupted.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let config = Config::parse();

    app::run(config).await
}

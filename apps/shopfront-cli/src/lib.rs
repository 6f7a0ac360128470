//! # Shopfront CLI Library
//!
//! Bootstrap and interactive loop for the Shopfront demo store.
//!
//! ## Module Organization
//! ```text
//! shopfront_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Environment configuration
//! ├── catalog.rs      ◄─── Demo catalog / JSON catalog → Store
//! └── menu.rs         ◄─── Read-eval-print loop
//! ```
//!
//! ## Startup Sequence
//! 1. Load configuration (`SHOPFRONT_*`)
//! 2. Initialize tracing (logging to stderr)
//! 3. Build the store from the configured catalog
//! 4. Run the menu on stdin/stdout until the user quits

pub mod catalog;
pub mod config;
pub mod menu;

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::menu::Menu;

/// Runs the interactive store.
pub fn run() -> anyhow::Result<()> {
    let config = CliConfig::from_env().context("failed to load configuration")?;

    init_tracing(&config.log_filter);

    info!(store = %config.store_name, catalog = ?config.catalog_path, "Starting Shopfront");

    let mut store = match &config.catalog_path {
        Some(path) => catalog::load_store(path)?,
        None => catalog::default_store().context("built-in catalog is invalid")?,
    };
    info!(products = store.len(), total_quantity = store.total_quantity(), "Catalog loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut store, &config.store_name, stdin.lock(), stdout.lock()).run()?;

    info!("Shopfront stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopfront_core=debug` - Stock and promotion changes only
/// - Default: the configured filter (`SHOPFRONT_LOG`)
///
/// Logs go to stderr so they never interleave with the menu.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

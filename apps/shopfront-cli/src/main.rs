//! # Shopfront Entry Point
//!
//! The actual setup is in lib.rs for better testability.

fn main() -> anyhow::Result<()> {
    shopfront_cli::run()
}

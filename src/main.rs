//! seed-rewriter - seed data cleanup tool
//!
//! Prunes the product records of a TypeScript seed file down to the allowed
//! garment categories and regenerates each remaining product's image list.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod seed;
mod ui;

use cli::Cli;

/// Log filter used when `RUST_LOG` is not set
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "seed_rewriter=debug,warn"
    } else {
        "warn"
    }
}

/// Send diagnostics to stderr so stdout stays the progress report
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::rewrite::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

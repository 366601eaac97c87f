//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// seed-rewriter - prune and re-image seed products
///
/// Removes products outside the allowed categories from the backend's seed
/// file and regenerates every remaining product's image list.
#[derive(Parser, Debug)]
#[command(
    name = "seed-rewriter",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Filter seed products by category and regenerate their image lists",
    long_about = "Rewrites the products array of a TypeScript seed file in place: products whose \
                  category_slug is not allowed are removed, and every remaining product gets a \
                  fresh list of 3-5 images starting with its own primary image.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  seed-rewriter                              \x1b[90m# Rewrite ./src/utils/seed.ts\x1b[0m\n   \
                  seed-rewriter --root be --dry-run          \x1b[90m# Preview changes to be/src/utils/seed.ts\x1b[0m\n   \
                  seed-rewriter --seed 42                    \x1b[90m# Reproducible image sampling\x1b[0m\n   \
                  seed-rewriter --category ao --category quan \x1b[90m# Keep only tops and trousers\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Seed file to rewrite (overrides --root)
    #[arg(long, short = 'f', env = "SEED_REWRITER_FILE")]
    pub file: Option<PathBuf>,

    /// Backend project root containing src/utils/seed.ts (defaults to current directory)
    #[arg(long, short = 'r')]
    pub root: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Allowed category slug; repeat to allow several (replaces the configured set)
    #[arg(long = "category", value_name = "SLUG")]
    pub categories: Vec<String>,

    /// Seed for the image sampler, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show what would change without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

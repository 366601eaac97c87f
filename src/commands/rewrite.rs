//! Rewrite command implementation
//!
//! Loads the seed file, runs the rewriting pipeline, writes the result back
//! and then reports dropped records. Nothing is written when the records
//! array cannot be located or in dry-run mode.

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::common::{fs, paths};
use crate::config::RewriterConfig;
use crate::error::Result;
use crate::seed::{RewriteReport, SeedRewriter};
use crate::ui::{ConsoleReporter, Reporter, SummaryContext};

/// Options for one rewrite run, resolved from the command line
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    pub path: PathBuf,
    pub config: RewriterConfig,
    pub seed: Option<u64>,
    pub dry_run: bool,
}

impl RewriteOptions {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let config = RewriterConfig::load_or_default(cli.config.as_deref())?
            .with_categories(cli.categories);
        config.validate()?;

        let path = paths::resolve_seed_path(cli.file, cli.root)?;

        Ok(Self {
            path,
            config,
            seed: cli.seed,
            dry_run: cli.dry_run,
        })
    }
}

/// Run rewrite command
pub fn run(cli: Cli) -> Result<()> {
    let options = RewriteOptions::from_cli(cli)?;
    let mut reporter = ConsoleReporter::stdout();

    match options.seed {
        Some(seed) => {
            debug!(seed, "using seeded sampler");
            rewrite(&options, &mut StdRng::seed_from_u64(seed), &mut reporter)?;
        }
        None => {
            rewrite(&options, &mut rand::rng(), &mut reporter)?;
        }
    }

    Ok(())
}

/// Rewrite the seed file at `options.path`
pub fn rewrite<R, P>(
    options: &RewriteOptions,
    rng: &mut R,
    reporter: &mut P,
) -> Result<RewriteReport>
where
    R: Rng + ?Sized,
    P: Reporter + ?Sized,
{
    let path: &Path = &options.path;
    info!(path = %path.display(), dry_run = options.dry_run, "rewriting seed file");

    let text = fs::read_document(path)?;
    let rewriter = SeedRewriter::from_config(&options.config);
    let outcome = rewriter.rewrite_document(&text, rng)?;

    if !options.dry_run {
        fs::write_atomic(path, &outcome.document)?;
    }

    for dropped in &outcome.report.dropped {
        reporter.record_dropped(dropped);
    }

    reporter.finish(
        &outcome.report,
        &SummaryContext {
            path,
            allowed: &options.config.allowed_categories,
            min_images: options.config.min_images,
            max_images: options.config.max_images,
            written: !options.dry_run,
        },
    );

    Ok(outcome.report)
}

//! Seed file path resolution

use std::path::{Path, PathBuf};

use crate::error::{Result, fs};

/// Location of the seed file relative to the backend project root.
pub const DEFAULT_SEED_PATH: &str = "src/utils/seed.ts";

/// Resolve the seed file to rewrite.
///
/// An explicit `file` wins. Otherwise the default seed path is joined onto
/// `root`, or onto the current directory when no root is given.
pub fn resolve_seed_path(file: Option<PathBuf>, root: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(file) = file {
        return Ok(file);
    }

    let root = match root {
        Some(root) => root,
        None => std::env::current_dir()
            .map_err(|e| fs::io_error(format!("Failed to get current directory: {}", e)))?,
    };

    Ok(seed_path_in(&root))
}

/// Default seed file location under `root`
pub fn seed_path_in(root: &Path) -> PathBuf {
    root.join(DEFAULT_SEED_PATH)
}

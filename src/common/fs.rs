//! Common file system operations with unified error handling

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{Result, fs};

/// Read the whole seed document as UTF-8 text
pub fn read_document(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(fs::not_found(path.display().to_string()));
    }
    std::fs::read_to_string(path)
        .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))
}

/// Replace `path` with `contents` atomically.
///
/// The new text goes to a temporary file next to the real file (symlinks are
/// resolved first, so a linked seed file stays linked), which is then renamed
/// over it. On any failure the original file is untouched.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let write_failed = |reason: String| fs::write_failed(path.display().to_string(), reason);

    let target = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| write_failed(e.to_string()))?;
    temp.write_all(contents.as_bytes())
        .map_err(|e| write_failed(e.to_string()))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| write_failed(e.to_string()))?;

    // The temp file is created 0600; carry over the original mode.
    if let Ok(metadata) = std::fs::metadata(&target) {
        if let Err(e) = std::fs::set_permissions(temp.path(), metadata.permissions()) {
            warn!(
                path = %target.display(),
                error = %e,
                "could not copy file permissions to the rewritten file"
            );
        }
    }

    temp.persist(&target)
        .map_err(|e| write_failed(e.error.to_string()))?;
    debug!(path = %target.display(), bytes = contents.len(), "wrote document");
    Ok(())
}

//! Records region errors

use super::{SeedError, impl_error_constructors};

impl_error_constructors!({
    StartMarkerNotFound(marker),
    EndMarkerNotFound(marker),
});

pub use self::{EndMarkerNotFound as end_not_found, StartMarkerNotFound as start_not_found};

/// Creates an error for a records array containing a syntax error
pub fn malformed(line: usize, column: usize) -> SeedError {
    SeedError::RecordsMalformed { line, column }
}

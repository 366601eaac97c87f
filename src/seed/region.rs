//! Locating the records array inside the seed document

use tracing::debug;

use super::syntax;
use crate::error::{Result, region};

/// Start token of the products array in `seed.ts`.
pub const PRODUCTS_MARKER: &str = "const products = [";

/// Byte span of the records array, from the start marker through the
/// closing bracket (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordRegion {
    /// Offset of the first byte of the start marker
    pub start: usize,
    /// Offset of the array's opening `[`
    pub open: usize,
    /// Offset of the array's closing `]`
    pub end: usize,
}

impl RecordRegion {
    /// Text between the brackets, exclusive.
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.open + 1..self.end]
    }

    /// Marker text up to and including the opening bracket.
    pub fn head<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..=self.open]
    }
}

/// Finds the first `marker` in `text` and the array literal it opens.
///
/// When the marker itself ends in `[`, that bracket opens the array;
/// otherwise the first expression after the marker must be the array. The
/// array has to be closed and free of syntax errors.
pub fn locate_region(text: &str, marker: &str) -> Result<RecordRegion> {
    let start = text
        .find(marker)
        .ok_or_else(|| region::start_not_found(marker))?;
    let marker_end = start + marker.trim_end().len();
    let bracketed = marker.trim_end().ends_with('[');
    let from = if bracketed { marker_end - 1 } else { marker_end };

    let tree = syntax::parse(text)?;
    let array = syntax::first_node_from(tree.root_node(), from)
        .and_then(|node| syntax::innermost_at(node, syntax::ARRAY))
        .filter(|array| !bracketed || array.start_byte() == from)
        .filter(|array| syntax::is_closed_array(*array))
        .ok_or_else(|| region::end_not_found(marker))?;

    if let Some(bad) = syntax::first_error(array) {
        let at = bad.start_position();
        return Err(region::malformed(at.row + 1, at.column + 1));
    }

    let region = RecordRegion {
        start,
        open: array.start_byte(),
        end: array.end_byte() - 1,
    };
    debug!(
        start = region.start,
        open = region.open,
        end = region.end,
        "located records region"
    );

    Ok(region)
}

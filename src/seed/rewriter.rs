//! The seed rewriting pipeline
//!
//! Pure text in, text out: locating the products array, filtering its
//! records, regenerating image lists and splicing the result back. File I/O
//! and randomness are supplied by the caller.

use rand::Rng;
use tracing::debug;

use super::filter::{CategoryFilter, Classification, DroppedRecord};
use super::images::ImageSynthesizer;
use super::record::{IMAGES_FIELD, Record, replace_image_field, split_records};
use super::region::locate_region;
use crate::config::RewriterConfig;
use crate::error::Result;

/// Separator between records in the regenerated array.
pub const RECORD_SEPARATOR: &str = ",\n  ";

/// What a rewrite did to the records array
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Removed records, in source order
    pub dropped: Vec<DroppedRecord>,
    /// Records kept in the output
    pub kept: usize,
    /// Kept records whose `images` field was regenerated
    pub reimaged: usize,
    /// Kept records without an `images` field, passed through unchanged
    pub without_images: usize,
}

impl RewriteReport {
    pub fn removed(&self) -> usize {
        self.dropped.len()
    }
}

/// Result of rewriting a document
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    pub document: String,
    pub report: RewriteReport,
}

/// Filters and re-images the products array of a seed document
#[derive(Debug, Clone)]
pub struct SeedRewriter {
    marker: String,
    filter: CategoryFilter,
    synthesizer: ImageSynthesizer,
}

impl Default for SeedRewriter {
    fn default() -> Self {
        Self::from_config(&RewriterConfig::default())
    }
}

impl SeedRewriter {
    pub fn new(
        marker: impl Into<String>,
        filter: CategoryFilter,
        synthesizer: ImageSynthesizer,
    ) -> Self {
        Self {
            marker: marker.into(),
            filter,
            synthesizer,
        }
    }

    pub fn from_config(config: &RewriterConfig) -> Self {
        Self::new(
            config.start_marker.clone(),
            config.category_filter(),
            config.image_synthesizer(),
        )
    }

    /// Rewrites `text`, returning the new document and a report.
    ///
    /// Fails without producing output when the records array cannot be
    /// located.
    pub fn rewrite_document<R: Rng + ?Sized>(
        &self,
        text: &str,
        rng: &mut R,
    ) -> Result<RewriteOutcome> {
        let region = locate_region(text, &self.marker)?;
        let fragments = split_records(region.body(text))?;
        debug!(records = fragments.len(), "split records array");

        let mut report = RewriteReport::default();
        let mut updated = Vec::with_capacity(fragments.len());

        for fragment in fragments {
            match self.filter.classify(fragment)? {
                Classification::Drop(dropped) => report.dropped.push(dropped),
                Classification::Keep => {
                    report.kept += 1;
                    updated.push(self.reimage(fragment, rng, &mut report)?);
                }
            }
        }

        let mut section = String::from(region.head(text));
        if updated.is_empty() {
            section.push_str("\n]");
        } else {
            section.push_str("\n  ");
            section.push_str(&updated.join(RECORD_SEPARATOR));
            section.push_str("\n]");
        }

        let mut document = String::with_capacity(text.len());
        document.push_str(&text[..region.start]);
        document.push_str(&section);
        document.push_str(&text[region.end + 1..]);

        Ok(RewriteOutcome { document, report })
    }

    fn reimage<R: Rng + ?Sized>(
        &self,
        fragment: &str,
        rng: &mut R,
        report: &mut RewriteReport,
    ) -> Result<String> {
        if Record::parse(fragment)?.property(IMAGES_FIELD).is_none() {
            debug!("record has no {IMAGES_FIELD} field, passing it through");
            report.without_images += 1;
            return Ok(fragment.to_string());
        }

        let field = self.synthesizer.synthesize_images(fragment, rng)?;
        report.reimaged += 1;
        replace_image_field(fragment, &field)
    }
}

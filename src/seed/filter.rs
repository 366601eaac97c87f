//! Category filtering of record fragments

use std::collections::BTreeSet;

use tracing::{debug, info};

use super::record::extract_field;
use crate::error::Result;

/// Field holding a record's category tag.
pub const CATEGORY_FIELD: &str = "category_slug";

/// Field holding a record's display name.
pub const NAME_FIELD: &str = "name";

/// Name reported for dropped records without a `name` field.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Garment categories kept by default: tops, trousers and jackets.
pub const DEFAULT_ALLOWED_CATEGORIES: [&str; 3] = ["ao", "quan", "ao-khoac"];

/// A record removed by the filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRecord {
    pub name: String,
    pub category: String,
}

/// Outcome of [`CategoryFilter::classify`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Keep,
    Drop(DroppedRecord),
}

/// Keeps records whose category tag is in an allowed set.
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    allowed: BTreeSet<String>,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_CATEGORIES)
    }
}

impl CategoryFilter {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allows(&self, category: &str) -> bool {
        self.allowed.contains(category)
    }

    /// Records without a category tag are kept.
    pub fn classify(&self, fragment: &str) -> Result<Classification> {
        let Some(category) = extract_field(fragment, CATEGORY_FIELD)? else {
            debug!("record has no {CATEGORY_FIELD}, keeping it");
            return Ok(Classification::Keep);
        };

        if self.allows(&category) {
            return Ok(Classification::Keep);
        }

        let name =
            extract_field(fragment, NAME_FIELD)?.unwrap_or_else(|| UNKNOWN_NAME.to_string());
        info!(%name, %category, "dropping record");
        Ok(Classification::Drop(DroppedRecord { name, category }))
    }
}

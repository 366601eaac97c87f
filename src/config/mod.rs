//! Rewriter configuration
//!
//! Every field is optional in YAML; missing fields fall back to the values
//! used for the storefront's `seed.ts`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SeedError, config};
use crate::seed::filter::DEFAULT_ALLOWED_CATEGORIES;
use crate::seed::images::DEFAULT_IMAGE_POOL;
use crate::seed::region::PRODUCTS_MARKER;
use crate::seed::{CategoryFilter, ImagePool, ImageSynthesizer};

/// Configuration for a rewrite run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RewriterConfig {
    /// Text that opens the records array
    pub start_marker: String,

    /// Category tags whose records are kept
    pub allowed_categories: Vec<String>,

    /// Smallest image list written for a record
    pub min_images: usize,

    /// Largest image list written for a record
    pub max_images: usize,

    /// Candidate URLs for the sampled images
    pub image_pool: Vec<String>,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self {
            start_marker: PRODUCTS_MARKER.to_string(),
            allowed_categories: DEFAULT_ALLOWED_CATEGORIES
                .iter()
                .map(ToString::to_string)
                .collect(),
            min_images: 3,
            max_images: 5,
            image_pool: DEFAULT_IMAGE_POOL.iter().map(ToString::to_string).collect(),
        }
    }
}

impl RewriterConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;

        let parsed = Self::from_yaml(&content).map_err(|e| match e {
            SeedError::ConfigParseFailed { reason, .. } => {
                config::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(parsed)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Replace the allowed categories, ignoring an empty override
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        if !categories.is_empty() {
            self.allowed_categories = categories;
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.start_marker.trim().is_empty() {
            return Err(config::invalid("start_marker must not be empty"));
        }
        if self.allowed_categories.is_empty() {
            return Err(config::invalid("allowed_categories must not be empty"));
        }
        if self.image_pool.is_empty() {
            return Err(config::invalid("image_pool must not be empty"));
        }
        if self.min_images == 0 || self.min_images > self.max_images {
            return Err(config::invalid(format!(
                "image count range {}..={} is empty or starts at zero",
                self.min_images, self.max_images
            )));
        }
        // The anchor may itself be a pool entry, which leaves one fewer candidate.
        if self.max_images > self.image_pool.len() {
            return Err(config::invalid(format!(
                "max_images ({}) exceeds image_pool size ({})",
                self.max_images,
                self.image_pool.len()
            )));
        }
        Ok(())
    }

    pub fn category_filter(&self) -> CategoryFilter {
        CategoryFilter::new(self.allowed_categories.iter().cloned())
    }

    pub fn image_synthesizer(&self) -> ImageSynthesizer {
        ImageSynthesizer::new(
            ImagePool::new(self.image_pool.iter().cloned()),
            self.min_images,
            self.max_images,
        )
    }
}

//! Seed document rewriting
//!
//! - [`syntax`]: TypeScript syntax trees (tree-sitter)
//! - [`region`]: locating the products array
//! - [`record`]: splitting records and reading/replacing their fields
//! - [`filter`]: category filtering
//! - [`images`]: placeholder image pool and image-list synthesis
//! - [`rewriter`]: the end-to-end pipeline

pub mod filter;
pub mod images;
pub mod record;
pub mod region;
pub mod rewriter;
pub mod syntax;

pub use filter::{CategoryFilter, DroppedRecord};
pub use images::{ImagePool, ImageSynthesizer};
pub use rewriter::{RewriteReport, SeedRewriter};

//! Error types and handling for seed-rewriter
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`region`]: Records region lookup errors
//! - [`syntax`]: TypeScript parser errors
//! - [`images`]: Image sampling errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

mod macros;

pub mod config;
pub mod fs;
pub mod images;
pub mod region;
pub mod syntax;

pub(crate) use macros::impl_error_constructors;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for seed rewriting
#[derive(Error, Diagnostic, Debug)]
pub enum SeedError {
    // Region errors
    #[error("Records array not found: missing '{marker}'")]
    #[diagnostic(
        code(seed_rewriter::region::start_not_found),
        help("Check that the seed file declares the products array, or pass --file")
    )]
    StartMarkerNotFound { marker: String },

    #[error("End of records array not found after '{marker}'")]
    #[diagnostic(
        code(seed_rewriter::region::end_not_found),
        help("The products array is never closed; check for an unbalanced bracket or string")
    )]
    EndMarkerNotFound { marker: String },

    #[error("Records array is not valid TypeScript near line {line}, column {column}")]
    #[diagnostic(
        code(seed_rewriter::region::malformed),
        help("Fix the syntax error in the products array; the file was left unchanged")
    )]
    RecordsMalformed { line: usize, column: usize },

    // Syntax errors
    #[error("TypeScript parser failed: {reason}")]
    #[diagnostic(code(seed_rewriter::syntax::parser_failed))]
    SyntaxParserFailed { reason: String },

    // Image errors
    #[error("Cannot sample {requested} distinct images from a pool of {available}")]
    #[diagnostic(
        code(seed_rewriter::images::pool_exhausted),
        help("Add more URLs to image_pool or lower max_images")
    )]
    PoolExhausted { requested: usize, available: usize },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(seed_rewriter::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(seed_rewriter::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(seed_rewriter::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(seed_rewriter::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Seed file not found: {path}")]
    #[diagnostic(
        code(seed_rewriter::fs::not_found),
        help("Run from the backend root, or pass --root / --file")
    )]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(seed_rewriter::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(seed_rewriter::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(seed_rewriter::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SeedError {
    fn from(err: std::io::Error) -> Self {
        SeedError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SeedError {
    fn from(err: serde_yaml::Error) -> Self {
        SeedError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SeedError>;

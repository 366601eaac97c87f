//! Command implementations for the seed-rewriter CLI

pub mod rewrite;

//! Image sampling errors

use super::SeedError;

/// Creates an error for a sample larger than the candidate pool
pub fn pool_exhausted(requested: usize, available: usize) -> SeedError {
    SeedError::PoolExhausted {
        requested,
        available,
    }
}

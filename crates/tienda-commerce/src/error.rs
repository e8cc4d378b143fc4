//! Commerce error types.

use thiserror::Error;

/// Errors surfaced by the storefront core.
///
/// Filtering, facet extraction, and cart mutations degrade silently by
/// design; errors only appear on the explicit persistence path.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Cart snapshot could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] tienda_storage::StorageError),
}

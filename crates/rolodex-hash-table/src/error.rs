//! Error types for contact table operations.

use thiserror::Error;

/// Errors that can occur while building or configuring a contact table.
///
/// Lookups never fail: a missing contact is reported as `None` by
/// [`HashTable::search`](crate::HashTable::search).
#[derive(Error, Debug)]
pub enum HashTableError {
    /// The requested bucket count is zero or negative.
    #[error("hash table capacity must be positive, got {capacity}")]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: i64,
    },

    /// A table configuration could not be parsed or failed validation.
    #[error("invalid table configuration: {message}")]
    Config {
        /// Description of the configuration problem.
        message: String,
    },
}

/// A specialized Result type for contact table operations.
pub type Result<T> = std::result::Result<T, HashTableError>;

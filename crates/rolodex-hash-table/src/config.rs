//! Table configuration loaded from JSON.

use serde::{Deserialize, Serialize};

use crate::contact::Contact;
use crate::error::{HashTableError, Result};
use crate::table::DEFAULT_CAPACITY;

/// Configuration for building a [`HashTable`](crate::HashTable).
///
/// Missing fields fall back to their defaults, so `{}` is a valid
/// configuration describing an empty table with [`DEFAULT_CAPACITY`] buckets.
///
/// # Example
///
/// ```
/// use rolodex_hash_table::TableConfig;
///
/// let config = TableConfig::from_json_str(
///     r#"{"capacity": 4, "contacts": [{"name": "John", "number": "909-876-1234"}]}"#,
/// ).unwrap();
/// assert_eq!(config.capacity, 4);
/// assert_eq!(config.contacts.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of buckets.
    pub capacity: i64,
    /// Contacts inserted in order when the table is built.
    pub contacts: Vec<Contact>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            contacts: Vec::new(),
        }
    }
}

impl TableConfig {
    /// Parses a JSON configuration.
    ///
    /// The capacity is not checked here so callers can override it first;
    /// [`HashTable::from_config`](crate::HashTable::from_config) validates.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| HashTableError::Config {
            message: e.to_string(),
        })
    }

    /// Checks that the configuration describes a constructible table.
    pub fn validate(&self) -> Result<()> {
        if self.capacity <= 0 {
            return Err(HashTableError::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

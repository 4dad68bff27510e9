//! A fixed-capacity hash table for contact records.
//!
//! This crate provides a small associative container mapping contact names
//! to phone numbers, using separate chaining to resolve collisions.
//!
//! # Overview
//!
//! The main components are:
//!
//! - [`HashTable`] - The bucket array with insert, search and diagnostic dump
//! - [`Entry`] - A node in a bucket's singly linked chain
//! - [`Contact`] - The stored name/number record
//! - [`TableConfig`] - JSON configuration describing a table and its seed contacts
//!
//! The hash function is a plain sum of character codes, so keys made of the
//! same characters collide. The dump format makes chain order observable.
//!
//! # Example
//!
//! ```
//! use rolodex_hash_table::HashTable;
//!
//! let mut table = HashTable::new(10).unwrap();
//!
//! // "Amy" and "May" share bucket 5
//! table.insert("Amy", "111-222-3333");
//! table.insert("May", "222-333-1111");
//!
//! assert_eq!(
//!     table.dump()[5],
//!     "Index 5: - May: 222-333-1111 - Amy: 111-222-3333"
//! );
//! ```

mod config;
mod contact;
mod entry;
mod error;
mod table;

pub use config::TableConfig;
pub use contact::Contact;
pub use entry::{Chain, Entry};
pub use error::{HashTableError, Result};
pub use table::{HashTable, DEFAULT_CAPACITY};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_and_entry_sanity() {
        let contact = Contact::new("Riley", "123-456-7890");
        assert_eq!(contact.to_string(), "Riley: 123-456-7890");

        let entry = Entry::new(contact.name(), contact.clone());
        assert_eq!(entry.key(), "Riley");
        assert_eq!(entry.value().to_string(), "Riley: 123-456-7890");
        assert!(entry.next().is_none());
    }

    #[test]
    fn test_table_from_json_config() {
        let config = TableConfig::from_json_str(
            r#"{
                "capacity": 10,
                "contacts": [
                    {"name": "John", "number": "909-876-1234"},
                    {"name": "Rebecca", "number": "111-555-0002"}
                ]
            }"#,
        )
        .unwrap();

        let table = HashTable::from_config(&config).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.search("Rebecca").unwrap().number(), "111-555-0002");
    }
}

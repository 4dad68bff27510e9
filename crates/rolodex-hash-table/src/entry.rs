//! Chain nodes for separate chaining.

use std::fmt;

use crate::contact::Contact;

/// A single node in a bucket chain.
///
/// Each entry exclusively owns its successor, and each bucket slot owns the
/// head of its chain, so a chain can never form a cycle or be shared between
/// buckets.
///
/// # Example
///
/// ```
/// use rolodex_hash_table::{Contact, Entry};
///
/// let contact = Contact::new("Riley", "123-456-7890");
/// let entry = Entry::new(contact.name(), contact.clone());
/// assert_eq!(entry.key(), "Riley");
/// assert_eq!(entry.value().to_string(), "Riley: 123-456-7890");
/// assert!(entry.next().is_none());
/// ```
pub struct Entry {
    /// The lookup key (the contact name).
    pub(crate) key: String,
    /// The stored contact.
    pub(crate) value: Contact,
    /// The next entry in the chain, if any.
    pub(crate) next: Option<Box<Entry>>,
}

impl Entry {
    /// Creates an unlinked entry.
    pub fn new(key: impl ToString, value: Contact) -> Self {
        Self {
            key: key.to_string(),
            value,
            next: None,
        }
    }

    /// Returns the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the stored contact.
    pub fn value(&self) -> &Contact {
        &self.value
    }

    /// Returns the next entry in the chain.
    pub fn next(&self) -> Option<&Entry> {
        self.next.as_deref()
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Show only the successor's key so long chains don't recurse.
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("next", &self.next().map(Entry::key))
            .finish()
    }
}

/// Iterator over the entries of one bucket chain, head first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    cursor: Option<&'a Entry>,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(head: Option<&'a Entry>) -> Self {
        Self { cursor: head }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.cursor?;
        self.cursor = entry.next();
        Some(entry)
    }
}

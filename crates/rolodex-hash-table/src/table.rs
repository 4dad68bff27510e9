//! Fixed-capacity separate-chaining hash table keyed by contact name.

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::config::TableConfig;
use crate::contact::Contact;
use crate::entry::{Chain, Entry};
use crate::error::{HashTableError, Result};

/// Bucket count used by [`HashTable::default`] and [`TableConfig::default`].
pub const DEFAULT_CAPACITY: i64 = 10;

/// A hash table mapping contact names to [`Contact`] records.
///
/// The table has a fixed number of buckets chosen at construction and never
/// resizes. Keys are hashed by summing the Unicode scalar values of their
/// characters, so anagrams such as `"Amy"` and `"May"` always share a bucket.
/// Colliding keys are kept in a singly linked chain with the most recently
/// inserted key at the head.
///
/// # Thread Safety
///
/// The table has no internal synchronization. Callers sharing it across
/// threads must guard the whole table with a single lock.
///
/// # Example
///
/// ```
/// use rolodex_hash_table::HashTable;
///
/// let mut table = HashTable::new(10).unwrap();
/// table.insert("John", "909-876-1234");
/// table.insert("Rebecca", "111-555-0002");
///
/// let john = table.search("John").unwrap();
/// assert_eq!(john.number(), "909-876-1234");
/// assert!(table.search("Chris").is_none());
///
/// assert_eq!(table.dump()[9], "Index 9: - John: 909-876-1234");
/// ```
pub struct HashTable {
    /// Head of each bucket chain.
    buckets: Vec<Option<Box<Entry>>>,
    /// Number of entries across all chains.
    len: usize,
}

impl HashTable {
    /// Creates an empty table with `capacity` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::InvalidCapacity`] if `capacity` is zero or
    /// negative.
    ///
    /// # Example
    ///
    /// ```
    /// use rolodex_hash_table::{HashTable, HashTableError};
    ///
    /// let table = HashTable::new(4).unwrap();
    /// assert_eq!(table.capacity(), 4);
    ///
    /// assert!(matches!(
    ///     HashTable::new(0),
    ///     Err(HashTableError::InvalidCapacity { capacity: 0 })
    /// ));
    /// ```
    pub fn new(capacity: i64) -> Result<Self> {
        let buckets = match usize::try_from(capacity) {
            Ok(n) if n > 0 => n,
            _ => return Err(HashTableError::InvalidCapacity { capacity }),
        };

        Ok(Self {
            buckets: (0..buckets).map(|_| None).collect(),
            len: 0,
        })
    }

    /// Builds a table from a configuration, inserting its seed contacts in
    /// order.
    pub fn from_config(config: &TableConfig) -> Result<Self> {
        config.validate()?;
        let mut table = Self::new(config.capacity)?;
        for contact in &config.contacts {
            table.insert(contact.name(), contact.number());
        }
        Ok(table)
    }

    /// Returns the number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of stored contacts.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no contact has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the load factor of the table (entries / buckets).
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Maps a key to its bucket index.
    ///
    /// The key is rendered with [`Display`](fmt::Display), the Unicode scalar
    /// values of its characters are summed, and the sum is reduced modulo the
    /// capacity.
    ///
    /// ```
    /// use rolodex_hash_table::HashTable;
    ///
    /// let table = HashTable::new(10).unwrap();
    /// assert_eq!(table.hash_function("Amy"), 5);
    /// assert_eq!(table.hash_function("May"), 5);
    /// assert_eq!(table.hash_function(&7), 5); // '7' is 55
    /// ```
    pub fn hash_function<K: fmt::Display + ?Sized>(&self, key: &K) -> usize {
        self.bucket_index(&key.to_string())
    }

    #[inline]
    fn bucket_index(&self, key: &str) -> usize {
        let sum = key
            .chars()
            .fold(0u64, |acc, c| acc.wrapping_add(u64::from(c)));
        (sum % self.buckets.len() as u64) as usize
    }

    /// Inserts a contact, or updates the number of an existing one.
    ///
    /// If `name` is already present its contact's number is overwritten in
    /// place. Otherwise a new entry becomes the head of the bucket chain.
    pub fn insert(&mut self, name: impl ToString, number: impl ToString) {
        let name = name.to_string();
        let number = number.to_string();
        let idx = self.bucket_index(&name);

        let mut cursor = self.buckets[idx].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.key == name {
                debug!(name = %name, index = idx, "Updating contact number");
                entry.value.set_number(number);
                return;
            }
            cursor = entry.next.as_deref_mut();
        }

        let head = self.buckets[idx].take();
        if head.is_some() {
            debug!(name = %name, index = idx, "Bucket collision, chaining new contact");
        } else {
            debug!(name = %name, index = idx, "Inserting contact");
        }

        let mut entry = Entry::new(&name, Contact::new(&name, number));
        entry.next = head;
        self.buckets[idx] = Some(Box::new(entry));
        self.len += 1;
    }

    /// Looks up a contact by name.
    ///
    /// Returns `None` when no contact with that name has been inserted.
    pub fn search(&self, name: impl ToString) -> Option<&Contact> {
        let name = name.to_string();
        let idx = self.bucket_index(&name);
        trace!(name = %name, index = idx, "Searching bucket chain");

        self.chain(idx)
            .find(|entry| entry.key == name)
            .map(Entry::value)
    }

    /// Returns an iterator over the chain stored in bucket `index`, head first.
    ///
    /// Out-of-range indices yield an empty chain.
    pub fn chain(&self, index: usize) -> Chain<'_> {
        Chain::new(self.buckets.get(index).and_then(|slot| slot.as_deref()))
    }

    /// Renders one line per bucket, in index order.
    ///
    /// Empty buckets render as `Index {i}: Empty`. Occupied buckets list
    /// their chain from head to tail as `Index {i}: - name: number - ...`.
    pub fn dump(&self) -> Vec<String> {
        (0..self.buckets.len())
            .map(|i| {
                let parts: Vec<String> = self
                    .chain(i)
                    .map(|entry| format!("- {}", entry.value()))
                    .collect();
                if parts.is_empty() {
                    format!("Index {i}: Empty")
                } else {
                    format!("Index {i}: {}", parts.join(" "))
                }
            })
            .collect()
    }

    /// Writes the dump to `out`, one newline-terminated line per bucket.
    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.dump() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Prints the dump to stdout.
    pub fn print_table(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_table(&mut handle)
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self {
            buckets: (0..DEFAULT_CAPACITY).map(|_| None).collect(),
            len: 0,
        }
    }
}

impl fmt::Debug for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buckets: Vec<Vec<&str>> = (0..self.buckets.len())
            .map(|i| self.chain(i).map(Entry::key).collect())
            .collect();
        f.debug_struct("HashTable")
            .field("capacity", &self.buckets.len())
            .field("len", &self.len)
            .field("buckets", &buckets)
            .finish()
    }
}

impl fmt::Display for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dump().join("\n"))
    }
}

impl Drop for HashTable {
    fn drop(&mut self) {
        // Unlink chains one node at a time so long chains don't recurse.
        for slot in &mut self.buckets {
            let mut cursor = slot.take();
            while let Some(mut entry) = cursor {
                cursor = entry.next.take();
            }
        }
    }
}

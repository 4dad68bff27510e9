//! The contact record stored as a table value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A contact with a name and a phone number.
///
/// Both fields are kept as strings. Constructors accept anything that
/// implements [`ToString`], so numeric names or numbers are stored in their
/// string form.
///
/// # Example
///
/// ```
/// use rolodex_hash_table::Contact;
///
/// let contact = Contact::new("Riley", "123-456-7890");
/// assert_eq!(contact.to_string(), "Riley: 123-456-7890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name, also used as the table key.
    name: String,
    /// Phone number.
    number: String,
}

impl Contact {
    /// Creates a new contact, coercing both fields to strings.
    pub fn new(name: impl ToString, number: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    /// Returns the contact name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the phone number.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Overwrites the phone number in place.
    pub fn set_number(&mut self, number: impl ToString) {
        self.number = number.to_string();
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.number)
    }
}

//! CLI Command Implementations
//!
//! - [`demo`]: The reference walkthrough of insert, search, collision and update
//! - [`dump`]: Table construction from configuration with a bucket dump

mod demo;
mod dump;

pub use demo::DemoCommand;
pub use dump::DumpCommand;

use rolodex_hash_table::Contact;

/// Renders a search result the way the demonstration prints it.
pub(crate) fn describe(result: Option<&Contact>) -> String {
    match result {
        Some(contact) => contact.to_string(),
        None => "None".to_string(),
    }
}

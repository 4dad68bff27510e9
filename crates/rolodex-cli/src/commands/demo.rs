//! Demo Command Implementation
//!
//! Replays the reference walkthrough: contact and chain-node sanity checks,
//! then a 10-bucket table taken through insert, search, an anagram
//! collision, an in-place update and a miss.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use rolodex_hash_table::{Contact, Entry, HashTable};
use tracing::info;

use super::describe;

/// Replay the reference demonstration scenario
///
/// # Example
///
/// ```bash
/// rolodex demo --capacity 10
/// ```
#[derive(Args, Debug, Clone)]
pub struct DemoCommand {
    /// Number of buckets in the demonstration table
    #[arg(long, short = 'n', default_value = "10", allow_negative_numbers = true)]
    pub capacity: i64,
}

impl DemoCommand {
    /// Execute the demo command, printing to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.execute(&mut out)
    }

    /// Execute the demo command against an arbitrary writer
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        info!("Running demonstration with capacity {}", self.capacity);

        let contact = Contact::new("Riley", "123-456-7890");
        writeln!(out, "{contact}")?;

        let entry = Entry::new(contact.name(), contact.clone());
        writeln!(out, "{}", entry.key())?;
        writeln!(out, "{}", entry.value())?;
        writeln!(out, "{}", describe(entry.next().map(Entry::value)))?;

        let mut table = HashTable::new(self.capacity)?;
        table.write_table(out)?;

        table.insert("John", "909-876-1234");
        table.insert("Rebecca", "111-555-0002");
        writeln!(out, "\nAfter inserting John and Rebecca:")?;
        table.write_table(out)?;

        writeln!(out, "\nSearch result: {}", describe(table.search("John")))?;

        table.insert("Amy", "111-222-3333");
        table.insert("May", "222-333-1111");
        writeln!(out, "\nAfter inserting Amy and May (collision test):")?;
        table.write_table(out)?;

        table.insert("Rebecca", "999-444-9999");
        writeln!(out, "\nAfter updating Rebecca:")?;
        table.write_table(out)?;

        writeln!(
            out,
            "\nSearch for Chris (not present): {}",
            describe(table.search("Chris"))
        )?;

        info!("Demonstration finished with {} contacts", table.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_demo(capacity: i64) -> Result<String> {
        let mut out = Vec::new();
        DemoCommand { capacity }.execute(&mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_demo_sanity_checks() {
        let output = run_demo(10).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            &lines[..4],
            &["Riley: 123-456-7890", "Riley", "Riley: 123-456-7890", "None"]
        );
        assert!(lines[4..14].iter().all(|l| l.ends_with(": Empty")));
    }

    #[test]
    fn test_demo_final_state() {
        let output = run_demo(10).unwrap();
        let tail = output
            .split("After updating Rebecca:\n")
            .nth(1)
            .unwrap();

        let expected = "\
Index 0: Empty
Index 1: Empty
Index 2: Empty
Index 3: Empty
Index 4: Empty
Index 5: - May: 222-333-1111 - Amy: 111-222-3333
Index 6: Empty
Index 7: - Rebecca: 999-444-9999
Index 8: Empty
Index 9: - John: 909-876-1234

Search for Chris (not present): None
";
        assert_eq!(tail, expected);
        assert!(output.contains("\nSearch result: John: 909-876-1234\n"));
    }

    #[test]
    fn test_demo_rejects_invalid_capacity() {
        assert!(run_demo(0).is_err());
    }
}

//! Dump Command Implementation
//!
//! Builds a contact table from an optional JSON config file plus contacts
//! given on the command line, prints every bucket and answers lookups.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rolodex_hash_table::{Contact, HashTable, TableConfig};
use tracing::{info, warn};

/// Build a table from config and flags and print its buckets
///
/// Contacts from the config file are inserted first, in file order, followed
/// by `--contact` flags in the order given. A later contact with an existing
/// name updates that contact's number.
///
/// # Example
///
/// ```bash
/// rolodex dump \
///     --config /path/to/contacts.json \
///     --contact John=909-876-1234 \
///     --search John
/// ```
#[derive(Args, Debug, Clone, Default)]
pub struct DumpCommand {
    /// Number of buckets (overrides the config file)
    #[arg(long, short = 'n', env = "ROLODEX_CAPACITY", allow_negative_numbers = true)]
    pub capacity: Option<i64>,

    /// Path to a table configuration file (JSON format)
    #[arg(long, short = 'c', env = "ROLODEX_CONFIG_PATH")]
    pub config_path: Option<PathBuf>,

    /// Contact to insert, as NAME=NUMBER (repeatable)
    #[arg(long = "contact", value_parser = parse_contact)]
    pub contacts: Vec<Contact>,

    /// Name to look up after the dump (repeatable)
    #[arg(long = "search")]
    pub searches: Vec<String>,
}

/// Parses a `NAME=NUMBER` pair. The number may itself contain `=`.
pub fn parse_contact(s: &str) -> std::result::Result<Contact, String> {
    let (name, number) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=NUMBER, got `{s}`"))?;
    Ok(Contact::new(name, number))
}

impl DumpCommand {
    /// Execute the dump command, printing to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.execute(&mut out)
    }

    /// Execute the dump command against an arbitrary writer
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        let table = self.build_table()?;
        info!(
            "Table built: {} contacts in {} buckets (load factor {:.2})",
            table.len(),
            table.capacity(),
            table.load_factor()
        );

        table.write_table(out)?;

        for name in &self.searches {
            match table.search(name) {
                Some(contact) => writeln!(out, "Search result for {}: {}", name, contact)?,
                None => {
                    warn!("Contact not found: {}", name);
                    writeln!(out, "Search result for {}: not found", name)?;
                }
            }
        }

        Ok(())
    }

    /// Resolves the configuration and inserts all requested contacts.
    pub fn build_table(&self) -> Result<HashTable> {
        let mut config = match &self.config_path {
            Some(path) => {
                info!("Loading config from: {:?}", path);
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {path:?}"))?;
                TableConfig::from_json_str(&json).context("Failed to parse table config")?
            }
            None => TableConfig::default(),
        };

        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        config.contacts.extend(self.contacts.iter().cloned());

        HashTable::from_config(&config).context("Failed to build table")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_contact() {
        let contact = parse_contact("John=909-876-1234").unwrap();
        assert_eq!(contact.name(), "John");
        assert_eq!(contact.number(), "909-876-1234");

        let contact = parse_contact("odd=a=b").unwrap();
        assert_eq!(contact.number(), "a=b");

        let contact = parse_contact("=").unwrap();
        assert_eq!(contact.to_string(), ": ");

        assert!(parse_contact("no-separator").is_err());
    }

    #[test]
    fn test_dump_defaults_to_empty_table() {
        let cmd = DumpCommand::default();
        let mut out = Vec::new();
        cmd.execute(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 10);
        assert!(text.lines().all(|l| l.ends_with(": Empty")));
    }

    #[test]
    fn test_dump_with_flags() {
        let cmd = DumpCommand {
            capacity: Some(10),
            contacts: vec![
                Contact::new("Amy", "111-222-3333"),
                Contact::new("May", "222-333-1111"),
            ],
            searches: vec!["May".to_string(), "Chris".to_string()],
            ..Default::default()
        };
        let mut out = Vec::new();
        cmd.execute(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[5], "Index 5: - May: 222-333-1111 - Amy: 111-222-3333");
        assert_eq!(lines[10], "Search result for May: May: 222-333-1111");
        assert_eq!(lines[11], "Search result for Chris: not found");
    }

    #[test]
    fn test_dump_rejects_non_positive_capacity() {
        let cmd = DumpCommand {
            capacity: Some(-1),
            ..Default::default()
        };
        assert!(cmd.build_table().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let cmd = DumpCommand {
            config_path: Some(PathBuf::from("/nonexistent/rolodex/contacts.json")),
            ..Default::default()
        };
        let err = cmd.build_table().unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}

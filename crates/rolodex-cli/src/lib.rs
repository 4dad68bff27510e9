//! Rolodex CLI Library
//!
//! This crate provides the command-line interface for the rolodex contact
//! table, including:
//!
//! - **Demo**: Replays the reference insert/search/collision walkthrough
//! - **Dump**: Builds a table from a config file and flags, then prints it
//!
//! # Example
//!
//! ```bash
//! # Walk through the reference scenario
//! rolodex demo
//!
//! # Show where two anagrams land in a 10-bucket table
//! rolodex dump --capacity 10 --contact Amy=111-222-3333 --contact May=222-333-1111 --search May
//! ```

pub mod commands;

use clap::{Parser, Subcommand};

pub use commands::{DemoCommand, DumpCommand};

/// Rolodex - a fixed-bucket contact hash table
///
/// Inserts, looks up and prints contacts stored in a separate-chaining
/// hash table whose bucket layout is fully deterministic.
#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay the reference demonstration scenario
    Demo(DemoCommand),

    /// Build a table from config and flags and print its buckets
    Dump(DumpCommand),
}

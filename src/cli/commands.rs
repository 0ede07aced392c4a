//! CLI command definitions using clap
//!
//! Defines the command structure for the `cardlist` CLI tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// cardlist - product card browser
///
/// Browse a JSON list of products ten at a time, filtering by tag.
/// Run without a subcommand to launch the TUI.
#[derive(Parser, Debug)]
#[command(name = "cardlist", version, about, long_about = None)]
pub struct Cli {
    /// JSON file with an array of products ('-' reads stdin)
    #[arg(long, short, global = true, env = "CARDLIST_DATA")]
    pub data: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page of products
    List(ListArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// List Command
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only show products with a tag containing this text
    #[arg(long, short)]
    pub search: Option<String>,

    /// Page number to print, starting at 1
    #[arg(long, short, default_value = "1")]
    pub page: usize,

    /// Print the page as a JSON array instead of cards
    #[arg(long)]
    pub json: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: ConfigKey,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: ConfigKey,
    },
    /// Reset a configuration value to its default
    Remove {
        /// Configuration key
        key: ConfigKey,
    },
}

/// Configuration keys
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default product data file
    DataFile,
    /// TUI tick rate in milliseconds
    TickRate,
}

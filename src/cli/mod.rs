//! CLI module for cardlist
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod commands;
pub mod config;
pub mod list;

pub use commands::{Cli, Commands};

//! cardlist - A TUI for browsing product cards
//!
//! This library loads a product dataset, filters it by tag text and pages
//! through the result ten cards at a time. It provides both a TUI and a
//! one-shot CLI printer over the same list state.

pub mod cli;
pub mod core;
pub mod error;
pub mod tui;

pub use error::{CardListError, Result};

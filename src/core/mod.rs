//! Core functionality for cardlist
//!
//! This module contains the list logic shared by the TUI and the CLI:
//! - Product records and dataset loading
//! - Tag search
//! - Pagination state
//! - Application configuration

pub mod catalog;
pub mod config;
pub mod pagination;
pub mod product;
pub mod search;

pub use catalog::{Catalog, DataSource};
pub use config::Config;
pub use pagination::{CardList, Direction, Summary, PAGE_SIZE};
pub use product::{Product, ProductId, Tag};

//! Product dataset loading
//!
//! The dataset is read once from a JSON array and never mutated afterwards.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::config::Config;
use crate::core::product::Product;
use crate::error::{CardListError, Result};

/// Where the dataset comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Read the JSON array from standard input
    Stdin,
    /// Read the JSON array from a file
    File(PathBuf),
}

impl DataSource {
    /// `-` means stdin, anything else is a file path
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            DataSource::Stdin
        } else {
            DataSource::File(path.to_path_buf())
        }
    }

    /// Pick the source from the `--data` flag, falling back to the config
    pub fn resolve(arg: Option<&Path>, config: &Config) -> Result<Self> {
        arg.or(config.data_file.as_deref())
            .map(Self::from_arg)
            .ok_or(CardListError::NoDataSource)
    }
}

/// Immutable, ordered product dataset
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load the dataset from the given source
    pub fn load(source: &DataSource) -> Result<Self> {
        match source {
            DataSource::Stdin => {
                debug!("Reading products from stdin");
                Self::from_reader(io::stdin().lock())
            }
            DataSource::File(path) => Self::from_path(path),
        }
    }

    /// Load the dataset from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CardListError::DataFileNotFound(path.to_path_buf()),
            _ => CardListError::Io(e),
        })?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), products = catalog.len(), "Loaded product data");
        Ok(catalog)
    }

    /// Parse a JSON array of products
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_reader(reader)
            .map_err(|e| CardListError::InvalidData(e.to_string()))?;
        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

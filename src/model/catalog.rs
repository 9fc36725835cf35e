//! Item prices used to total committed orders.

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a price catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog price for {item} must be a non-negative number, got {price}")]
    InvalidPrice { item: String, price: f64 },
}

/// Item name (case-sensitive) to unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCatalog {
    prices: HashMap<String, f64>,
}

impl PriceCatalog {
    pub fn new(prices: HashMap<String, f64>) -> Result<Self, CatalogError> {
        if let Some((item, price)) = prices
            .iter()
            .find(|(_, price)| !price.is_finite() || **price < 0.0)
        {
            return Err(CatalogError::InvalidPrice {
                item: item.clone(),
                price: *price,
            });
        }
        Ok(Self { prices })
    }

    /// Loads a `{"item": price, ...}` JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: display.clone(),
            source,
        })?;
        let prices: HashMap<String, f64> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: display,
                source,
            })?;
        Self::new(prices)
    }

    pub fn price(&self, item: &str) -> Option<f64> {
        self.prices.get(item).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// The clothing line the store sells when no catalog file is configured.
impl Default for PriceCatalog {
    fn default() -> Self {
        let prices = [
            ("shirt", 25.0),
            ("t-shirt", 15.0),
            ("pants", 40.0),
            ("jeans", 45.0),
            ("shorts", 20.0),
            ("skirt", 35.0),
            ("dress", 60.0),
            ("sweater", 55.0),
            ("hoodie", 50.0),
            ("jacket", 80.0),
        ]
        .into_iter()
        .map(|(item, price)| (item.to_string(), price))
        .collect();
        Self { prices }
    }
}

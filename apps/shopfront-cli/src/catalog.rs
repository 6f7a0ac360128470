//! # Catalog Loading
//!
//! Builds the [`Store`] the menu runs against, either from the built-in demo
//! catalog or from a JSON file named by `SHOPFRONT_CATALOG`.
//!
//! ## Bootstrap Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  JSON text                                                              │
//! │     │  serde_json                                                       │
//! │     ▼                                                                   │
//! │  CatalogFile { promotions, products }                                   │
//! │     │                                                                   │
//! │     ├── promotions ──► Promotion::new ──► Arc<Promotion> by name        │
//! │     │                                                                   │
//! │     └── products ────► Product::with_kind                               │
//! │                          └── set_promotion(shared Arc) if named         │
//! │     ▼                                                                   │
//! │  Store (catalog order)                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shopfront_core::{CoreError, Product, ProductKind, Promotion, PromotionKind, Store};
use tracing::debug;

/// The demo catalog shipped with the binary.
const DEFAULT_CATALOG: &str = include_str!("../catalog/default.json");

// =============================================================================
// File Format
// =============================================================================

/// Top level of a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default)]
    pub promotions: Vec<PromotionEntry>,
    pub products: Vec<ProductEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromotionEntry {
    pub name: String,
    pub kind: PromotionKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductEntry {
    pub name: String,
    pub price: f64,
    pub stock: StockEntry,
    /// Name of a promotion declared in the same file.
    #[serde(default)]
    pub promotion: Option<String>,
}

/// How a catalog product is stocked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StockEntry {
    Standard { quantity: i64 },
    NonStocked,
    Limited { quantity: i64, maximum: i64 },
}

// =============================================================================
// Errors
// =============================================================================

/// Catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog entry '{name}': {source}")]
    Invalid {
        name: String,
        #[source]
        source: CoreError,
    },

    #[error("Promotion '{0}' is declared more than once")]
    DuplicatePromotion(String),

    #[error("Product '{product}' refers to unknown promotion '{promotion}'")]
    UnknownPromotion { product: String, promotion: String },
}

// =============================================================================
// Loading
// =============================================================================

impl CatalogFile {
    /// Parses a catalog from JSON text.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds a store holding the catalog's products, in file order.
    ///
    /// Products naming the same promotion share one `Arc<Promotion>`.
    pub fn into_store(self) -> Result<Store, CatalogError> {
        let mut promotions: HashMap<String, Arc<Promotion>> = HashMap::new();

        for entry in self.promotions {
            if promotions.contains_key(&entry.name) {
                return Err(CatalogError::DuplicatePromotion(entry.name));
            }
            let promotion = Promotion::new(entry.name.clone(), entry.kind).map_err(|source| {
                CatalogError::Invalid {
                    name: entry.name.clone(),
                    source,
                }
            })?;
            promotions.insert(entry.name, Arc::new(promotion));
        }

        let mut store = Store::default();

        for entry in self.products {
            let (quantity, kind) = match entry.stock {
                StockEntry::Standard { quantity } => (quantity, ProductKind::Standard),
                StockEntry::NonStocked => (0, ProductKind::NonStocked),
                StockEntry::Limited { quantity, maximum } => {
                    (quantity, ProductKind::Limited { maximum })
                }
            };
            let mut product = Product::with_kind(&entry.name, entry.price, quantity, kind)
                .map_err(|source| CatalogError::Invalid {
                    name: entry.name.clone(),
                    source,
                })?;

            if let Some(name) = entry.promotion {
                let promotion = promotions.get(&name).ok_or_else(|| CatalogError::UnknownPromotion {
                    product: entry.name.clone(),
                    promotion: name.clone(),
                })?;
                product.set_promotion(Arc::clone(promotion));
            }

            store.add_product(product);
        }

        debug!(products = store.len(), "Catalog built");
        Ok(store)
    }
}

/// Builds the built-in demo store.
pub fn default_store() -> Result<Store, CatalogError> {
    CatalogFile::from_json(DEFAULT_CATALOG)?.into_store()
}

/// Reads a catalog file and builds its store.
pub fn load_store(path: &Path) -> Result<Store, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CatalogFile::from_json(&text)?.into_store()
}

// =============================================================================
// Unit Tests
// =============================================================================

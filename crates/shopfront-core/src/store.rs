//! # Store Module
//!
//! The store owns an ordered collection of products and turns shopping lists
//! into priced, validated orders.
//!
//! ## Order Processing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store::order(lines)                                  │
//! │                                                                         │
//! │  lines: [(Shipping, 1), (Bose, 2), (Shipping, 1)]                       │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  1. Aggregate   Shipping → 2, Bose → 2                                  │
//! │                 (a line with qty <= 0 → InvalidArgument)                │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  2. Caps        Shipping is limited to 1 → OrderLimitExceeded           │
//! │     │           (nothing has been bought yet, no stock moves)           │
//! │     ▼                                                                   │
//! │  3. Execute     each line in order: product in store and active?        │
//! │                   yes → total += product.buy(qty)                       │
//! │                   no  → skipped, contributes 0                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A limited product's cap bounds the sum of every line that names it, so
//! splitting a request across lines does not get around it.

use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::product::{Product, ProductId};
use crate::validation::validate_purchase_quantity;

// =============================================================================
// Order Line
// =============================================================================

/// One line of a shopping list.
///
/// Lines built with [`OrderLine::for_product`] remember the product's
/// per-order maximum, so the cap is enforced even when the store does not
/// hold that product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: i64,
    pub limit: Option<OrderLimit>,
}

/// Per-order maximum of a limited product, as recorded on an order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLimit {
    pub name: String,
    pub maximum: i64,
}

impl OrderLine {
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        OrderLine {
            product_id,
            quantity,
            limit: None,
        }
    }

    /// Builds a line for `product`, recording its cap if it is limited.
    pub fn for_product(product: &Product, quantity: i64) -> Self {
        OrderLine {
            product_id: product.id(),
            quantity,
            limit: product.maximum().map(|maximum| OrderLimit {
                name: product.name().to_string(),
                maximum,
            }),
        }
    }
}

impl From<(ProductId, i64)> for OrderLine {
    fn from((product_id, quantity): (ProductId, i64)) -> Self {
        OrderLine::new(product_id, quantity)
    }
}

// =============================================================================
// Store
// =============================================================================

/// An ordered collection of products.
///
/// Insertion order is kept for listings. Entries are told apart by
/// [`ProductId`], never by name.
#[derive(Debug, Default)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// Creates a store holding `products` in the given order.
    pub fn new(products: Vec<Product>) -> Self {
        Store { products }
    }

    /// Adds a product at the end of the collection and returns its id.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = product.id();
        debug!(product = %product.name(), %id, "Product added to store");
        self.products.push(product);
        id
    }

    /// Removes a product and hands it back to the caller.
    ///
    /// Returns `None` when the store does not hold that product.
    pub fn remove_product(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id() == id)?;
        let product = self.products.remove(index);
        debug!(product = %product.name(), %id, "Product removed from store");
        Some(product)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.iter().any(|p| p.id() == id)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    /// Number of products held, active or not.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of the stock of every product held, saturating at `i64::MAX`.
    ///
    /// Non-stocked products are not inventory and contribute zero.
    pub fn total_quantity(&self) -> i64 {
        self.products
            .iter()
            .fold(0i64, |total, p| total.saturating_add(p.quantity().tracked()))
    }

    /// Every active product, in collection order.
    pub fn all_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_active()).collect()
    }

    /// Places an order and returns its total price.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidArgument`] when any line asks for zero or fewer
    ///   units. Raised before anything is bought.
    /// - [`CoreError::OrderLimitExceeded`] when the summed quantity of a
    ///   limited product exceeds its maximum. Raised before anything is
    ///   bought, so no stock changes. The cap comes from the store's copy of
    ///   the product, or from the line itself for products held elsewhere.
    /// - Any error from [`Product::buy`] on an executed line. Lines executed
    ///   before the failing one keep their effect.
    ///
    /// Lines naming a product the store does not hold, or one that is
    /// inactive when its turn comes, are skipped.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::{OrderLine, Product, Store};
    ///
    /// let mut store = Store::default();
    /// let bose = store.add_product(Product::new("Bose QuietComfort Earbuds", 250.0, 500).unwrap());
    /// let shipping = store.add_product(Product::limited("Shipping", 10.0, 250, 1).unwrap());
    ///
    /// let total = store
    ///     .order(&[OrderLine::new(bose, 2), OrderLine::new(shipping, 1)])
    ///     .unwrap();
    /// assert_eq!(total, 510.0);
    ///
    /// // two lines of one shipping each still add up to two
    /// assert!(store
    ///     .order(&[OrderLine::new(shipping, 1), OrderLine::new(shipping, 1)])
    ///     .is_err());
    /// ```
    pub fn order(&mut self, lines: &[OrderLine]) -> CoreResult<f64> {
        let requested = requested_totals(lines)?;

        for entry in &requested {
            let limit = match self.product(entry.product_id) {
                Some(product) => product.maximum().map(|maximum| (product.name(), maximum)),
                None => entry.limit.map(|limit| (limit.name.as_str(), limit.maximum)),
            };
            let Some((name, maximum)) = limit else {
                continue;
            };
            if entry.quantity > maximum {
                warn!(product = %name, maximum, requested = entry.quantity, "Order rejected: per-order maximum exceeded");
                return Err(CoreError::OrderLimitExceeded {
                    name: name.to_string(),
                    maximum,
                    requested: entry.quantity,
                });
            }
        }

        let mut total_price = 0.0;
        for line in lines {
            match self.product_mut(line.product_id) {
                Some(product) if product.is_active() => {
                    total_price += product.buy(line.quantity)?;
                }
                Some(product) => {
                    debug!(product = %product.name(), "Skipping inactive product");
                }
                None => {
                    debug!(id = %line.product_id, "Skipping product not in store");
                }
            }
        }

        info!(lines = lines.len(), total = total_price, "Order placed");
        Ok(total_price)
    }
}

impl From<Vec<Product>> for Store {
    fn from(products: Vec<Product>) -> Self {
        Store::new(products)
    }
}

/// Requested quantity of one product across a whole order.
struct RequestedTotal<'a> {
    product_id: ProductId,
    quantity: i64,
    limit: Option<&'a OrderLimit>,
}

/// Sums the requested quantity per product, in order of first appearance.
///
/// Every line must ask for at least one unit. Sums saturate at `i64::MAX`,
/// which is above any cap.
fn requested_totals(lines: &[OrderLine]) -> CoreResult<Vec<RequestedTotal<'_>>> {
    let mut totals: Vec<RequestedTotal<'_>> = Vec::new();

    for line in lines {
        validate_purchase_quantity(line.quantity).map_err(CoreError::InvalidArgument)?;

        match totals.iter_mut().find(|t| t.product_id == line.product_id) {
            Some(total) => {
                total.quantity = total.quantity.saturating_add(line.quantity);
                if total.limit.is_none() {
                    total.limit = line.limit.as_ref();
                }
            }
            None => totals.push(RequestedTotal {
                product_id: line.product_id,
                quantity: line.quantity,
                limit: line.limit.as_ref(),
            }),
        }
    }

    Ok(totals)
}

// =============================================================================
// Unit Tests
// =============================================================================

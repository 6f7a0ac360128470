//! # Product Module
//!
//! Products, their stock/activation state machine, and the purchase
//! operation.
//!
//! ## Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Product Kinds                                      │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Standard     │   │   NonStocked    │   │    Limited      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  stock tracked  │   │  unlimited      │   │  stock tracked  │       │
//! │  │  inactive at 0  │   │  always active  │   │  inactive at 0  │       │
//! │  │                 │   │  (licences,     │   │  + maximum per  │       │
//! │  │                 │   │   services)     │   │    order        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purchase Flow
//! ```text
//! buy(qty)
//!   │
//!   ├── qty <= 0 ────────────────────────► InvalidArgument
//!   ├── Limited && qty > maximum ────────► OrderLimitExceeded
//!   ├── stock tracked && qty > stock ────► OutOfStock
//!   │
//!   ├── total = promotion.apply(price, qty)  or  price × qty
//!   └── stock tracked: stock -= qty  (reaching 0 deactivates)
//! ```
//! A failed `buy` never changes stock.

use std::fmt;
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::promotion::Promotion;
use crate::validation::{
    validate_maximum, validate_price, validate_product_name, validate_purchase_quantity,
    validate_stock_quantity,
};

// =============================================================================
// Product Identity
// =============================================================================

/// Identity of a product inside a store.
///
/// Generated once at construction; two products with the same name are still
/// distinct entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        ProductId(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        ProductId::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Product Kind
// =============================================================================

/// Which stocking rules a product follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    /// Stock tracked, deactivates when stock hits zero.
    Standard,
    /// Unlimited availability, always active.
    NonStocked,
    /// Stock tracked plus a cap on how many units one order may take.
    Limited { maximum: i64 },
}

impl ProductKind {
    /// Whether purchases draw down a finite stock.
    #[inline]
    pub const fn is_stock_tracked(&self) -> bool {
        !matches!(self, ProductKind::NonStocked)
    }

    /// The per-order maximum, for limited products.
    #[inline]
    pub const fn maximum(&self) -> Option<i64> {
        match self {
            ProductKind::Limited { maximum } => Some(*maximum),
            _ => None,
        }
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// Available quantity as reported by [`Product::quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Finite, tracked stock.
    Finite(i64),
    /// Not inventory-tracked.
    Unbounded,
}

impl Quantity {
    /// Value to use when summing inventory: unbounded stock counts as zero.
    #[inline]
    pub const fn tracked(&self) -> i64 {
        match self {
            Quantity::Finite(n) => *n,
            Quantity::Unbounded => 0,
        }
    }

    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Quantity::Unbounded)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Finite(n) => write!(f, "{}", n),
            Quantity::Unbounded => f.write_str("Unlimited"),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Not `Clone`: a copy would share the original's [`ProductId`].
#[derive(Debug)]
pub struct Product {
    /// Identity used by the store (UUID v4).
    id: ProductId,

    /// Display name.
    name: String,

    /// Unit price.
    price: f64,

    /// Stock on hand. Kept for non-stocked products but never consulted.
    quantity: i64,

    /// Whether the product is listed and orderable through a store.
    active: bool,

    kind: ProductKind,

    /// Shared, read-only pricing strategy.
    promotion: Option<Arc<Promotion>>,
}

impl Product {
    /// Creates a standard, stock-tracked product.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::{Product, Quantity};
    ///
    /// let mut mac = Product::new("MacBook Air M2", 1450.0, 100).unwrap();
    /// assert_eq!(mac.buy(2).unwrap(), 2900.0);
    /// assert_eq!(mac.quantity(), Quantity::Finite(98));
    ///
    /// assert!(Product::new("", 10.0, 1).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> CoreResult<Self> {
        Product::build(name.into(), price, quantity, ProductKind::Standard)
    }

    /// Creates a product with unlimited availability (services, licences).
    pub fn non_stocked(name: impl Into<String>, price: f64) -> CoreResult<Self> {
        Product::build(name.into(), price, 0, ProductKind::NonStocked)
    }

    /// Creates a stock-tracked product that one order may take at most
    /// `maximum` units of.
    pub fn limited(
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        maximum: i64,
    ) -> CoreResult<Self> {
        validate_maximum(maximum).map_err(CoreError::InvalidConstruction)?;
        Product::build(name.into(), price, quantity, ProductKind::Limited { maximum })
    }

    /// Creates a product of any kind. The stock argument is ignored for
    /// non-stocked products.
    pub fn with_kind(
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        kind: ProductKind,
    ) -> CoreResult<Self> {
        match kind {
            ProductKind::Standard => Product::new(name, price, quantity),
            ProductKind::NonStocked => Product::non_stocked(name, price),
            ProductKind::Limited { maximum } => Product::limited(name, price, quantity, maximum),
        }
    }

    fn build(name: String, price: f64, quantity: i64, kind: ProductKind) -> CoreResult<Self> {
        validate_product_name(&name).map_err(CoreError::InvalidConstruction)?;
        validate_price(price).map_err(CoreError::InvalidConstruction)?;
        validate_stock_quantity(quantity).map_err(CoreError::InvalidConstruction)?;

        let active = !kind.is_stock_tracked() || quantity > 0;

        Ok(Product {
            id: ProductId::new(),
            name,
            price,
            quantity,
            active,
            kind,
            promotion: None,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[inline]
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Per-order maximum, if this is a limited product.
    #[inline]
    pub fn maximum(&self) -> Option<i64> {
        self.kind.maximum()
    }

    /// Current stock, or [`Quantity::Unbounded`] for non-stocked products.
    pub fn quantity(&self) -> Quantity {
        if self.kind.is_stock_tracked() {
            Quantity::Finite(self.quantity)
        } else {
            Quantity::Unbounded
        }
    }

    /// Sets the stock level.
    ///
    /// For stock-tracked products the active flag follows the new stock:
    /// zero deactivates, anything above zero activates. Non-stocked products
    /// stay active whatever the value.
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        validate_stock_quantity(quantity).map_err(CoreError::InvalidArgument)?;
        self.store_quantity(quantity);
        Ok(())
    }

    fn store_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;

        if !self.kind.is_stock_tracked() {
            return;
        }

        let active = quantity > 0;
        if self.active != active {
            debug!(product = %self.name, quantity, active, "Stock change toggled product");
        }
        self.active = active;
    }

    // -------------------------------------------------------------------------
    // Activation
    // -------------------------------------------------------------------------

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Manually lists the product, regardless of stock.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Manually delists the product, regardless of stock.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    // -------------------------------------------------------------------------
    // Promotion
    // -------------------------------------------------------------------------

    /// Attaches a promotion, replacing any previous one.
    pub fn set_promotion(&mut self, promotion: Arc<Promotion>) {
        debug!(product = %self.name, promotion = %promotion, "Promotion attached");
        self.promotion = Some(promotion);
    }

    /// Detaches the current promotion, returning it.
    pub fn clear_promotion(&mut self) -> Option<Arc<Promotion>> {
        self.promotion.take()
    }

    #[inline]
    pub fn promotion(&self) -> Option<&Promotion> {
        self.promotion.as_deref()
    }

    // -------------------------------------------------------------------------
    // Display & Purchase
    // -------------------------------------------------------------------------

    /// Human-readable snapshot of the product.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::Product;
    ///
    /// let shipping = Product::limited("Shipping", 10.0, 250, 1).unwrap();
    /// assert_eq!(
    ///     shipping.describe(),
    ///     "Shipping, Price: $10, Quantity: 250, Maximum per order: 1, Promotion: no promotion"
    /// );
    /// ```
    pub fn describe(&self) -> String {
        let promotion = self.promotion().map(Promotion::name).unwrap_or("no promotion");

        match self.kind {
            ProductKind::Limited { maximum } => format!(
                "{}, Price: ${}, Quantity: {}, Maximum per order: {}, Promotion: {}",
                self.name,
                self.price,
                self.quantity(),
                maximum,
                promotion
            ),
            ProductKind::Standard | ProductKind::NonStocked => format!(
                "{}, Price: ${}, Quantity: {}, Promotion: {}",
                self.name,
                self.price,
                self.quantity(),
                promotion
            ),
        }
    }

    /// Price of `quantity` units, through the promotion when one is attached.
    pub fn price_for(&self, quantity: i64) -> f64 {
        match &self.promotion {
            Some(promotion) => promotion.apply(self.price, quantity),
            None => self.price * quantity as f64,
        }
    }

    /// Buys `quantity` units and returns the total price.
    ///
    /// Checks run in order: positive quantity, per-order maximum, stock. On
    /// any failure the product is left untouched.
    pub fn buy(&mut self, quantity: i64) -> CoreResult<f64> {
        validate_purchase_quantity(quantity).map_err(CoreError::InvalidArgument)?;

        if let ProductKind::Limited { maximum } = self.kind {
            if quantity > maximum {
                return Err(CoreError::OrderLimitExceeded {
                    name: self.name.clone(),
                    maximum,
                    requested: quantity,
                });
            }
        }

        if self.kind.is_stock_tracked() && quantity > self.quantity {
            return Err(CoreError::OutOfStock {
                name: self.name.clone(),
                available: self.quantity,
                requested: quantity,
            });
        }

        let total = self.price_for(quantity);

        if self.kind.is_stock_tracked() {
            self.store_quantity(self.quantity - quantity);
        }

        debug!(product = %self.name, quantity, total, "Product bought");
        Ok(total)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_product() {
        let product = Product::new("Laptop", 1000.0, 5).unwrap();
        assert_eq!(product.name(), "Laptop");
        assert_eq!(product.price(), 1000.0);
        assert_eq!(product.quantity(), Quantity::Finite(5));
        assert!(product.is_active());
        assert!(product.promotion().is_none());
    }

    #[test]
    fn test_create_invalid_product() {
        let err = Product::new("", 1000.0, 5).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConstruction(_)));

        assert!(Product::new("Laptop", -100.0, 5).is_err());
        assert!(Product::new("Laptop", 1000.0, -5).is_err());
        assert!(Product::limited("Shipping", 10.0, 5, 0).is_err());
        assert!(Product::non_stocked("", 10.0).is_err());
    }

    #[test]
    fn test_empty_stock_starts_inactive() {
        let product = Product::new("Phone", 800.0, 0).unwrap();
        assert!(!product.is_active());
    }

    #[test]
    fn test_set_quantity() {
        let mut product = Product::new("Phone", 800.0, 10).unwrap();

        product.set_quantity(5).unwrap();
        assert_eq!(product.quantity(), Quantity::Finite(5));
        assert!(product.is_active());

        product.set_quantity(0).unwrap();
        assert_eq!(product.quantity(), Quantity::Finite(0));
        assert!(!product.is_active());

        product.set_quantity(3).unwrap();
        assert!(product.is_active());

        let err = product.set_quantity(-1).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
        assert_eq!(product.quantity(), Quantity::Finite(3));
    }

    #[test]
    fn test_set_quantity_zero_deactivates_every_tracked_kind() {
        let mut standard = Product::new("A", 1.0, 4).unwrap();
        let mut limited = Product::limited("B", 1.0, 4, 2).unwrap();

        standard.set_quantity(0).unwrap();
        limited.set_quantity(0).unwrap();

        assert!(!standard.is_active());
        assert!(!limited.is_active());
    }

    #[test]
    fn test_manual_activation() {
        let mut product = Product::new("Tablet", 500.0, 10).unwrap();
        product.deactivate();
        assert!(!product.is_active());
        product.activate();
        assert!(product.is_active());
    }

    #[test]
    fn test_buy() {
        let mut product = Product::new("Tablet", 500.0, 10).unwrap();

        assert_eq!(product.buy(2).unwrap(), 1000.0);
        assert_eq!(product.quantity(), Quantity::Finite(8));

        assert!(matches!(product.buy(0), Err(CoreError::InvalidArgument(_))));
        assert!(matches!(product.buy(-2), Err(CoreError::InvalidArgument(_))));
        assert!(matches!(product.buy(20), Err(CoreError::OutOfStock { .. })));
        assert_eq!(product.quantity(), Quantity::Finite(8));
    }

    #[test]
    fn test_product_becomes_inactive_when_quantity_reaches_zero() {
        let mut product = Product::new("Test Product", 100.0, 1).unwrap();
        product.buy(1).unwrap();
        assert_eq!(product.quantity(), Quantity::Finite(0));
        assert!(!product.is_active());
    }

    #[test]
    fn test_active_after_buy_tracks_remaining_stock() {
        for stock in 1..=5 {
            for bought in 1..=stock {
                let mut product = Product::new("P", 3.0, stock).unwrap();
                product.buy(bought).unwrap();
                assert_eq!(product.is_active(), stock - bought > 0);
            }
        }
    }

    #[test]
    fn test_buying_more_than_available() {
        let mut product = Product::new("Test Product", 100.0, 5).unwrap();
        let err = product.buy(6).unwrap_err();
        assert_eq!(
            err,
            CoreError::OutOfStock {
                name: "Test Product".to_string(),
                available: 5,
                requested: 6,
            }
        );
        assert_eq!(product.quantity(), Quantity::Finite(5));
        assert!(product.is_active());
    }

    #[test]
    fn test_limited_checks_maximum_before_stock() {
        let mut shipping = Product::limited("Shipping", 10.0, 1, 1).unwrap();

        // over both the cap and the stock: the cap wins
        let err = shipping.buy(2).unwrap_err();
        assert!(matches!(err, CoreError::OrderLimitExceeded { maximum: 1, requested: 2, .. }));
        assert_eq!(shipping.quantity(), Quantity::Finite(1));

        assert_eq!(shipping.buy(1).unwrap(), 10.0);
        assert!(!shipping.is_active());
    }

    #[test]
    fn test_non_stocked_is_unbounded() {
        let mut license = Product::non_stocked("Windows License", 125.0).unwrap();
        assert!(license.is_active());
        assert_eq!(license.quantity(), Quantity::Unbounded);

        assert_eq!(license.buy(5).unwrap(), 625.0);
        assert_eq!(license.buy(1_000).unwrap(), 125_000.0);
        assert_eq!(license.quantity(), Quantity::Unbounded);
        assert!(license.is_active());

        assert!(matches!(license.buy(0), Err(CoreError::InvalidArgument(_))));

        license.set_quantity(0).unwrap();
        assert!(license.is_active());
        assert_eq!(license.quantity(), Quantity::Unbounded);
    }

    #[test]
    fn test_buy_uses_promotion() {
        let mut product = Product::new("Bose", 100.0, 10).unwrap();
        product.set_promotion(Arc::new(Promotion::third_one_free("Third One Free!")));

        assert_eq!(product.buy(3).unwrap(), 200.0);
        assert_eq!(product.quantity(), Quantity::Finite(7));

        let previous = product.clear_promotion();
        assert_eq!(previous.unwrap().name(), "Third One Free!");
        assert_eq!(product.buy(3).unwrap(), 300.0);
    }

    #[test]
    fn test_promotion_is_shared_and_replaced() {
        let promo = Arc::new(Promotion::percent_discount("30% off!", 30.0).unwrap());
        let mut a = Product::new("A", 100.0, 10).unwrap();
        let mut b = Product::non_stocked("B", 100.0).unwrap();
        a.set_promotion(Arc::clone(&promo));
        b.set_promotion(Arc::clone(&promo));
        assert_eq!(Arc::strong_count(&promo), 3);

        a.set_promotion(Arc::new(Promotion::second_half_price("Second Half price!")));
        assert_eq!(a.promotion().unwrap().name(), "Second Half price!");
        assert_eq!(Arc::strong_count(&promo), 2);
    }

    #[test]
    fn test_describe() {
        let mut mac = Product::new("MacBook Air M2", 1450.0, 100).unwrap();
        assert_eq!(
            mac.describe(),
            "MacBook Air M2, Price: $1450, Quantity: 100, Promotion: no promotion"
        );

        mac.set_promotion(Arc::new(Promotion::second_half_price("Second Half price!")));
        assert_eq!(
            mac.describe(),
            "MacBook Air M2, Price: $1450, Quantity: 100, Promotion: Second Half price!"
        );
        assert_eq!(mac.describe(), mac.describe());
        assert_eq!(mac.to_string(), mac.describe());

        let license = Product::non_stocked("Windows License", 125.0).unwrap();
        assert_eq!(
            license.describe(),
            "Windows License, Price: $125, Quantity: Unlimited, Promotion: no promotion"
        );
    }

    #[test]
    fn test_with_kind() {
        let product = Product::with_kind("Shipping", 10.0, 250, ProductKind::Limited { maximum: 1 })
            .unwrap();
        assert_eq!(product.maximum(), Some(1));

        let product = Product::with_kind("License", 125.0, 42, ProductKind::NonStocked).unwrap();
        assert_eq!(product.quantity(), Quantity::Unbounded);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Product::new("Same", 1.0, 1).unwrap();
        let b = Product::new("Same", 1.0, 1).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_quantity_display() {
        assert_eq!(Quantity::Finite(7).to_string(), "7");
        assert_eq!(Quantity::Unbounded.to_string(), "Unlimited");
        assert_eq!(Quantity::Unbounded.tracked(), 0);
    }
}

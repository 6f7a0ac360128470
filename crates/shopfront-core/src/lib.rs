//! # shopfront-core: Pricing and Order Validation
//!
//! This crate holds the only real logic of Shopfront: products and their
//! stock/activation rules, promotion pricing, and multi-line order
//! validation. It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    shopfront-cli (menu loop)                    │   │
//! │  │    list products ──► total quantity ──► make an order           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Store / Product API                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopfront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ promotion │  │  product  │  │   store   │  │ validation│  │   │
//! │  │   │  Percent  │  │  Standard │  │   order   │  │   rules   │  │   │
//! │  │   │  2nd half │  │ NonStocked│  │   caps    │  │           │  │   │
//! │  │   │  3rd free │  │  Limited  │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STDIN/STDOUT • NO ENVIRONMENT                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`promotion`] - Pricing strategies
//! - [`product`] - Product kinds, stock and purchase
//! - [`store`] - Product collection and order processing
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use shopfront_core::{OrderLine, Product, Promotion, Store};
//!
//! let mut mac = Product::new("MacBook Air M2", 1450.0, 100).unwrap();
//! mac.set_promotion(Arc::new(Promotion::second_half_price("Second Half price!")));
//!
//! let mut store = Store::default();
//! let mac = store.add_product(mac);
//!
//! // 1450 + 725
//! let total = store.order(&[OrderLine::new(mac, 2)]).unwrap();
//! assert_eq!(total, 2175.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod product;
pub mod promotion;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use product::{Product, ProductId, ProductKind, Quantity};
pub use promotion::{Promotion, PromotionKind};
pub use store::{OrderLimit, OrderLine, Store};

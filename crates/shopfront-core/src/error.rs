//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  ├── CoreError        - Domain errors surfaced to the caller           │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  shopfront-cli errors (app crate)                                      │
//! │  ├── ConfigError      - Bad environment configuration                  │
//! │  └── CatalogError     - Bad catalog file                               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → menu prints it, loop continues    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, quantities)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Nothing here is recovered internally: construction errors abort object
/// creation, purchase errors abort the single `buy`, and an order-cap failure
/// aborts the whole order before any stock moves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A product or promotion was constructed with bad arguments.
    ///
    /// ## When This Occurs
    /// - Empty product name
    /// - Negative (or non-finite) price
    /// - Negative initial quantity
    /// - Non-positive maximum-per-order for a limited product
    #[error("Invalid construction: {0}")]
    InvalidConstruction(ValidationError),

    /// An operation received an argument outside its domain.
    ///
    /// ## When This Occurs
    /// - `buy(0)` or `buy(-3)`
    /// - `set_quantity(-1)`
    #[error("Invalid argument: {0}")]
    InvalidArgument(ValidationError),

    /// Not enough stock to complete the purchase.
    ///
    /// ## User Workflow
    /// ```text
    /// Order line (qty: 6)
    ///      │
    ///      ▼
    /// Check stock: available=5
    ///      │
    ///      ▼
    /// OutOfStock { name: "Bose", available: 5, requested: 6 }
    ///      │
    ///      ▼
    /// Menu shows: "Not enough stock for Bose: available 5, requested 6"
    /// ```
    #[error("Not enough stock for {name}: available {available}, requested {requested}")]
    OutOfStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A limited product was requested above its per-order maximum.
    ///
    /// Raised by a single `buy` and by `Store::order` when the quantities of
    /// all lines for the product add up past the maximum.
    #[error("Order limit exceeded for {name}: maximum {maximum} per order, requested {requested}")]
    OrderLimitExceeded {
        name: String,
        maximum: i64,
        requested: i64,
    },
}

impl CoreError {
    /// Short machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::InvalidConstruction(_) => "INVALID_CONSTRUCTION",
            CoreError::InvalidArgument(_) => "INVALID_ARGUMENT",
            CoreError::OutOfStock { .. } => "OUT_OF_STOCK",
            CoreError::OrderLimitExceeded { .. } => "ORDER_LIMIT_EXCEEDED",
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These carry the offending field; [`CoreError`] records whether the failure
/// happened at construction time or on a later operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OutOfStock {
            name: "Bose QuietComfort Earbuds".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Not enough stock for Bose QuietComfort Earbuds: available 3, requested 5"
        );

        let err = CoreError::OrderLimitExceeded {
            name: "Shipping".to_string(),
            maximum: 1,
            requested: 2,
        };
        assert_eq!(
            err.to_string(),
            "Order limit exceeded for Shipping: maximum 1 per order, requested 2"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = CoreError::InvalidArgument(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
        assert_eq!(err.to_string(), "Invalid argument: quantity must be positive");
    }

    #[test]
    fn test_error_codes() {
        let validation = ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        };
        assert_eq!(
            CoreError::InvalidConstruction(validation.clone()).code(),
            "INVALID_CONSTRUCTION"
        );
        assert_eq!(CoreError::InvalidArgument(validation).code(), "INVALID_ARGUMENT");
    }
}

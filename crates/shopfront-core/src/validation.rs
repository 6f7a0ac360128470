//! # Validation Module
//!
//! Input validation for product and promotion construction and for the
//! quantity arguments of purchase operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI menu                                                     │
//! │  ├── Parses keystrokes into (product number, amount)                   │
//! │  └── Rejects non-numeric input before it reaches the core              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Construction rules (name, price, stock, maximum, percent)         │
//! │  └── Operation rules (purchase quantity, stock assignment)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Product / Store                                              │
//! │  └── Stock availability and per-order caps                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::validation::{validate_product_name, validate_purchase_quantity};
//!
//! assert!(validate_product_name("MacBook Air M2").is_ok());
//! assert!(validate_purchase_quantity(0).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative (zero is allowed for free items)
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_price;
///
/// assert!(validate_price(1450.0).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-1.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock quantity (initial stock or a `set_quantity` value).
pub fn validate_stock_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates the quantity of a single purchase.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product::buy(qty)                                                      │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_purchase_quantity(qty) ← THIS FUNCTION                       │
/// │       │                                                                 │
/// │       ├── qty <= 0? → InvalidArgument                                  │
/// │       │                                                                 │
/// │       └── OK → per-order cap check → stock check → pricing             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_purchase_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates the per-order maximum of a limited product.
pub fn validate_maximum(maximum: i64) -> ValidationResult<()> {
    if maximum <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "maximum".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be finite
/// - Must be between 0 and 100 inclusive
pub fn validate_percent(percent: f64) -> ValidationResult<()> {
    if !percent.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "percent".to_string(),
        });
    }

    if !(0.0..=100.0).contains(&percent) {
        return Err(ValidationError::OutOfRange {
            field: "percent".to_string(),
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Google Pixel 7").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(250.0).is_ok());
        assert!(validate_price(-100.0).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_quantities() {
        assert!(validate_stock_quantity(0).is_ok());
        assert!(validate_stock_quantity(-5).is_err());

        assert!(validate_purchase_quantity(1).is_ok());
        assert!(validate_purchase_quantity(0).is_err());
        assert!(validate_purchase_quantity(-1).is_err());

        assert!(validate_maximum(1).is_ok());
        assert!(validate_maximum(0).is_err());
    }

    #[test]
    fn test_validate_percent() {
        assert!(validate_percent(0.0).is_ok());
        assert!(validate_percent(30.0).is_ok());
        assert!(validate_percent(100.0).is_ok());
        assert!(validate_percent(100.5).is_err());
        assert!(validate_percent(-1.0).is_err());
        assert!(matches!(
            validate_percent(f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
    }
}

//! # Promotion Module
//!
//! Pricing strategies that replace the default `price × quantity` total of a
//! purchase.
//!
//! ## Strategies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Promotion Kinds                                      │
//! │                                                                         │
//! │  PercentDiscount(p)   total = price × qty × (1 − p/100)                 │
//! │                                                                         │
//! │  SecondHalfPrice      total = price + (qty − 1) × price/2               │
//! │                       (qty = 0 → 0)                                     │
//! │                                                                         │
//! │  ThirdOneFree         total = (qty − ⌊qty/3⌋) × price                   │
//! │                                                                         │
//! │  Example: price = 100, qty = 3                                          │
//! │    PercentDiscount(30) → 210    SecondHalfPrice → 200                   │
//! │    ThirdOneFree        → 200                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A promotion only reads the unit price it is given, so one instance can be
//! shared by any number of products (`Arc<Promotion>`). No rounding is applied
//! beyond ordinary `f64` arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_percent;

// =============================================================================
// Promotion Kind
// =============================================================================

/// The pricing rule of a promotion, with its own parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromotionKind {
    /// Flat percentage off the whole line.
    PercentDiscount { percent: f64 },
    /// First unit at full price, every further unit at half price.
    SecondHalfPrice,
    /// Every third unit is free.
    ThirdOneFree,
}

// =============================================================================
// Promotion
// =============================================================================

/// A named, immutable pricing strategy.
///
/// Only serializable: deserialized input goes through [`Promotion::new`] so
/// the percent check always runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Promotion {
    name: String,
    kind: PromotionKind,
}

impl Promotion {
    /// Creates a promotion from a name and kind, validating the kind's
    /// parameters.
    pub fn new(name: impl Into<String>, kind: PromotionKind) -> CoreResult<Self> {
        if let PromotionKind::PercentDiscount { percent } = kind {
            validate_percent(percent).map_err(CoreError::InvalidConstruction)?;
        }

        Ok(Promotion {
            name: name.into(),
            kind,
        })
    }

    /// Creates a percentage discount.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::Promotion;
    ///
    /// let promo = Promotion::percent_discount("30% off!", 30.0).unwrap();
    /// assert_eq!(promo.apply(100.0, 3), 210.0);
    ///
    /// assert!(Promotion::percent_discount("too generous", 150.0).is_err());
    /// ```
    pub fn percent_discount(name: impl Into<String>, percent: f64) -> CoreResult<Self> {
        Promotion::new(name, PromotionKind::PercentDiscount { percent })
    }

    /// Creates a second-unit-half-price promotion.
    pub fn second_half_price(name: impl Into<String>) -> Self {
        Promotion {
            name: name.into(),
            kind: PromotionKind::SecondHalfPrice,
        }
    }

    /// Creates a buy-two-get-one-free promotion.
    pub fn third_one_free(name: impl Into<String>) -> Self {
        Promotion {
            name: name.into(),
            kind: PromotionKind::ThirdOneFree,
        }
    }

    /// Display name of the promotion.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pricing rule.
    #[inline]
    pub fn kind(&self) -> PromotionKind {
        self.kind
    }

    /// Computes the total price of `quantity` units at `unit_price`.
    ///
    /// A quantity of zero always costs nothing. Negative quantities are
    /// rejected by [`Product::buy`](crate::Product::buy) before they get
    /// here and are priced at zero as well.
    pub fn apply(&self, unit_price: f64, quantity: i64) -> f64 {
        if quantity <= 0 {
            return 0.0;
        }

        match self.kind {
            PromotionKind::PercentDiscount { percent } => {
                unit_price * quantity as f64 * (1.0 - percent / 100.0)
            }
            PromotionKind::SecondHalfPrice => {
                unit_price + (quantity - 1) as f64 * (unit_price / 2.0)
            }
            PromotionKind::ThirdOneFree => {
                let chargeable = quantity - quantity / 3;
                chargeable as f64 * unit_price
            }
        }
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_discount() {
        let promo = Promotion::percent_discount("30% off", 30.0).unwrap();
        // 100 * 3 = 300 minus 30% = 210
        assert_eq!(promo.apply(100.0, 3), 210.0);

        let promo = Promotion::percent_discount("10% off", 10.0).unwrap();
        assert_eq!(promo.apply(100.0, 2), 180.0);
    }

    #[test]
    fn test_second_half_price() {
        let promo = Promotion::second_half_price("Second Half price");
        // 1 full + 2 half = 100 + 50 + 50
        assert_eq!(promo.apply(100.0, 3), 200.0);
        assert_eq!(promo.apply(100.0, 1), 100.0);
        assert_eq!(promo.apply(100.0, 0), 0.0);
    }

    #[test]
    fn test_third_one_free() {
        let promo = Promotion::third_one_free("Third One Free");
        assert_eq!(promo.apply(100.0, 3), 200.0);
        assert_eq!(promo.apply(100.0, 6), 400.0);
        // every third unit by count, remainder is charged
        assert_eq!(promo.apply(100.0, 5), 400.0);
        assert_eq!(promo.apply(100.0, 2), 200.0);
    }

    #[test]
    fn test_zero_quantity_is_free_for_every_kind() {
        let promos = [
            Promotion::percent_discount("p", 25.0).unwrap(),
            Promotion::second_half_price("s"),
            Promotion::third_one_free("t"),
        ];
        for promo in &promos {
            assert_eq!(promo.apply(99.0, 0), 0.0, "{}", promo.name());
        }
    }

    #[test]
    fn test_invalid_percent_is_construction_error() {
        let err = Promotion::percent_discount("bad", -5.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConstruction(_)));
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&PromotionKind::PercentDiscount { percent: 30.0 }).unwrap();
        assert_eq!(json, r#"{"type":"percent_discount","percent":30.0}"#);

        let kind: PromotionKind = serde_json::from_str(r#"{"type":"third_one_free"}"#).unwrap();
        assert_eq!(kind, PromotionKind::ThirdOneFree);
    }

    #[test]
    fn test_display_is_name() {
        let promo = Promotion::third_one_free("Third One Free!");
        assert_eq!(promo.to_string(), "Third One Free!");
    }
}

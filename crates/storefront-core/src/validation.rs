//! # Validation Module
//!
//! Range checks shared by the domain constructors.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Constructor / setter                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_*() ← THIS MODULE                                            │
//! │       │                                                                 │
//! │       ├── invalid → Err(ValidationError), no state is touched          │
//! │       │                                                                 │
//! │       └── valid   → value is built / replaced                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejected value never leaves a half-updated object behind.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_PRICE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must not exceed MAX_PRICE (1 000 000 000)
///
/// ## Example
/// ```rust
/// use storefront_core::{money::Money, validation::validate_price};
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    if price.amount() > Decimal::from(MAX_PRICE) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE,
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between 0 and 100, both inclusive
pub fn validate_percent(percent: Decimal) -> ValidationResult<()> {
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(ValidationError::OutOfRange {
            field: "discount percent".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

/// Validates a display name.
///
/// ## Rules
/// - Must contain something other than whitespace
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1099)).is_ok());
        assert_eq!(
            validate_price(Money::new(dec!(-0.01))),
            Err(ValidationError::MustBeNonNegative {
                field: "price".to_string()
            })
        );
    }

    #[test]
    fn test_validate_price_upper_bound() {
        assert!(validate_price(Money::from_major_minor(MAX_PRICE, 0)).is_ok());
        assert_eq!(
            validate_price(Money::from_major_minor(MAX_PRICE, 1)),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_PRICE
            })
        );
        assert!(validate_price(Money::new(Decimal::MAX)).is_err());
    }

    #[test]
    fn test_validate_percent_bounds_inclusive() {
        assert!(validate_percent(dec!(0)).is_ok());
        assert!(validate_percent(dec!(100)).is_ok());
        assert!(validate_percent(dec!(12.5)).is_ok());

        assert!(validate_percent(dec!(-0.5)).is_err());
        assert!(validate_percent(dec!(100.01)).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Laptop").is_ok());
        assert!(validate_name("name", "").is_err());
        assert!(validate_name("name", "   ").is_err());
    }
}

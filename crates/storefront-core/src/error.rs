//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Domain rule violations                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-demo errors (app)                                          │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (demo entry point)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All validation is fail-fast at construction time. Nothing in this crate
//! catches or recovers from these errors.

use thiserror::Error;
use uuid::Uuid;

use crate::pricing::StrategyKind;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The order's pricing strategy has no notion of the requested operation.
    ///
    /// ## When This Occurs
    /// - `add_discount` on a fixed-slot order
    /// - `set_product_discount` / `set_seasonal_discount` on a chain order
    #[error("{operation} is not supported by the {strategy} pricing strategy")]
    UnsupportedOperation {
        operation: &'static str,
        strategy: StrategyKind,
    },

    /// An order may belong to exactly one customer.
    #[error("Order {order_id} already belongs to customer {customer_id}")]
    OrderAlreadyOwned { order_id: Uuid, customer_id: Uuid },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised by constructors and setters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is out of range (bounds inclusive).
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");

        let err = ValidationError::OutOfRange {
            field: "discount percent".to_string(),
            min: 0,
            max: 100,
        };
        assert_eq!(err.to_string(), "discount percent must be between 0 and 100");
    }

    #[test]
    fn test_unsupported_operation_message() {
        let err = CoreError::UnsupportedOperation {
            operation: "add_discount",
            strategy: StrategyKind::FixedSlot,
        };
        assert_eq!(
            err.to_string(),
            "add_discount is not supported by the fixed-slot pricing strategy"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

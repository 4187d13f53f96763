//! # Error Types
//!
//! Domain-specific error types for kirana-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kirana-core errors (this file)                                        │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller-facing message             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (unit, quantities, etc.)
//! 3. Errors are enum variants, never String
//! 4. The allocation math itself never errors: unknown units degrade to
//!    count conversion, missing prices resolve to zero, and short stock is
//!    priced through at product defaults. Errors only come from validation
//!    and from the caller's own decision to block a sale.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They should be caught
/// and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Requested quantity exceeds the tracked stock.
    ///
    /// ## When This Occurs
    /// - The caller asked [`crate::stock::require_available`] to enforce
    ///   availability before committing a sale.
    ///
    /// Note: `allocate_by_quantity` itself never raises this. Pricing short
    /// stock through at default prices is deliberate; the *decision* to
    /// block belongs to the caller.
    #[error("Insufficient stock: available {available}, requested {requested}")]
    InsufficientStock { available: f64, requested: f64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before allocation runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Fractional quantity requested in a unit sold in whole numbers.
    ///
    /// Distinct from a stock failure: 2.5 pcs is not a quantity at all,
    /// so allocation is never attempted.
    #[error("{unit} is sold in whole units; {quantity} is not a valid quantity")]
    FractionalQuantity { unit: String, quantity: f64 },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    MustBeFinite { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            available: 3.0,
            requested: 5.0,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock: available 3, requested 5"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::FractionalQuantity {
            unit: "pcs".to_string(),
            quantity: 2.5,
        };
        assert_eq!(
            err.to_string(),
            "pcs is sold in whole units; 2.5 is not a valid quantity"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

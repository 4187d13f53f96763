//! # Validation Module
//!
//! Input validation and numeric coercion at the engine boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty field, obvious typos)                  │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Whole-count rule for piece units                                  │
//! │  ├── Coercion of non-finite numbers to zero                            │
//! │  └── Price/quantity range checks                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Allocation engine                                            │
//! │  └── Never throws: degrades instead (unknown unit → count,             │
//! │      missing price → 0, short stock → default pricing)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::units::Unit;

// =============================================================================
// Numeric Coercion
// =============================================================================

/// Coerces a caller-supplied number to something the engine can do
/// arithmetic with: NaN and infinities become 0.
///
/// Every public entry point passes external quantities and amounts through
/// this before converting units. The engine itself must never be the place
/// where a malformed number turns into a panic or a NaN total.
///
/// ## Example
/// ```rust
/// use kirana_core::validation::sanitize_quantity;
///
/// assert_eq!(sanitize_quantity(2.5), 2.5);
/// assert_eq!(sanitize_quantity(f64::NAN), 0.0);
/// assert_eq!(sanitize_quantity(f64::INFINITY), 0.0);
/// ```
#[inline]
pub fn sanitize_quantity(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

// =============================================================================
// Quantity Validators
// =============================================================================

/// Validates that a quantity is admissible in the given unit.
///
/// ## Rules
/// - Weight/volume units admit any quantity (decimals included)
/// - Count units admit whole numbers only
///
/// This is a hard input error, not a stock problem: fractional counts of
/// indivisible units are rejected before allocation is attempted, never
/// silently rounded.
///
/// ## Example
/// ```rust
/// use kirana_core::units::Unit;
/// use kirana_core::validation::validate_whole_count;
///
/// assert!(validate_whole_count(&Unit::parse("kg"), 2.5).is_ok());
/// assert!(validate_whole_count(&Unit::parse("pcs"), 2.0).is_ok());
/// assert!(validate_whole_count(&Unit::parse("pcs"), 2.5).is_err());
/// ```
pub fn validate_whole_count(unit: &Unit, quantity: f64) -> ValidationResult<()> {
    if unit.is_decimal_allowed() {
        return Ok(());
    }

    if quantity.fract() != 0.0 {
        return Err(ValidationError::FractionalQuantity {
            unit: unit.to_string(),
            quantity,
        });
    }

    Ok(())
}

/// Validates a requested sale quantity.
///
/// ## Rules
/// - Must be a finite number
/// - Must be positive (> 0)
pub fn validate_quantity(quantity: f64) -> ValidationResult<()> {
    if !quantity.is_finite() {
        return Err(ValidationError::MustBeFinite {
            field: "quantity".to_string(),
        });
    }

    if quantity <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (missing price data resolves to zero downstream;
///   the UI treats a zero computed price as a data-quality warning)
///
/// ## Example
/// ```rust
/// use kirana_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());  // Rs 10.99
/// assert!(validate_price_cents(0).is_ok());     // unknown price
/// assert!(validate_price_cents(-100).is_err()); // invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

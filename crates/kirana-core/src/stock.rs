//! # Stock Availability
//!
//! Aggregate stock totals and pre-sale availability checks.
//!
//! ## Where This Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cashier enters quantity                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  check_availability ← THIS MODULE (validation + stock comparison)       │
//! │       │                                                                 │
//! │       ├── fractional count unit? → hard input error, stop               │
//! │       ├── available?             → proceed to allocate                  │
//! │       └── short?                 → caller decides; the allocation       │
//! │                                    engine itself never blocks           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationResult};
use crate::types::Product;
use crate::units::Unit;
use crate::validation::{sanitize_quantity, validate_whole_count};

// =============================================================================
// Availability Report
// =============================================================================

/// The outcome of an availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Availability {
    /// Whether the requested quantity fits within tracked stock.
    pub available: bool,
    /// Total available stock formatted in the requested unit, for user
    /// messaging ("only 2.5 kg left").
    pub stock_display: String,
}

// =============================================================================
// Stock Totals
// =============================================================================

/// Total remaining stock across all batches, in product units.
///
/// Missing or negative batch quantities count as zero. A product with no
/// batch data falls back to its product-level stock figure.
///
/// ## Example
/// ```rust
/// use kirana_core::stock::total_stock;
/// use kirana_core::types::Product;
///
/// let product = Product {
///     id: "p1".into(),
///     name: "Sugar".into(),
///     unit: "kg".into(),
///     selling_price_cents: None,
///     wholesale_price_cents: None,
///     cost_price_cents: None,
///     wholesale_moq: None,
///     track_expiry: false,
///     stock: Some(12.5),
///     batches: vec![],
/// };
/// assert_eq!(total_stock(&product), 12.5);
/// ```
pub fn total_stock(product: &Product) -> f64 {
    if !product.has_batches() {
        return sanitize_quantity(product.stock.unwrap_or(0.0)).max(0.0);
    }

    product
        .batches
        .iter()
        .map(|batch| sanitize_quantity(batch.quantity).max(0.0))
        .sum()
}

// =============================================================================
// Availability Check
// =============================================================================

/// Validates a requested quantity against tracked stock.
///
/// The fractional-count guard runs first: 2.5 pcs is rejected as invalid
/// input before any stock comparison, never silently rounded. Short stock
/// is NOT an error here; it is reported in the result and the caller
/// decides whether to block the sale.
pub fn check_availability(
    product: &Product,
    quantity: f64,
    unit: &str,
) -> ValidationResult<Availability> {
    let requested_unit = Unit::parse(unit);
    let quantity = sanitize_quantity(quantity);
    validate_whole_count(&requested_unit, quantity)?;

    let product_unit = Unit::parse(&product.unit);
    let requested = requested_unit.to_base(quantity.max(0.0)) / product_unit.to_base(1.0);

    let total = total_stock(product);
    let available = requested <= total;
    let display_value = requested_unit.from_base(product_unit.to_base(total));

    Ok(Availability {
        available,
        stock_display: format_quantity(display_value, &requested_unit),
    })
}

/// Availability as an enforcement step: errors when stock is short.
///
/// A convenience for callers that want the blocking behavior as a typed
/// error instead of inspecting [`Availability`] themselves.
pub fn require_available(product: &Product, quantity: f64, unit: &str) -> CoreResult<()> {
    let report = check_availability(product, quantity, unit)?;
    if !report.available {
        let requested_unit = Unit::parse(unit);
        let product_unit = Unit::parse(&product.unit);
        return Err(CoreError::InsufficientStock {
            available: total_stock(product),
            requested: requested_unit.to_base(sanitize_quantity(quantity).max(0.0))
                / product_unit.to_base(1.0),
        });
    }
    Ok(())
}

// =============================================================================
// Display Formatting
// =============================================================================

/// Formats a stock figure for user messaging: at most three decimals,
/// trailing noise trimmed ("2.5 kg", "10 pcs").
fn format_quantity(value: f64, unit: &Unit) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as i64, unit)
    } else {
        format!("{} {}", rounded, unit)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

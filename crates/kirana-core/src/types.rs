//! # Domain Types
//!
//! Core domain types used throughout Kirana POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │      Product        │ 1    * │       Batch         │                │
//! │  │  ─────────────────  │───────►│  ─────────────────  │                │
//! │  │  id, name, unit     │        │  id, batch_number   │                │
//! │  │  selling/wholesale/ │        │  quantity, expiry   │                │
//! │  │  cost price (cents) │        │  created_at         │                │
//! │  │  wholesale_moq      │        │  price overrides    │                │
//! │  │  track_expiry       │        └─────────────────────┘                │
//! │  │  batches            │                                               │
//! │  └─────────────────────┘        ┌─────────────────────┐                │
//! │                                 │      SaleMode       │                │
//! │                                 │  Retail | Wholesale │                │
//! │                                 └─────────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! Products and batches are read-only inputs to the engine. The engine
//! computes how much *would* be drawn from each batch; the inventory layer
//! owns the actual decrement. `Batch::quantity` is never mutated here.
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: opaque identifier - immutable, used for store relations
//! - Business ID: (`batch_number`, etc.) - human-readable on labels/invoices

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

// =============================================================================
// Loose Boolean Normalization
// =============================================================================

/// Deserializes a flag that upstream stores record as either a boolean or
/// the strings `"true"`/`"false"`. Normalized exactly once, here at the
/// serde boundary; the rest of the engine only ever sees `bool`.
fn bool_from_loose<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Bool(bool),
        Text(String),
    }

    match Loose::deserialize(deserializer)? {
        Loose::Bool(flag) => Ok(flag),
        Loose::Text(text) => Ok(text.trim().eq_ignore_ascii_case("true")),
    }
}

// =============================================================================
// Sale Mode
// =============================================================================

/// The pricing mode of a sale.
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SaleMode {
    /// Walk-in counter sale at the regular selling price.
    Retail,
    /// Bulk sale; batch-level wholesale pricing is gated by MOQ/expiry.
    Wholesale,
}

impl SaleMode {
    /// Convenience check used throughout the price-resolution chains.
    #[inline]
    pub fn is_wholesale(&self) -> bool {
        matches!(self, SaleMode::Wholesale)
    }
}

// =============================================================================
// Batch
// =============================================================================

/// One purchase batch of a product.
///
/// A batch carries its own remaining quantity, expiry, and price overrides.
/// Insertion order in `Product::batches` is meaningless; consumption order
/// is always derived (see the ordering module).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Batch {
    /// Unique identifier (opaque; assigned by the store).
    pub id: String,

    /// Business identifier printed on labels and invoices.
    #[serde(default)]
    pub batch_number: String,

    /// Remaining stock in product units. Read-only to the engine.
    #[serde(default)]
    pub quantity: f64,

    /// Expiry date, if the supplier declared one.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub expiry: Option<DateTime<Utc>>,

    /// When the batch was received; the FIFO key and expiry tie-break.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,

    /// Purchase cost per product unit, in cents. Overrides the product's.
    #[serde(default)]
    pub cost_price_cents: Option<i64>,

    /// Selling price per product unit, in cents. Overrides the product's.
    #[serde(default)]
    pub selling_price_cents: Option<i64>,

    /// Wholesale price per product unit, in cents. Overrides the product's,
    /// but only when the MOQ/near-expiry gate is open.
    #[serde(default)]
    pub wholesale_price_cents: Option<i64>,
}

impl Batch {
    /// Returns the batch cost price override, if any.
    #[inline]
    pub fn cost_price(&self) -> Option<crate::Money> {
        self.cost_price_cents.map(crate::Money::from_cents)
    }

    /// Returns the batch selling price override, if any.
    #[inline]
    pub fn selling_price(&self) -> Option<crate::Money> {
        self.selling_price_cents.map(crate::Money::from_cents)
    }

    /// Returns the batch wholesale price override, if any.
    #[inline]
    pub fn wholesale_price(&self) -> Option<crate::Money> {
        self.wholesale_price_cents.map(crate::Money::from_cents)
    }

    /// Whether the batch still has sellable stock recorded.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.quantity > 0.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product with zero or more purchase batches.
///
/// Product-level price fields are fallbacks, used only when no batch-level
/// figure applies. `None` means "fall through the resolution chain"; the
/// terminal default of every chain is zero, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (opaque; assigned by the store).
    pub id: String,

    /// Display name shown to the cashier and on the invoice.
    pub name: String,

    /// Natural/stocking unit string: "kg", "g", "l", "ml", "pcs", "box", …
    /// Kept raw; parsing is infallible, so a misrecorded unit degrades to a
    /// count unit instead of blocking the sale.
    pub unit: String,

    /// Retail selling price per unit, in cents.
    #[serde(default)]
    pub selling_price_cents: Option<i64>,

    /// Wholesale price per unit, in cents.
    #[serde(default)]
    pub wholesale_price_cents: Option<i64>,

    /// Purchase cost per unit, in cents.
    #[serde(default)]
    pub cost_price_cents: Option<i64>,

    /// Minimum total sale quantity (in product units) that opens batch-level
    /// wholesale pricing. Product-level only; batches never override it.
    #[serde(default)]
    pub wholesale_moq: Option<f64>,

    /// Whether batches are consumed nearest-expiry-first. Upstream stores
    /// record this as a bool or as the strings "true"/"false".
    #[serde(default, deserialize_with = "bool_from_loose")]
    pub track_expiry: bool,

    /// Product-level stock figure, used only when `batches` is empty.
    #[serde(default)]
    pub stock: Option<f64>,

    /// The product's purchase batches. Order is not meaningful.
    #[serde(default)]
    pub batches: Vec<Batch>,
}

impl Product {
    /// Returns the product retail selling price, if set.
    #[inline]
    pub fn selling_price(&self) -> Option<crate::Money> {
        self.selling_price_cents.map(crate::Money::from_cents)
    }

    /// Returns the product wholesale price, if set.
    #[inline]
    pub fn wholesale_price(&self) -> Option<crate::Money> {
        self.wholesale_price_cents.map(crate::Money::from_cents)
    }

    /// Returns the product cost price, if set.
    #[inline]
    pub fn cost_price(&self) -> Option<crate::Money> {
        self.cost_price_cents.map(crate::Money::from_cents)
    }

    /// Whether any batch data exists for this product.
    #[inline]
    pub fn has_batches(&self) -> bool {
        !self.batches.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

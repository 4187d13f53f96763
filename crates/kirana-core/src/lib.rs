//! # kirana-core: Pure Pricing & Allocation Engine for Kirana POS
//!
//! This crate is the **heart** of Kirana POS. It contains the batch-aware
//! pricing and unit-conversion allocation logic as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kirana POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Billing Frontend                           │   │
//! │  │   quantity field ◄──── kept in sync ────► amount field          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ called on every keystroke              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kirana-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌──────────┐ ┌─────────┐ ┌────────────┐ ┌───────┐ │   │
//! │  │  │  units  │ │ ordering │ │ pricing │ │ allocation │ │ stock │ │   │
//! │  │  │ kg/g/l/ │ │FIFO/FEFO │ │fallback │ │  the walk  │ │totals │ │   │
//! │  │  │ ml/pcs  │ │  order   │ │ chains  │ │ qty ⇄ money│ │ check │ │   │
//! │  │  └─────────┘ └──────────┘ └─────────┘ └────────────┘ └───────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO MUTATION • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ advice: used_batches[]                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          Inventory mutation layer (external collaborator)       │   │
//! │  │    applies draws as transactional decrements after the sale     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Batch, SaleMode)
//! - [`money`] - Money type with integer cents and floor-to-cent totals
//! - [`units`] - Unit categories, base-unit conversion, admissibility
//! - [`ordering`] - Deterministic FIFO/FEFO consumption order
//! - [`pricing`] - Ordered-fallback price resolution and the MOQ gate
//! - [`allocation`] - The central walk: quantity→money and money→quantity
//! - [`stock`] - Aggregate stock totals and availability checks
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and numeric coercion
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same snapshot
//!    in, same allocation out. `now` is a parameter, never read inside.
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Never Block The Math**: unknown units degrade to count conversion,
//!    missing prices resolve to zero, short stock prices through at product
//!    defaults. Blocking a sale is the caller's decision, made on the
//!    availability report.
//! 4. **Advice, Not Mutation**: batch quantities are read-only; the engine
//!    only reports what *would* be drawn.
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use kirana_core::{allocate_by_quantity, check_availability, Product, SaleMode};
//!
//! let product = Product {
//!     id: "p1".into(),
//!     name: "Sugar".into(),
//!     unit: "kg".into(),
//!     selling_price_cents: Some(10000), // Rs 100.00 per kg
//!     wholesale_price_cents: None,
//!     cost_price_cents: None,
//!     wholesale_moq: None,
//!     track_expiry: false,
//!     stock: Some(20.0),
//!     batches: vec![],
//! };
//!
//! let report = check_availability(&product, 500.0, "g").unwrap();
//! assert!(report.available);
//!
//! let result = allocate_by_quantity(&product, 500.0, "g", SaleMode::Retail, None, Utc::now());
//! assert_eq!(result.total_selling_price.cents(), 5000); // Rs 50.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocation;
pub mod error;
pub mod money;
pub mod ordering;
pub mod pricing;
pub mod stock;
pub mod types;
pub mod units;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kirana_core::Money` instead of
// `use kirana_core::money::Money`

pub use allocation::{allocate_by_amount, allocate_by_quantity, AllocationResult, BatchDraw};
pub use error::{CoreError, CoreResult, ValidationError, ValidationResult};
pub use money::Money;
pub use ordering::order_batches;
pub use pricing::{effective_price, effective_wholesale_moq};
pub use stock::{check_availability, require_available, total_stock, Availability};
pub use types::{Batch, Product, SaleMode};
pub use units::{allowed_display_units, from_base_unit, to_base_unit, Unit, UnitClass};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Batches expiring within this many days are liquidation candidates: the
/// wholesale gate opens for them regardless of MOQ.
pub const NEAR_EXPIRY_WINDOW_DAYS: i64 = 30;

/// MOQ applied when a product doesn't declare one. One unit means any
/// wholesale sale qualifies unless the product raises the bar.
pub const DEFAULT_WHOLESALE_MOQ: f64 = 1.0;

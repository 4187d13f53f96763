//! # Price Resolver
//!
//! Ordered-fallback price resolution for products and batches.
//!
//! ## The Fallback Chains
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every price is resolved through a NAMED chain: the first field that   │
//! │  is present wins, and the terminal default is always zero (a zero      │
//! │  price is a data-quality warning downstream, never an error here).     │
//! │                                                                         │
//! │  retail batch price:      batch.selling → product.selling → 0          │
//! │  wholesale (gate OPEN):   batch.wholesale → product.wholesale          │
//! │                           → batch.selling → product.selling → 0        │
//! │  wholesale (gate CLOSED): product.wholesale → batch.selling            │
//! │                           → product.selling → 0                        │
//! │  cost:                    batch.cost → product.cost → 0                │
//! │                                                                         │
//! │  The GATE: a wholesale sale gets the batch's own wholesale price only  │
//! │  when the sale quantity meets the product MOQ, or when the batch is    │
//! │  within the near-expiry window. Below MOQ on fresh stock the batch     │
//! │  override is deliberately withheld.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The chains are first-`Some`, not first-positive: an explicit zero in a
//! batch field is honored rather than skipped.

use chrono::{DateTime, Duration, Utc};

use crate::money::Money;
use crate::ordering::order_batches;
use crate::types::{Batch, Product, SaleMode};
use crate::{DEFAULT_WHOLESALE_MOQ, NEAR_EXPIRY_WINDOW_DAYS};

// =============================================================================
// Chain Resolution Helper
// =============================================================================

/// Resolves an ordered fallback chain: the first present value wins,
/// otherwise zero.
#[inline]
fn resolve(chain: &[Option<Money>]) -> Money {
    chain
        .iter()
        .find_map(|price| *price)
        .unwrap_or_else(Money::zero)
}

// =============================================================================
// Named Fallback Chains
// =============================================================================

/// Retail per-batch price: `batch.selling → product.selling → 0`.
pub fn retail_batch_price(batch: &Batch, product: &Product) -> Money {
    resolve(&[batch.selling_price(), product.selling_price()])
}

/// Wholesale per-batch price with the gate OPEN (MOQ met or near expiry):
/// `batch.wholesale → product.wholesale → batch.selling → product.selling → 0`.
pub fn wholesale_batch_price(batch: &Batch, product: &Product) -> Money {
    resolve(&[
        batch.wholesale_price(),
        product.wholesale_price(),
        batch.selling_price(),
        product.selling_price(),
    ])
}

/// Wholesale per-batch price with the gate CLOSED (below MOQ, fresh stock):
/// `product.wholesale → batch.selling → product.selling → 0`.
///
/// The batch-level wholesale override is withheld here; that is the whole
/// point of the gate.
pub fn wholesale_floor_price(batch: &Batch, product: &Product) -> Money {
    resolve(&[
        product.wholesale_price(),
        batch.selling_price(),
        product.selling_price(),
    ])
}

/// Per-batch cost price: `batch.cost → product.cost → 0`.
pub fn batch_cost_price(batch: &Batch, product: &Product) -> Money {
    resolve(&[batch.cost_price(), product.cost_price()])
}

/// Product-level selling price used when no batch applies (no batch data,
/// or quantity drawn beyond all tracked batches).
pub fn default_selling_price(product: &Product, mode: SaleMode) -> Money {
    match mode {
        SaleMode::Wholesale => resolve(&[product.wholesale_price()]),
        SaleMode::Retail => resolve(&[product.selling_price(), product.cost_price()]),
    }
}

/// Product-level cost price used when no batch applies.
pub fn default_cost_price(product: &Product) -> Money {
    resolve(&[product.cost_price()])
}

// =============================================================================
// Near-Expiry Window
// =============================================================================

/// Whether a batch falls inside the near-expiry liquidation window.
///
/// A batch with no expiry date is never near expiry.
pub fn is_near_expiry(batch: &Batch, now: DateTime<Utc>) -> bool {
    match batch.expiry {
        Some(expiry) => expiry <= now + Duration::days(NEAR_EXPIRY_WINDOW_DAYS),
        None => false,
    }
}

// =============================================================================
// Applied Per-Batch Selling Price
// =============================================================================

/// The selling price a specific batch contributes to a sale.
///
/// Retail sales use the retail chain. Wholesale sales open the gate when
/// the total requested quantity (in product units) meets the product MOQ,
/// or independently when the batch itself is near expiry.
pub fn applied_selling_price(
    batch: &Batch,
    product: &Product,
    requested_units: f64,
    mode: SaleMode,
    now: DateTime<Utc>,
) -> Money {
    match mode {
        SaleMode::Retail => retail_batch_price(batch, product),
        SaleMode::Wholesale => {
            let gate_open = requested_units >= effective_wholesale_moq(product)
                || is_near_expiry(batch, now);
            if gate_open {
                wholesale_batch_price(batch, product)
            } else {
                wholesale_floor_price(batch, product)
            }
        }
    }
}

// =============================================================================
// Display Pricing
// =============================================================================

/// The unit price to quote "right now", independent of any transaction.
///
/// ## Resolution
/// 1. Start from the product-level fallback for the mode.
/// 2. If batches exist, prefer those with stock; a sold-out product falls
///    back to the full batch list so it still displays its last known
///    price rather than zero.
/// 3. Order the candidates (FEFO/FIFO per the product's `track_expiry`)
///    and let the first batch's resolvable price override the fallback,
///    if it is positive.
pub fn effective_price(product: &Product, mode: SaleMode) -> Money {
    let fallback = match mode {
        SaleMode::Wholesale => resolve(&[product.wholesale_price(), product.selling_price()]),
        SaleMode::Retail => resolve(&[product.selling_price()]),
    };

    if !product.has_batches() {
        return fallback;
    }

    let in_stock: Vec<&Batch> = product.batches.iter().filter(|b| b.in_stock()).collect();
    let candidates = if in_stock.is_empty() {
        product.batches.iter().collect()
    } else {
        in_stock
    };

    let ordered = order_batches(candidates, product.track_expiry);
    let Some(first) = ordered.first() else {
        return fallback;
    };

    let batch_price = match mode {
        SaleMode::Wholesale => resolve(&[
            first.wholesale_price(),
            product.wholesale_price(),
            first.selling_price(),
        ]),
        SaleMode::Retail => resolve(&[first.selling_price()]),
    };

    if batch_price.is_positive() {
        batch_price
    } else {
        fallback
    }
}

/// The minimum order quantity that opens wholesale batch pricing.
///
/// Product-level only; batches never override MOQ.
pub fn effective_wholesale_moq(product: &Product) -> f64 {
    product.wholesale_moq.unwrap_or(DEFAULT_WHOLESALE_MOQ)
}

// =============================================================================
// Unit Tests
// =============================================================================

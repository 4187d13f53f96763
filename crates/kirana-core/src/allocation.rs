//! # Allocation Engine
//!
//! Consumes ordered batches to satisfy a requested quantity or a requested
//! monetary amount.
//!
//! ## The Two Dual Walks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  allocate_by_quantity: quantity ──► money + per-batch breakdown         │
//! │  allocate_by_amount:   money ──► quantity                               │
//! │                                                                         │
//! │  Shared strategy:                                                       │
//! │    1. normalize the request into product units                          │
//! │    2. derive the consumption order                                      │
//! │         explicit batch id  → that single batch, nothing else            │
//! │         wholesale          → FEFO over in-stock batches                 │
//! │         retail             → product's own FIFO/FEFO over all batches   │
//! │    3. walk the order, drawing stock / value per batch at the price      │
//! │       the resolver picks for that batch                                 │
//! │    4. price any unmet remainder at the product default                  │
//! │       (the engine never blocks a sale; that decision is the caller's)  │
//! │                                                                         │
//! │  Totals are floored to the cent once, at the very end.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine never mutates batch quantities. The returned breakdown is
//! advice; the inventory layer applies it as a transactional decrement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::ordering::order_batches;
use crate::pricing::{
    applied_selling_price, batch_cost_price, default_cost_price, default_selling_price,
    retail_batch_price, wholesale_batch_price,
};
use crate::types::{Batch, Product, SaleMode};
use crate::units::Unit;
use crate::validation::sanitize_quantity;

// =============================================================================
// Result Types
// =============================================================================

/// How much a single batch contributes to a sale.
///
/// The inventory layer consumes these to decrement real stock after the
/// sale is confirmed; the reporting layer snapshots them on order lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BatchDraw {
    /// Batch identifier.
    pub batch_id: String,
    /// Business identifier printed on the invoice line.
    pub batch_number: String,
    /// Quantity drawn from this batch, in product units.
    pub quantity: f64,
    /// The per-unit selling price applied to this draw.
    pub selling_price: Money,
    /// The per-unit cost price applied to this draw.
    pub cost_price: Money,
}

/// The outcome of a quantity-driven allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AllocationResult {
    /// Total selling price, floored to the cent.
    pub total_selling_price: Money,
    /// Total cost price, floored to the cent.
    pub total_cost_price: Money,
    /// Per-batch breakdown in consumption order. Quantity drawn beyond
    /// tracked stock is priced into the totals but has no entry here.
    pub used_batches: Vec<BatchDraw>,
    /// Selling total divided by the requested quantity in product units
    /// (zero when the request is zero).
    pub average_selling_price: Money,
}

impl AllocationResult {
    /// The all-zero result returned for empty requests.
    fn zero() -> Self {
        AllocationResult {
            total_selling_price: Money::zero(),
            total_cost_price: Money::zero(),
            used_batches: Vec::new(),
            average_selling_price: Money::zero(),
        }
    }
}

// =============================================================================
// Unit Normalization
// =============================================================================

/// Converts a requested quantity into product units: requested unit → base
/// units → divided by the product unit's own base factor.
fn to_product_units(quantity: f64, requested_unit: &Unit, product_unit: &Unit) -> f64 {
    requested_unit.to_base(quantity) / product_unit.to_base(1.0)
}

/// Converts a quantity in product units back into the requested unit.
fn from_product_units(quantity: f64, requested_unit: &Unit, product_unit: &Unit) -> f64 {
    requested_unit.from_base(product_unit.to_base(quantity))
}

// =============================================================================
// Consumption Order
// =============================================================================

/// Derives the consumption order for a sale.
///
/// Explicit selection wins outright and ignores stock filtering (the
/// "price against this specific batch" use case). Wholesale forces FEFO
/// over in-stock batches regardless of `track_expiry`. Retail uses the
/// product's own policy over the full list; exhausted batches are skipped
/// naturally during the walk.
fn consumption_order<'a>(
    product: &'a Product,
    mode: SaleMode,
    selected_batch_id: Option<&str>,
) -> Vec<&'a Batch> {
    if let Some(id) = selected_batch_id {
        return product
            .batches
            .iter()
            .filter(|batch| batch.id == id)
            .take(1)
            .collect();
    }

    match mode {
        SaleMode::Wholesale => {
            order_batches(product.batches.iter().filter(|b| b.in_stock()), true)
        }
        SaleMode::Retail => order_batches(&product.batches, product.track_expiry),
    }
}

// =============================================================================
// Quantity → Money
// =============================================================================

/// Prices a requested quantity across the product's batches.
///
/// Never fails and never blocks: zero/negative requests yield the zero
/// result, unknown units convert as count, and quantity beyond all tracked
/// stock is priced at the product default. `now` anchors the near-expiry
/// gate so identical snapshots always produce identical results.
///
/// ## Example
/// ```rust
/// use chrono::Utc;
/// use kirana_core::allocation::allocate_by_quantity;
/// use kirana_core::types::{Product, SaleMode};
///
/// let product = Product {
///     id: "p1".into(),
///     name: "Sugar".into(),
///     unit: "kg".into(),
///     selling_price_cents: Some(10000),
///     wholesale_price_cents: None,
///     cost_price_cents: None,
///     wholesale_moq: None,
///     track_expiry: false,
///     stock: None,
///     batches: vec![],
/// };
///
/// let result = allocate_by_quantity(&product, 500.0, "g", SaleMode::Retail, None, Utc::now());
/// assert_eq!(result.total_selling_price.cents(), 5000); // half a kilo
/// ```
pub fn allocate_by_quantity(
    product: &Product,
    quantity: f64,
    unit: &str,
    mode: SaleMode,
    selected_batch_id: Option<&str>,
    now: DateTime<Utc>,
) -> AllocationResult {
    let quantity = sanitize_quantity(quantity).max(0.0);
    let requested_unit = Unit::parse(unit);
    let product_unit = Unit::parse(&product.unit);
    let requested = to_product_units(quantity, &requested_unit, &product_unit);

    if requested <= 0.0 {
        return AllocationResult::zero();
    }

    let order = consumption_order(product, mode, selected_batch_id);
    let explicit = selected_batch_id.is_some();

    let mut remaining = requested;
    let mut selling_cents = 0.0;
    let mut cost_cents = 0.0;
    let mut used_batches = Vec::new();

    for batch in order {
        if remaining <= 0.0 {
            break;
        }
        if !explicit && !batch.in_stock() {
            continue;
        }

        // An explicitly selected batch absorbs the whole request: the
        // caller chose it deliberately, and stock enforcement is the
        // availability check's job.
        let draw = if explicit {
            remaining
        } else {
            remaining.min(batch.quantity)
        };

        let selling = applied_selling_price(batch, product, requested, mode, now);
        let cost = batch_cost_price(batch, product);

        selling_cents += selling.times(draw);
        cost_cents += cost.times(draw);
        used_batches.push(BatchDraw {
            batch_id: batch.id.clone(),
            batch_number: batch.batch_number.clone(),
            quantity: draw,
            selling_price: selling,
            cost_price: cost,
        });
        remaining -= draw;
    }

    // Unmet remainder: overselling beyond tracked stock, or a product with
    // no batch data at all. Priced at product defaults, no batch record.
    if remaining > 0.0 {
        selling_cents += default_selling_price(product, mode).times(remaining);
        cost_cents += default_cost_price(product).times(remaining);
    }

    let total_selling_price = Money::from_fractional_cents(selling_cents);
    let total_cost_price = Money::from_fractional_cents(cost_cents);
    let average_selling_price = if requested > 0.0 {
        Money::from_fractional_cents(total_selling_price.cents() as f64 / requested)
    } else {
        Money::zero()
    };

    AllocationResult {
        total_selling_price,
        total_cost_price,
        used_batches,
        average_selling_price,
    }
}

// =============================================================================
// Money → Quantity
// =============================================================================

/// The inverse walk: how much quantity (in the requested unit) a monetary
/// amount buys.
///
/// Uses the same consumption order as [`allocate_by_quantity`]. The
/// wholesale MOQ gate cannot be evaluated here (the sale quantity is the
/// output, not an input), so amount-driven wholesale resolves the full
/// wholesale chain with the gate treated as open. Batches whose resolved
/// price is not positive are skipped: quantity cannot be derived from a
/// free or invalid price.
pub fn allocate_by_amount(
    product: &Product,
    amount: Money,
    unit: &str,
    mode: SaleMode,
    selected_batch_id: Option<&str>,
    now: DateTime<Utc>,
) -> f64 {
    // `now` keeps the two walks signature-symmetric; the amount-driven
    // price resolution has no expiry gate to consult.
    let _ = now;

    if !amount.is_positive() {
        return 0.0;
    }

    let requested_unit = Unit::parse(unit);
    let product_unit = Unit::parse(&product.unit);

    let order = consumption_order(product, mode, selected_batch_id);
    let explicit = selected_batch_id.is_some();

    let mut remaining_cents = amount.cents() as f64;
    let mut total_units = 0.0;

    for batch in order {
        if remaining_cents <= 0.0 {
            break;
        }
        if !explicit && !batch.in_stock() {
            continue;
        }

        let price = match mode {
            SaleMode::Retail => retail_batch_price(batch, product),
            SaleMode::Wholesale => wholesale_batch_price(batch, product),
        };
        if !price.is_positive() {
            continue;
        }

        let batch_value_cents = price.times(batch.quantity);
        let take_cents = if explicit {
            remaining_cents
        } else {
            remaining_cents.min(batch_value_cents)
        };

        total_units += take_cents / price.cents() as f64;
        remaining_cents -= take_cents;
    }

    // Remainder beyond all batch value converts at the product default,
    // when one exists; otherwise the leftover money simply buys nothing.
    if remaining_cents > 0.0 {
        let fallback = default_selling_price(product, mode);
        if fallback.is_positive() {
            total_units += remaining_cents / fallback.cents() as f64;
        }
    }

    from_product_units(total_units, &requested_unit, &product_unit)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    fn day(n: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, n, 0, 0, 0).unwrap()
    }

    fn product(unit: &str) -> Product {
        Product {
            id: "p1".to_string(),
            name: "Basmati Rice".to_string(),
            unit: unit.to_string(),
            selling_price_cents: None,
            wholesale_price_cents: None,
            cost_price_cents: None,
            wholesale_moq: None,
            track_expiry: false,
            stock: None,
            batches: vec![],
        }
    }

    fn batch(id: &str, quantity: f64) -> Batch {
        Batch {
            id: id.to_string(),
            batch_number: format!("BN-{}", id),
            quantity,
            expiry: None,
            created_at: None,
            cost_price_cents: None,
            selling_price_cents: None,
            wholesale_price_cents: None,
        }
    }

    // -------------------------------------------------------------------------
    // allocate_by_quantity
    // -------------------------------------------------------------------------

    #[test]
    fn test_zero_and_negative_requests_yield_zero_result() {
        let mut p = product("kg");
        p.selling_price_cents = Some(10000);

        for qty in [0.0, -3.0, f64::NAN] {
            let result = allocate_by_quantity(&p, qty, "kg", SaleMode::Retail, None, now());
            assert!(result.total_selling_price.is_zero());
            assert!(result.total_cost_price.is_zero());
            assert!(result.used_batches.is_empty());
            assert!(result.average_selling_price.is_zero());
        }
    }

    #[test]
    fn test_no_batches_uses_product_defaults() {
        let mut p = product("kg");
        p.selling_price_cents = Some(10000); // Rs 100.00 / kg
        p.cost_price_cents = Some(7000);

        let result = allocate_by_quantity(&p, 2.5, "kg", SaleMode::Retail, None, now());
        assert_eq!(result.total_selling_price.cents(), 25000);
        assert_eq!(result.total_cost_price.cents(), 17500);
        assert!(result.used_batches.is_empty());
        assert_eq!(result.average_selling_price.cents(), 10000);
    }

    #[test]
    fn test_requested_unit_converts_into_product_units() {
        let mut p = product("kg");
        p.selling_price_cents = Some(20000); // Rs 200.00 / kg

        // 500 g of a kg-stocked product is half a unit
        let result = allocate_by_quantity(&p, 500.0, "g", SaleMode::Retail, None, now());
        assert_eq!(result.total_selling_price.cents(), 10000);

        // and a g-stocked product requested in kg scales up
        let mut p = product("g");
        p.selling_price_cents = Some(20); // Rs 0.20 / g
        let result = allocate_by_quantity(&p, 2.0, "kg", SaleMode::Retail, None, now());
        assert_eq!(result.total_selling_price.cents(), 40000);
    }

    #[test]
    fn test_fifo_draw_order_and_conservation() {
        let mut p = product("pcs");
        p.selling_price_cents = Some(1000);

        let mut first = batch("day1", 5.0);
        first.created_at = Some(day(1));
        let mut second = batch("day2", 5.0);
        second.created_at = Some(day(2));
        p.batches = vec![second, first];

        let result = allocate_by_quantity(&p, 7.0, "pcs", SaleMode::Retail, None, now());

        assert_eq!(result.used_batches.len(), 2);
        assert_eq!(result.used_batches[0].batch_id, "day1");
        assert_eq!(result.used_batches[0].quantity, 5.0);
        assert_eq!(result.used_batches[1].batch_id, "day2");
        assert_eq!(result.used_batches[1].quantity, 2.0);

        // Conservation: draws sum to the request (no overflow here)
        let drawn: f64 = result.used_batches.iter().map(|d| d.quantity).sum();
        assert_eq!(drawn, 7.0);
        assert_eq!(result.total_selling_price.cents(), 7000);
    }

    #[test]
    fn test_exhausted_batches_are_skipped_in_retail_walk() {
        let mut p = product("pcs");
        p.selling_price_cents = Some(1000);

        let mut empty = batch("empty", 0.0);
        empty.created_at = Some(day(1));
        let mut stocked = batch("stocked", 10.0);
        stocked.created_at = Some(day(2));
        p.batches = vec![empty, stocked];

        let result = allocate_by_quantity(&p, 4.0, "pcs", SaleMode::Retail, None, now());
        assert_eq!(result.used_batches.len(), 1);
        assert_eq!(result.used_batches[0].batch_id, "stocked");
    }

    #[test]
    fn test_wholesale_forces_fefo_even_without_track_expiry() {
        let mut p = product("pcs");
        p.selling_price_cents = Some(8000);
        p.wholesale_price_cents = Some(6000);
        p.wholesale_moq = Some(100.0);
        p.track_expiry = false;

        let mut later = batch("later", 10.0);
        later.expiry = Some(now() + Duration::days(90));
        later.created_at = Some(day(1));
        let mut sooner = batch("sooner", 10.0);
        sooner.expiry = Some(now() + Duration::days(45));
        sooner.created_at = Some(day(2));
        p.batches = vec![later, sooner];

        // Below MOQ, but ordering is still nearest-expiry-first
        let result = allocate_by_quantity(&p, 5.0, "pcs", SaleMode::Wholesale, None, now());
        assert_eq!(result.used_batches.len(), 1);
        assert_eq!(result.used_batches[0].batch_id, "sooner");
    }

    #[test]
    fn test_wholesale_moq_gate() {
        let mut p = product("pcs");
        p.selling_price_cents = Some(8000);
        p.wholesale_price_cents = Some(6000);
        p.wholesale_moq = Some(10.0);

        let mut b = batch("b1", 50.0);
        b.wholesale_price_cents = Some(5000);
        p.batches = vec![b];

        // Below MOQ, fresh batch: product wholesale (60), not batch (50),
        // not retail (80)
        let below = allocate_by_quantity(&p, 5.0, "pcs", SaleMode::Wholesale, None, now());
        assert_eq!(below.used_batches[0].selling_price.cents(), 6000);
        assert_eq!(below.total_selling_price.cents(), 30000);

        // MOQ met: batch wholesale applies
        let met = allocate_by_quantity(&p, 15.0, "pcs", SaleMode::Wholesale, None, now());
        assert_eq!(met.used_batches[0].selling_price.cents(), 5000);
        assert_eq!(met.total_selling_price.cents(), 75000);
    }

    #[test]
    fn test_near_expiry_opens_gate_below_moq() {
        let mut p = product("pcs");
        p.selling_price_cents = Some(8000);
        p.wholesale_price_cents = Some(6000);
        p.wholesale_moq = Some(10.0);

        let mut b = batch("b1", 50.0);
        b.wholesale_price_cents = Some(5000);
        b.expiry = Some(now() + Duration::days(10));
        p.batches = vec![b];

        let result = allocate_by_quantity(&p, 5.0, "pcs", SaleMode::Wholesale, None, now());
        assert_eq!(result.used_batches[0].selling_price.cents(), 5000);
    }

    #[test]
    fn test_overselling_prices_remainder_at_default() {
        let mut p = product("pcs");
        p.selling_price_cents = Some(1000);
        p.cost_price_cents = Some(600);

        let mut b = batch("b1", 5.0);
        b.selling_price_cents = Some(1200);
        b.cost_price_cents = Some(700);
        p.batches = vec![b];

        let result = allocate_by_quantity(&p, 8.0, "pcs", SaleMode::Retail, None, now());

        // 5 at the batch price, 3 at the product default, no batch record
        // for the shortfall
        assert_eq!(result.used_batches.len(), 1);
        assert_eq!(result.used_batches[0].quantity, 5.0);
        assert_eq!(result.total_selling_price.cents(), 5 * 1200 + 3 * 1000);
        assert_eq!(result.total_cost_price.cents(), 5 * 700 + 3 * 600);

        // Conservation: drawn + shortfall == requested
        let drawn: f64 = result.used_batches.iter().map(|d| d.quantity).sum();
        assert_eq!(drawn + 3.0, 8.0);
    }

    #[test]
    fn test_explicit_batch_selection_absorbs_whole_request() {
        let mut p = product("pcs");
        p.selling_price_cents = Some(1000);

        let mut wanted = batch("wanted", 2.0);
        wanted.selling_price_cents = Some(1500);
        let other = batch("other", 50.0);
        p.batches = vec![other, wanted];

        // The chosen batch takes the full 6 even though it records only 2
        let result =
            allocate_by_quantity(&p, 6.0, "pcs", SaleMode::Retail, Some("wanted"), now());
        assert_eq!(result.used_batches.len(), 1);
        assert_eq!(result.used_batches[0].batch_id, "wanted");
        assert_eq!(result.used_batches[0].quantity, 6.0);
        assert_eq!(result.total_selling_price.cents(), 9000);
    }

    #[test]
    fn test_explicit_selection_works_for_exhausted_batch() {
        let mut p = product("pcs");
        p.selling_price_cents = Some(1000);

        let mut sold_out = batch("sold_out", 0.0);
        sold_out.selling_price_cents = Some(1300);
        p.batches = vec![sold_out];

        let result =
            allocate_by_quantity(&p, 3.0, "pcs", SaleMode::Retail, Some("sold_out"), now());
        assert_eq!(result.used_batches.len(), 1);
        assert_eq!(result.total_selling_price.cents(), 3900);
    }

    #[test]
    fn test_unknown_selected_batch_falls_through_to_defaults() {
        let mut p = product("pcs");
        p.selling_price_cents = Some(1000);
        p.batches = vec![batch("b1", 50.0)];

        let result =
            allocate_by_quantity(&p, 3.0, "pcs", SaleMode::Retail, Some("missing"), now());
        assert!(result.used_batches.is_empty());
        assert_eq!(result.total_selling_price.cents(), 3000);
    }

    #[test]
    fn test_totals_floor_to_cent() {
        let mut p = product("kg");
        p.batches = {
            let mut b = batch("b1", 10.0);
            b.selling_price_cents = Some(9999); // Rs 99.99 / kg
            vec![b]
        };

        // 0.3 kg × Rs 99.99 = Rs 29.997 → floored to Rs 29.99
        let result = allocate_by_quantity(&p, 0.3, "kg", SaleMode::Retail, None, now());
        assert_eq!(result.total_selling_price.cents(), 2999);
    }

    #[test]
    fn test_average_selling_price() {
        let mut p = product("pcs");
        let mut cheap = batch("cheap", 5.0);
        cheap.selling_price_cents = Some(1000);
        cheap.created_at = Some(day(1));
        let mut dear = batch("dear", 5.0);
        dear.selling_price_cents = Some(2000);
        dear.created_at = Some(day(2));
        p.batches = vec![cheap, dear];

        let result = allocate_by_quantity(&p, 10.0, "pcs", SaleMode::Retail, None, now());
        assert_eq!(result.total_selling_price.cents(), 15000);
        assert_eq!(result.average_selling_price.cents(), 1500);
    }

    #[test]
    fn test_allocation_is_deterministic() {
        let mut p = product("kg");
        p.selling_price_cents = Some(12345);
        p.track_expiry = true;

        let mut a = batch("a", 2.75);
        a.expiry = Some(now() + Duration::days(20));
        a.selling_price_cents = Some(11111);
        let mut b = batch("b", 4.5);
        b.expiry = Some(now() + Duration::days(5));
        b.cost_price_cents = Some(9000);
        p.batches = vec![a, b];

        let first = allocate_by_quantity(&p, 6.0, "kg", SaleMode::Retail, None, now());
        let second = allocate_by_quantity(&p, 6.0, "kg", SaleMode::Retail, None, now());
        assert_eq!(first, second);
    }

    // -------------------------------------------------------------------------
    // allocate_by_amount
    // -------------------------------------------------------------------------

    #[test]
    fn test_amount_zero_or_negative_buys_nothing() {
        let mut p = product("kg");
        p.selling_price_cents = Some(10000);

        assert_eq!(
            allocate_by_amount(&p, Money::zero(), "kg", SaleMode::Retail, None, now()),
            0.0
        );
        assert_eq!(
            allocate_by_amount(&p, Money::from_cents(-500), "kg", SaleMode::Retail, None, now()),
            0.0
        );
    }

    #[test]
    fn test_amount_walks_batches_in_order() {
        let mut p = product("pcs");
        let mut cheap = batch("cheap", 4.0);
        cheap.selling_price_cents = Some(1000);
        cheap.created_at = Some(day(1));
        let mut dear = batch("dear", 10.0);
        dear.selling_price_cents = Some(2000);
        dear.created_at = Some(day(2));
        p.batches = vec![dear, cheap];

        // Rs 60: 4 pcs drain the cheap batch (Rs 40), Rs 20 buys 1 more
        let quantity =
            allocate_by_amount(&p, Money::from_cents(6000), "pcs", SaleMode::Retail, None, now());
        assert!((quantity - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_amount_skips_unpriceable_batches() {
        let mut p = product("pcs");
        let free = batch("free", 10.0); // no resolvable price anywhere
        let mut priced = batch("priced", 10.0);
        priced.selling_price_cents = Some(500);
        p.batches = vec![free, priced];

        let quantity =
            allocate_by_amount(&p, Money::from_cents(2500), "pcs", SaleMode::Retail, None, now());
        assert!((quantity - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_amount_remainder_converts_at_default_price() {
        let mut p = product("pcs");
        p.selling_price_cents = Some(1000);
        let mut b = batch("b1", 2.0);
        b.selling_price_cents = Some(2000);
        p.batches = vec![b];

        // Rs 60: 2 pcs at Rs 20 (Rs 40), leftover Rs 20 at default Rs 10 → 2
        let quantity =
            allocate_by_amount(&p, Money::from_cents(6000), "pcs", SaleMode::Retail, None, now());
        assert!((quantity - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_amount_remainder_with_no_default_buys_nothing_extra() {
        let mut p = product("pcs");
        let mut b = batch("b1", 2.0);
        b.selling_price_cents = Some(2000);
        p.batches = vec![b];

        let quantity =
            allocate_by_amount(&p, Money::from_cents(6000), "pcs", SaleMode::Retail, None, now());
        assert!((quantity - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_amount_result_in_requested_unit() {
        let mut p = product("kg");
        p.selling_price_cents = Some(20000); // Rs 200 / kg
        let mut b = batch("b1", 10.0);
        b.selling_price_cents = Some(20000);
        p.batches = vec![b];

        // Rs 100 buys half a kg = 500 g
        let grams =
            allocate_by_amount(&p, Money::from_cents(10000), "g", SaleMode::Retail, None, now());
        assert!((grams - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_amount_wholesale_uses_open_gate_chain() {
        let mut p = product("pcs");
        p.selling_price_cents = Some(8000);
        p.wholesale_price_cents = Some(6000);
        p.wholesale_moq = Some(1000.0); // MOQ unreachable by this amount

        let mut b = batch("b1", 100.0);
        b.wholesale_price_cents = Some(5000);
        p.batches = vec![b];

        // Amount-driven wholesale cannot know the final quantity, so the
        // batch wholesale price applies as-is
        let quantity =
            allocate_by_amount(&p, Money::from_cents(25000), "pcs", SaleMode::Wholesale, None, now());
        assert!((quantity - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_quantity_amount_round_trip() {
        let mut p = product("kg");
        let mut b = batch("b1", 100.0);
        b.selling_price_cents = Some(5000); // Rs 50 / kg
        p.batches = vec![b];

        let q = 4.0;
        let priced = allocate_by_quantity(&p, q, "kg", SaleMode::Retail, None, now());
        assert_eq!(priced.total_selling_price.cents(), 20000);

        let bought =
            allocate_by_amount(&p, priced.total_selling_price, "kg", SaleMode::Retail, None, now());
        assert!((bought - q).abs() < 1e-9);
    }
}

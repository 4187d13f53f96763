//! # Batch Ordering
//!
//! Deterministic consumption order for a product's batches.
//!
//! ## The Two Policies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FIFO (track_expiry = false)                                            │
//! │    sort by created_at ascending; missing created_at sorts FIRST         │
//! │    (an undated batch is assumed to be the oldest on the shelf)          │
//! │                                                                         │
//! │  FEFO (track_expiry = true)                                             │
//! │    sort by expiry ascending; missing expiry sorts LAST                  │
//! │    ties broken by created_at ascending, missing created_at first        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The same order drives both display pricing and consumption. Wholesale
//! consumption additionally forces FEFO regardless of `track_expiry` (the
//! allocation module passes `track_expiry = true` there): bulk liquidation
//! always clears soon-to-expire stock first.
//!
//! The sort is stable and never mutates the input collection, so repeated
//! calls over the same snapshot give identical orders.

use crate::types::Batch;

// =============================================================================
// Sort Keys
// =============================================================================

/// Expiry key in epoch milliseconds; a batch with no expiry sorts last.
#[inline]
fn expiry_key(batch: &Batch) -> i64 {
    batch
        .expiry
        .map(|date| date.timestamp_millis())
        .unwrap_or(i64::MAX)
}

/// Creation key in epoch milliseconds; a batch with no creation date sorts
/// first (treated as epoch 0).
#[inline]
fn created_key(batch: &Batch) -> i64 {
    batch
        .created_at
        .map(|date| date.timestamp_millis())
        .unwrap_or(0)
}

// =============================================================================
// Ordering
// =============================================================================

/// Orders batches for consumption: FEFO when `track_expiry`, FIFO otherwise.
///
/// Accepts any iterable of batch references so callers can pre-filter
/// (e.g. to in-stock batches) without collecting twice.
///
/// ## Example
/// ```rust
/// use kirana_core::ordering::order_batches;
/// use kirana_core::types::Batch;
///
/// let batches: Vec<Batch> = vec![];
/// let ordered = order_batches(&batches, false);
/// assert!(ordered.is_empty());
/// ```
pub fn order_batches<'a, I>(batches: I, track_expiry: bool) -> Vec<&'a Batch>
where
    I: IntoIterator<Item = &'a Batch>,
{
    let mut ordered: Vec<&Batch> = batches.into_iter().collect();

    if track_expiry {
        ordered.sort_by_key(|batch| (expiry_key(batch), created_key(batch)));
    } else {
        ordered.sort_by_key(|batch| created_key(batch));
    }

    ordered
}

// =============================================================================
// Unit Tests
// =============================================================================

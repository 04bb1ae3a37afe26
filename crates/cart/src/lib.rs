//! Cart domain module.
//!
//! Reconciliation (the join of backend cart lines against the catalog) and
//! the pricing aggregates derived from it, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod cart;

pub use cart::{is_present, reconcile, total_item_count, total_value, CartItem, CartLine};

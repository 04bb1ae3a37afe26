//! Catalog domain module.
//!
//! This crate contains the product model and the in-memory catalog the views
//! query, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{Product, MAX_RATING};

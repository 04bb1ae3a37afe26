//! `shopfront-core` — shared client-domain primitives.
//!
//! This crate contains **pure domain** building blocks (no IO, no rendering
//! concerns): the error model and the strongly-typed identifiers the rest of
//! the workspace shares.

pub mod error;
pub mod id;

pub use error::{StoreError, StoreResult};
pub use id::{AddressId, ProductId};

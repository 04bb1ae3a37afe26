//! Address-book domain module.
//!
//! Mirrors the backend's address list plus the currently selected delivery
//! address, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod address;

pub use address::{Address, AddressBook};

//! Search support module.
//!
//! The only timing-sensitive behavior in the client: coalescing search-box
//! keystrokes so at most one search fires per pause in typing.

pub mod debounce;

pub use debounce::{Debouncer, SEARCH_DEBOUNCE};

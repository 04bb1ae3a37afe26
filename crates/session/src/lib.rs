//! Session domain module.
//!
//! An explicit session-context value (token, username, wallet balance) with a
//! defined init/teardown lifecycle, mirrored into whatever key-value storage
//! the platform provides. Replaces ambient global storage access with a
//! capability the caller passes in.

pub mod session;
pub mod store;

pub use session::{login, logout, SessionContext};
pub use store::{MemoryStore, SessionStore};

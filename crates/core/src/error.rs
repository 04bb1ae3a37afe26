//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the client domain layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Client-domain error.
///
/// Keep this focused on deterministic failures of the data the backend hands
/// us (validation, dangling references). Network/auth failures belong to the
/// surrounding view layer and never reach this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A value failed validation (e.g. malformed numeric input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. blank).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A cart line references a product absent from the catalog.
    #[error("cart line references unknown product: {0}")]
    DanglingReference(ProductId),

    /// A requested record was not found (domain-level).
    #[error("not found")]
    NotFound,
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn dangling(product_id: ProductId) -> Self {
        Self::DanglingReference(product_id)
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

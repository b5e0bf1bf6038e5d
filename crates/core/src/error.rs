//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (unresolvable
/// references, validation). Infrastructure concerns belong elsewhere.
///
/// Every operation resolves its inputs before touching state, so any of these
/// errors implies zero side effects on the snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. zero quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// No warehouse matches the given id or name.
    #[error("unknown warehouse: {0}")]
    UnknownWarehouse(String),

    /// No variant carries the given SKU.
    #[error("unknown sku: {0}")]
    UnknownSku(String),

    /// An identifier was invalid (e.g. empty code).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_warehouse(input: impl Into<String>) -> Self {
        Self::UnknownWarehouse(input.into())
    }

    pub fn unknown_sku(input: impl Into<String>) -> Self {
        Self::UnknownSku(input.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

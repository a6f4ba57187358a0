//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, lookups). Persistence failures belong to the infra layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant would be violated by the operation.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A requested item or user does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// An item name or username is already taken.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// A purchase asked for more units than are on hand.
    #[error("not enough stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    /// Username/password did not match any user.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Checkout was requested on an empty cart.
    #[error("cart is empty; nothing to checkout")]
    EmptyCart,

    /// The acting session lacks the permission for the operation.
    #[error("unauthorized")]
    Unauthorized,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn duplicate(key: impl Into<String>) -> Self {
        Self::DuplicateKey(key.into())
    }
}

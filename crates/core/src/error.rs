//! Domain error model.

use thiserror::Error;

use crate::id::AccountId;

/// Result type used across the domain layer.
pub type BankResult<T> = Result<T, BankError>;

/// Domain-level error.
///
/// Every variant is recoverable: callers report it and carry on with the next
/// request. Nothing in the domain layer terminates the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    /// A withdrawal would overdraw the account or breach its minimum balance.
    #[error("{0}")]
    InsufficientFunds(String),

    /// No account is registered under the identifier.
    #[error("account not found: {0}")]
    AccountNotFound(AccountId),

    /// An amount was rejected (e.g. a non-positive deposit).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The operation only applies to savings accounts.
    #[error("Account {0} is not a savings account")]
    NotSavingsAccount(AccountId),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl BankError {
    pub fn insufficient_funds(msg: impl Into<String>) -> Self {
        Self::InsufficientFunds(msg.into())
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(id: AccountId) -> Self {
        Self::AccountNotFound(id)
    }
}

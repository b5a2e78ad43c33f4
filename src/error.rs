//! Custom error types for Bankist
//!
//! Two layers of failure exist: `BankError` for infrastructure faults
//! (configuration, seed files) and `Rejection` for teller operations that
//! decline to run. A rejected operation never leaves a partial mutation
//! behind.

use thiserror::Error;

/// The main error type for Bankist infrastructure operations
#[derive(Error, Debug)]
pub enum BankError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Two seeded accounts derive the same username
    #[error("Duplicate username '{username}' in account list")]
    DuplicateUsername { username: String },
}

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Bankist infrastructure operations
pub type BankResult<T> = Result<T, BankError>;

/// Why a teller operation declined to run
///
/// A rejected operation is a no-op on every ledger. The variants make each
/// cause distinguishable in tests and status messages.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No session is active
    #[error("No active session")]
    NotLoggedIn,

    /// Username or pin did not match (deliberately not saying which)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Transfer recipient does not exist
    #[error("Unknown recipient")]
    UnknownRecipient,

    /// Transfer recipient is the sender
    #[error("Cannot transfer to your own account")]
    SelfTransfer,

    /// Transfer amount exceeds the sender's balance
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Amount failed to parse or is not strictly positive
    #[error("Amount must be a positive number")]
    NonPositiveAmount,

    /// No single past deposit covers the requested loan at 10%
    #[error("Loan not covered by any deposit")]
    LoanNotCovered,

    /// Close request names an account other than the logged-in one
    #[error("Account does not match the active session")]
    AccountMismatch,
}

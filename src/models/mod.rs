//! Core data models
//!
//! The `Money` amount type and the `Account` model with its ledger.

pub mod account;
pub mod money;

pub use account::{Account, LedgerEntry};
pub use money::{Money, MoneyParseError};

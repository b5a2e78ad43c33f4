//! Bankist - a terminal banking session simulator
//!
//! Models a minimal personal-banking session: log into one of several
//! in-memory accounts, watch a running ledger of movements, transfer money,
//! request loans, close the account, and get logged out automatically by a
//! sliding-expiration countdown.
//!
//! # Architecture
//!
//! - `config`: settings and path management
//! - `error`: infrastructure errors and operation rejections
//! - `models`: `Money` and the `Account` ledger
//! - `store`: the in-memory account collection
//! - `services`: session lifecycle and the teller operations
//! - `display`: locale-aware amount and date formatting
//! - `tui`: the interactive terminal front-end
//!
//! Nothing is persisted: the account list lives for the process lifetime
//! and every operation is driven by a discrete event (a key press or a
//! one-second tick).

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod tui;

pub use error::{BankError, BankResult, Rejection};
pub use models::{Account, LedgerEntry, Money};
pub use services::{Teller, Welcome};
pub use store::AccountStore;

//! Presentation formatting
//!
//! Pure, side-effect-free rendering of amounts and dates, consumed by the
//! TUI after every state change.

pub mod currency;
pub mod date;

pub use currency::format_currency;
pub use date::{format_login_stamp, format_movement_date};

//! Service layer
//!
//! Business logic on top of the models: session lifecycle and the teller
//! operations the view invokes.

pub mod session;
pub mod teller;

pub use session::{Session, SessionTimer};
pub use teller::{PostedLoan, Teller, TickOutcome, Welcome};

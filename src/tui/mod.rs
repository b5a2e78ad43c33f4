//! Terminal User Interface
//!
//! The external view/controller over the teller: a login screen and a
//! dashboard with the movement list, summary, operation forms and the
//! logout countdown. All state lives in the teller; the TUI only renders
//! it and forwards events.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;

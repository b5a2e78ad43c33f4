//! TUI views

pub mod dashboard;
pub mod login;

use ratatui::Frame;

use super::app::{App, Screen};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Login => login::render(frame, app),
        Screen::Dashboard => dashboard::render(frame, app),
    }
}

//! Login screen
//!
//! A centered two-field form over an otherwise empty screen, with the
//! status line underneath.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the login screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(40, 9, frame.area());

    let block = Block::default()
        .title(" bankist ")
        .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // prompt
            Constraint::Length(1),
            Constraint::Length(1), // user
            Constraint::Length(1), // pin
            Constraint::Length(1),
            Constraint::Length(1), // status
        ])
        .split(inner);

    let prompt = app
        .status_message
        .clone()
        .unwrap_or_else(|| "Log in to get started".to_string());
    frame.render_widget(
        Paragraph::new(Line::from(prompt)).style(Style::default().fg(Color::Gray)),
        rows[0],
    );

    frame.render_widget(&app.login_user, rows[2]);
    frame.render_widget(&app.login_pin, rows[3]);

    frame.render_widget(
        Paragraph::new("Tab: switch field   Enter: log in   Esc: quit")
            .style(Style::default().fg(Color::DarkGray)),
        rows[5],
    );
}

/// Center a fixed-size rect within `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

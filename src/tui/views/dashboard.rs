//! Dashboard view
//!
//! Header with the greeting and the logout countdown, the movement list
//! (newest first) beside the operation forms, and a summary line with
//! balance, inflow, outflow and interest.

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::display::{format_currency, format_movement_date};
use crate::tui::app::App;

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &App) {
    let Some(account) = app.teller.current_account() else {
        return;
    };
    let locale = account.locale.clone();
    let currency = account.currency.clone();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(8),    // movements + forms
            Constraint::Length(1), // summary
            Constraint::Length(1), // status
        ])
        .split(frame.area());

    render_header(frame, app, vertical[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(36)])
        .split(vertical[1]);

    render_movements(frame, app, columns[0], &locale, &currency);
    render_forms(frame, app, columns[1]);
    render_summary(frame, app, vertical[2], &locale, &currency);

    if let Some(ref message) = app.status_message {
        frame.render_widget(
            Paragraph::new(message.as_str()).style(Style::default().fg(Color::Yellow)),
            vertical[3],
        );
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let welcome = app.welcome_line.as_deref().unwrap_or_default();
    let timer = app
        .teller
        .remaining_session_time()
        .unwrap_or_else(|| "00:00".to_string());
    let processing = if app.teller.has_pending_loans() {
        "  processing loan..."
    } else {
        ""
    };

    let right = format!("{}Logout in {}", processing, timer);
    let padding = (area.width as usize)
        .saturating_sub(welcome.len() + right.len())
        .max(1);

    let line = Line::from(vec![
        Span::styled(welcome, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(padding)),
        Span::styled(right, Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_movements(frame: &mut Frame, app: &App, area: Rect, locale: &str, currency: &str) {
    let now = Utc::now();
    let rows = app.teller.ledger_rows();

    // Newest at the top, numbering by displayed order
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            let kind_color = if entry.amount.is_positive() {
                Color::Green
            } else {
                Color::Red
            };
            let line = Line::from(vec![
                Span::styled(
                    format!("{:>2} {:10}", i + 1, entry.kind()),
                    Style::default().fg(kind_color),
                ),
                Span::styled(
                    format!("  {:12}", format_movement_date(entry.date, now, locale)),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("  {:>14}", format_currency(entry.amount, locale, currency)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let sorted = app
        .teller
        .current_session()
        .map(|s| s.sorted)
        .unwrap_or(false);
    let title = if sorted {
        " Movements (sorted) "
    } else {
        " Movements "
    };

    frame.render_widget(
        List::new(items).block(Block::default().title(title).borders(Borders::ALL)),
        area,
    );
}

fn render_forms(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // transfer
            Constraint::Length(3), // loan
            Constraint::Length(4), // close
            Constraint::Min(0),
        ])
        .split(area);

    let transfer = Block::default().title(" Transfer money ").borders(Borders::ALL);
    let transfer_inner = transfer.inner(rows[0]);
    frame.render_widget(transfer, rows[0]);
    let transfer_fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(transfer_inner);
    frame.render_widget(&app.transfer_to, transfer_fields[0]);
    frame.render_widget(&app.transfer_amount, transfer_fields[1]);

    let loan = Block::default().title(" Request loan ").borders(Borders::ALL);
    let loan_inner = loan.inner(rows[1]);
    frame.render_widget(loan, rows[1]);
    frame.render_widget(&app.loan_amount, loan_inner);

    let close = Block::default().title(" Close account ").borders(Borders::ALL);
    let close_inner = close.inner(rows[2]);
    frame.render_widget(close, rows[2]);
    let close_fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(close_inner);
    frame.render_widget(&app.close_user, close_fields[0]);
    frame.render_widget(&app.close_pin, close_fields[1]);

    frame.render_widget(
        Paragraph::new("^S sort  ^L logout  ^Q quit")
            .style(Style::default().fg(Color::DarkGray)),
        rows[3],
    );
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect, locale: &str, currency: &str) {
    let Some(account) = app.teller.current_account() else {
        return;
    };

    let line = Line::from(vec![
        Span::styled("Balance: ", Style::default().fg(Color::White)),
        Span::styled(
            format_currency(account.balance(), locale, currency),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   In: "),
        Span::styled(
            format_currency(account.total_in(), locale, currency),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   Out: "),
        Span::styled(
            format_currency(account.total_out(), locale, currency),
            Style::default().fg(Color::Red),
        ),
        Span::raw("   Interest: "),
        Span::styled(
            format_currency(account.total_interest(), locale, currency),
            Style::default().fg(Color::Green),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

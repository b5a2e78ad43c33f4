//! Key event handling
//!
//! Maps terminal keys onto app actions. Tab cycles form fields within the
//! current screen, Enter submits the form the focused field belongs to,
//! and a few control chords cover the non-form actions (sort, logout,
//! quit).

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Field, Screen};
use super::event::Event;

/// Handle a single event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Tick => app.on_tick(),
        Event::Resize(_, _) => {}
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Control chords work from any field
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => {
                app.should_quit = true;
            }
            KeyCode::Char('s') => {
                if let Ok(sorted) = app.teller.toggle_sort() {
                    app.status_message =
                        Some(if sorted { "Sorted by amount" } else { "Original order" }.to_string());
                }
            }
            KeyCode::Char('l') => {
                if app.screen == Screen::Dashboard {
                    app.logout();
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Tab => app.focus(app.focused.next()),
        KeyCode::BackTab => app.focus(app.focused.prev()),
        KeyCode::Enter => submit_focused_form(app),
        KeyCode::Esc => match app.screen {
            Screen::Login => app.should_quit = true,
            Screen::Dashboard => app.logout(),
        },
        KeyCode::Backspace => app.focused_input().backspace(),
        KeyCode::Left => app.focused_input().move_left(),
        KeyCode::Right => app.focused_input().move_right(),
        KeyCode::Char(c) => app.focused_input().insert(c),
        _ => {}
    }
}

/// Submit whichever form owns the focused field
fn submit_focused_form(app: &mut App) {
    match app.focused {
        Field::LoginUser | Field::LoginPin => app.submit_login(),
        Field::TransferTo | Field::TransferAmount => app.submit_transfer(),
        Field::LoanAmount => app.submit_loan(),
        Field::CloseUser | Field::ClosePin => app.submit_close(),
    }
}

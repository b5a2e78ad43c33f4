//! Text input widget
//!
//! A single-line input field with cursor support and optional masking for
//! pin entry.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position (byte offset; input is ASCII)
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
    /// Render content as bullets (pin fields)
    pub masked: bool,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Mask the content when rendering
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Insert a character at the cursor
    ///
    /// Only printable ASCII is accepted; usernames, pins and amounts never
    /// need more, and one-byte characters keep the cursor arithmetic exact.
    pub fn insert(&mut self, c: char) {
        if !c.is_ascii() || c.is_ascii_control() {
            return;
        }
        self.content.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor += 1;
        }
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.len() + 2
        };

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(&self.label, Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width as u16);
        }

        let display_text = if self.content.is_empty() && !self.focused {
            self.placeholder.clone()
        } else if self.masked {
            "•".repeat(self.content.len())
        } else {
            self.content.clone()
        };

        let text_style = if self.content.is_empty() && !self.focused {
            Style::default().fg(Color::DarkGray)
        } else if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };

        let input_x = area.x + label_width as u16;
        let input_width = area.width.saturating_sub(label_width as u16);
        buf.set_line(
            input_x,
            area.y,
            &Line::from(Span::styled(display_text, text_style)),
            input_width,
        );

        if self.focused {
            let cursor_x = input_x + self.cursor as u16;
            if cursor_x < area.x + area.width {
                buf[(cursor_x, area.y)].set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        input.insert('j');
        input.insert('s');
        assert_eq!(input.value(), "js");

        input.backspace();
        assert_eq!(input.value(), "j");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_cursor_movement() {
        let mut input = TextInput::new();
        input.insert('1');
        input.insert('2');
        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "1x2");

        input.move_right();
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_non_ascii_input_is_ignored() {
        let mut input = TextInput::new();
        input.insert('é');
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);

        // Backspace after a rejected character must not panic or remove
        input.insert('a');
        input.insert('€');
        input.backspace();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_control_chars_are_ignored() {
        let mut input = TextInput::new();
        input.insert('\t');
        input.insert('\n');
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new();
        input.insert('a');
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }
}

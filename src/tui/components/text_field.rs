//! # TextField Component
//!
//! Single-line labelled input used by both forms.
//!
//! `TextField` only owns the cursor. The text itself belongs to the form
//! (a `FriendDraft` field, or the split form's raw amount strings), so every
//! method takes the buffer explicitly.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::event::TuiEvent;

/// Border plus one column of breathing room.
const BORDER_OFFSET: u16 = 1;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextField {
    /// Cursor position as byte offset in the buffer (0..=buffer.len())
    pos: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor parked after the last character of `buffer`.
    pub fn at_end(buffer: &str) -> Self {
        Self { pos: buffer.len() }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn move_to_end(&mut self, buffer: &str) {
        self.pos = buffer.len();
    }

    /// Apply an editing event to `buffer`. Returns `true` if the text changed.
    pub fn handle_event(&mut self, buffer: &mut String, event: &TuiEvent) -> bool {
        self.pos = self.pos.min(buffer.len());
        match event {
            TuiEvent::InputChar(c) => {
                buffer.insert(self.pos, *c);
                self.pos += c.len_utf8();
                true
            }
            TuiEvent::Paste(text) => {
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                buffer.insert_str(self.pos, &line);
                self.pos += line.len();
                !line.is_empty()
            }
            TuiEvent::Backspace => {
                let prev = buffer[..self.pos].chars().next_back();
                match prev {
                    Some(c) => {
                        self.pos -= c.len_utf8();
                        buffer.remove(self.pos);
                        true
                    }
                    None => false,
                }
            }
            TuiEvent::CursorLeft => {
                if let Some(c) = buffer[..self.pos].chars().next_back() {
                    self.pos -= c.len_utf8();
                }
                false
            }
            TuiEvent::CursorRight => {
                if let Some(c) = buffer[self.pos..].chars().next() {
                    self.pos += c.len_utf8();
                }
                false
            }
            _ => false,
        }
    }

    /// Screen position of the cursor inside a field rendered at `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let pos = self.pos.min(buffer.len());
        let col = buffer[..pos].width() as u16;
        let max_col = area.width.saturating_sub(2 * BORDER_OFFSET);
        (area.x + BORDER_OFFSET + col.min(max_col), area.y + BORDER_OFFSET)
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        buffer: &str,
        focused: bool,
    ) {
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
        };
        let field = Paragraph::new(buffer).block(
            Block::bordered()
                .title(label.to_string())
                .border_style(border_style),
        );
        frame.render_widget(field, area);
        if focused {
            frame.set_cursor_position(self.screen_pos(buffer, area));
        }
    }
}

/// A read-only field, used for derived values.
pub fn render_readonly(frame: &mut Frame, area: Rect, label: &str, value: &str) {
    let style = Style::default().fg(Color::DarkGray);
    let field = Paragraph::new(value.to_string())
        .style(style)
        .block(Block::bordered().title(label.to_string()).border_style(style));
    frame.render_widget(field, area);
}

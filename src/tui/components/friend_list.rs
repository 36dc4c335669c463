//! # Friend List Component
//!
//! The roster sidebar. Follows the persistent state + transient wrapper
//! pattern:
//! - `FriendListState` (cursor) lives in `TuiState`
//! - `FriendList` is created each frame from freshly projected rows

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::core::view::{BalanceTone, FriendRow};
use crate::tui::event::TuiEvent;

/// Persistent cursor state for the roster list.
#[derive(Debug, Default)]
pub struct FriendListState {
    pub cursor: usize,
    pub list_state: ListState,
}

/// Events emitted by the friend list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendListEvent {
    /// Select or deselect the row at this index.
    Toggle(usize),
}

impl FriendListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the cursor inside a roster of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> Option<FriendListEvent> {
        if len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.cursor = (self.cursor + 1).min(len - 1);
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                Some(FriendListEvent::Toggle(self.cursor.min(len - 1)))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the roster.
pub struct FriendList<'a> {
    state: &'a mut FriendListState,
    rows: &'a [FriendRow],
    focused: bool,
}

impl<'a> FriendList<'a> {
    pub fn new(state: &'a mut FriendListState, rows: &'a [FriendRow], focused: bool) -> Self {
        Self {
            state,
            rows,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(" Friends ")
            .border_style(border_style);

        if self.rows.is_empty() {
            let empty = Paragraph::new("No friends yet. Press a to add one.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self.rows.iter().map(friend_item).collect();
        let highlight = if self.focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("▌");

        self.state.clamp(self.rows.len());
        self.state.list_state.select(Some(self.state.cursor));
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn tone_style(tone: BalanceTone) -> Style {
    match tone {
        BalanceTone::Owing => Style::default().fg(Color::Red),
        BalanceTone::Owed => Style::default().fg(Color::Green),
        BalanceTone::Even => Style::default().fg(Color::Gray),
    }
}

fn friend_item(row: &FriendRow) -> ListItem<'static> {
    let name_style = if row.selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(row.name.clone(), name_style),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", row.toggle_label()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(Span::styled(row.message.clone(), tone_style(row.tone))),
        Line::from(Span::styled(
            row.image.clone(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        )),
    ])
}

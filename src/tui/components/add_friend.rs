//! # Add-Friend Form
//!
//! Two text fields (name, avatar URL) over a `FriendDraft`. Lives in
//! `TuiState` only while the composer is open, so closing the composer
//! throws the draft away.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Block;

use crate::core::composer::FriendDraft;
use crate::core::friend::NewFriend;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

/// Rows needed to render the form, borders included.
pub const FORM_HEIGHT: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Image,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddFriendEvent {
    Submit(NewFriend),
    Dismiss,
}

pub struct AddFriendForm {
    pub draft: FriendDraft,
    pub focus: DraftField,
    name_field: TextField,
    image_field: TextField,
    /// Whether the form as a whole has keyboard focus (Prop)
    pub focused: bool,
}

impl AddFriendForm {
    pub fn new(placeholder_image: &str) -> Self {
        let draft = FriendDraft::new(placeholder_image);
        let image_field = TextField::at_end(&draft.image);
        Self {
            draft,
            focus: DraftField::Name,
            name_field: TextField::new(),
            image_field,
            focused: true,
        }
    }

    fn switch_field(&mut self) {
        self.focus = match self.focus {
            DraftField::Name => DraftField::Image,
            DraftField::Image => DraftField::Name,
        };
    }
}

impl EventHandler for AddFriendForm {
    type Event = AddFriendEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AddFriendEvent> {
        match event {
            TuiEvent::Escape => Some(AddFriendEvent::Dismiss),
            TuiEvent::Tab | TuiEvent::CursorUp | TuiEvent::CursorDown => {
                self.switch_field();
                None
            }
            TuiEvent::Submit => {
                let candidate = self.draft.submit()?;
                self.name_field = TextField::new();
                self.image_field = TextField::at_end(&self.draft.image);
                self.focus = DraftField::Name;
                Some(AddFriendEvent::Submit(candidate))
            }
            _ => {
                match self.focus {
                    DraftField::Name => self.name_field.handle_event(&mut self.draft.name, event),
                    DraftField::Image => {
                        self.image_field.handle_event(&mut self.draft.image, event)
                    }
                };
                None
            }
        }
    }
}

impl Component for AddFriendForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(" Add friend ")
            .title_bottom(Line::from(" Enter Add  Esc Close ").centered())
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [name_area, image_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).areas(inner);

        self.name_field.render(
            frame,
            name_area,
            "Friend name",
            &self.draft.name,
            self.focused && self.focus == DraftField::Name,
        );
        self.image_field.render(
            frame,
            image_area,
            "Image URL",
            &self.draft.image,
            self.focused && self.focus == DraftField::Image,
        );
    }
}

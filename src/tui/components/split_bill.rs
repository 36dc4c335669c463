//! # Split-Bill Form
//!
//! Shown while a friend is selected. Keeps the raw text of both amount
//! fields next to the parsed `SplitDraft`, so half-typed input ("12.")
//! survives while the draft only ever sees valid numbers.
//!
//! When the draft clamps own expense down to the bill, the own-expense text
//! is rewritten to the exact clamped value, like a controlled input would.
//! Bill edits leave the own-expense text alone.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::friend::{FriendId, format_amount};
use crate::core::split::{Payer, SplitDraft, parse_amount};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::{TextField, render_readonly};
use crate::tui::event::TuiEvent;

/// Rows needed to render the form, borders included.
pub const FORM_HEIGHT: u16 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitField {
    Bill,
    OwnExpense,
    Payer,
}

impl SplitField {
    fn next(self) -> Self {
        match self {
            SplitField::Bill => SplitField::OwnExpense,
            SplitField::OwnExpense => SplitField::Payer,
            SplitField::Payer => SplitField::Bill,
        }
    }

    fn prev(self) -> Self {
        match self {
            SplitField::Bill => SplitField::Payer,
            SplitField::OwnExpense => SplitField::Bill,
            SplitField::Payer => SplitField::OwnExpense,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SplitEvent {
    /// Balance delta for the friend this form was opened for.
    Submit { friend_id: FriendId, delta: f64 },
    Dismiss,
}

pub struct SplitBillForm {
    pub friend_id: FriendId,
    pub friend_name: String,
    pub draft: SplitDraft,
    pub focus: SplitField,
    pub bill_text: String,
    pub own_text: String,
    bill_field: TextField,
    own_field: TextField,
    /// Whether the form as a whole has keyboard focus (Prop)
    pub focused: bool,
}

impl SplitBillForm {
    pub fn new(friend_id: FriendId, friend_name: impl Into<String>) -> Self {
        Self {
            friend_id,
            friend_name: friend_name.into(),
            draft: SplitDraft::new(),
            focus: SplitField::Bill,
            bill_text: String::new(),
            own_text: String::new(),
            bill_field: TextField::new(),
            own_field: TextField::new(),
            focused: true,
        }
    }

    /// Rewrite the own-expense text if the draft clamped it.
    fn sync_own_text(&mut self) {
        if let Some(own) = self.draft.own_expense()
            && parse_amount(&self.own_text) != Some(own)
        {
            self.own_text = own.to_string();
            self.own_field.move_to_end(&self.own_text);
        }
    }

    fn payer_label(&self) -> &str {
        match self.draft.payer {
            Payer::You => "You",
            Payer::Friend => &self.friend_name,
        }
    }
}

impl EventHandler for SplitBillForm {
    type Event = SplitEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SplitEvent> {
        match event {
            TuiEvent::Escape => return Some(SplitEvent::Dismiss),
            TuiEvent::Submit => {
                let delta = self.draft.submit()?;
                return Some(SplitEvent::Submit {
                    friend_id: self.friend_id.clone(),
                    delta,
                });
            }
            TuiEvent::Tab | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                return None;
            }
            TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                return None;
            }
            _ => {}
        }

        match self.focus {
            SplitField::Bill => {
                if self.bill_field.handle_event(&mut self.bill_text, event) {
                    self.draft.set_bill(parse_amount(&self.bill_text));
                }
            }
            SplitField::OwnExpense => {
                if self.own_field.handle_event(&mut self.own_text, event) {
                    self.draft.set_own_expense(parse_amount(&self.own_text));
                    self.sync_own_text();
                }
            }
            SplitField::Payer => {
                if matches!(
                    event,
                    TuiEvent::CursorLeft | TuiEvent::CursorRight | TuiEvent::InputChar(' ')
                ) {
                    self.draft.payer = self.draft.payer.toggle();
                }
            }
        }
        None
    }
}

impl Component for SplitBillForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(format!(" Split a bill with {} ", self.friend_name))
            .title_bottom(Line::from(" Enter Split bill  Esc Close ").centered())
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [bill_area, own_area, friend_area, payer_area] =
            Layout::vertical([Constraint::Length(3); 4]).areas(inner);

        self.bill_field.render(
            frame,
            bill_area,
            "Bill value",
            &self.bill_text,
            self.focused && self.focus == SplitField::Bill,
        );
        self.own_field.render(
            frame,
            own_area,
            "Your expense",
            &self.own_text,
            self.focused && self.focus == SplitField::OwnExpense,
        );

        let friend_expense = self
            .draft
            .friend_expense()
            .map(format_amount)
            .unwrap_or_default();
        render_readonly(
            frame,
            friend_area,
            &format!("{}'s expense", self.friend_name),
            &friend_expense,
        );

        let payer_focused = self.focused && self.focus == SplitField::Payer;
        let payer_style = if payer_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
        };
        let payer = Paragraph::new(Line::from(vec![
            Span::raw("◀ "),
            Span::styled(
                self.payer_label().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ▶"),
        ]))
        .block(
            Block::bordered()
                .title("Who is paying the bill?")
                .border_style(payer_style),
        );
        frame.render_widget(payer, payer_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SplitBillForm {
        SplitBillForm::new(FriendId::new("499476"), "Mike")
    }

    fn type_str(form: &mut SplitBillForm, text: &str) {
        for c in text.chars() {
            form.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_submit_with_you_paying() {
        let mut form = form();
        type_str(&mut form, "100");
        form.handle_event(&TuiEvent::Tab);
        type_str(&mut form, "40");

        assert_eq!(form.draft.friend_expense(), Some(60.0));
        assert_eq!(
            form.handle_event(&TuiEvent::Submit),
            Some(SplitEvent::Submit {
                friend_id: FriendId::new("499476"),
                delta: 60.0
            })
        );
    }

    #[test]
    fn test_submit_with_friend_paying() {
        let mut form = form();
        type_str(&mut form, "100");
        form.handle_event(&TuiEvent::Tab);
        type_str(&mut form, "40");
        form.handle_event(&TuiEvent::Tab);
        form.handle_event(&TuiEvent::CursorRight);

        assert_eq!(form.draft.payer, Payer::Friend);
        assert_eq!(form.payer_label(), "Mike");
        let Some(SplitEvent::Submit { delta, .. }) = form.handle_event(&TuiEvent::Submit) else {
            panic!("expected submit");
        };
        assert_eq!(delta, -40.0);
    }

    #[test]
    fn test_own_expense_text_clamped() {
        let mut form = form();
        type_str(&mut form, "100");
        form.handle_event(&TuiEvent::Tab);
        type_str(&mut form, "150");

        assert_eq!(form.own_text, "100");
        assert_eq!(form.draft.own_expense(), Some(100.0));
    }

    #[test]
    fn test_retyping_bill_keeps_own_expense() {
        let mut form = form();
        type_str(&mut form, "100");
        form.handle_event(&TuiEvent::Tab);
        type_str(&mut form, "40");
        form.handle_event(&TuiEvent::CursorUp);
        form.handle_event(&TuiEvent::Backspace);
        form.handle_event(&TuiEvent::Backspace);
        type_str(&mut form, "50");

        assert_eq!(form.bill_text, "150");
        assert_eq!(form.own_text, "40");
        assert_eq!(form.draft.own_expense(), Some(40.0));
        let Some(SplitEvent::Submit { delta, .. }) = form.handle_event(&TuiEvent::Submit) else {
            panic!("expected submit");
        };
        assert_eq!(delta, 110.0);
    }

    #[test]
    fn test_own_expense_before_bill() {
        let mut form = form();
        form.handle_event(&TuiEvent::Tab);
        type_str(&mut form, "40");
        form.handle_event(&TuiEvent::CursorUp);
        type_str(&mut form, "100");

        assert_eq!(form.own_text, "40");
        assert_eq!(form.draft.own_expense(), Some(40.0));
        assert_eq!(form.draft.friend_expense(), Some(60.0));
    }

    #[test]
    fn test_clamped_text_matches_draft() {
        let mut form = form();
        type_str(&mut form, "10.555");
        form.handle_event(&TuiEvent::Tab);
        type_str(&mut form, "20");

        assert_eq!(form.draft.own_expense(), Some(10.555));
        assert_eq!(parse_amount(&form.own_text), form.draft.own_expense());
    }

    #[test]
    fn test_partial_decimal_is_kept() {
        let mut form = form();
        type_str(&mut form, "100");
        form.handle_event(&TuiEvent::Tab);
        type_str(&mut form, "12.");
        assert_eq!(form.own_text, "12.");
        type_str(&mut form, "5");
        assert_eq!(form.draft.own_expense(), Some(12.5));
    }

    #[test]
    fn test_missing_amounts_block_submit() {
        let mut form = form();
        type_str(&mut form, "100");
        assert_eq!(form.handle_event(&TuiEvent::Submit), None);

        form.handle_event(&TuiEvent::Tab);
        type_str(&mut form, "abc");
        assert_eq!(form.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_field_cycling() {
        let mut form = form();
        form.handle_event(&TuiEvent::CursorUp);
        assert_eq!(form.focus, SplitField::Payer);
        form.handle_event(&TuiEvent::CursorDown);
        assert_eq!(form.focus, SplitField::Bill);
    }
}

//! # TitleBar Component
//!
//! Top status line: app name, roster size, the net balance across all
//! friends, and the key hints for whatever currently has focus.
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.roster.len(), net, "€".into(), hint.into());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Net positive**: `"billsplit | 3 friends | owed 7€ | <hint>"`
//! 2. **Net negative**: `"billsplit | 3 friends | owing 5€ | <hint>"`
//! 3. **Net zero**: `"billsplit | 3 friends | settled | <hint>"`

use crate::core::friend::format_amount;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    pub friend_count: usize,
    /// Sum of all balances (positive = friends owe the user overall)
    pub net_balance: f64,
    pub currency: String,
    /// Key hints for the focused pane
    pub hint: String,
}

impl TitleBar {
    pub fn new(friend_count: usize, net_balance: f64, currency: String, hint: String) -> Self {
        Self {
            friend_count,
            net_balance,
            currency,
            hint,
        }
    }

    fn text(&self) -> String {
        let friends = match self.friend_count {
            1 => "1 friend".to_string(),
            n => format!("{n} friends"),
        };
        let net = if self.net_balance > 0.0 {
            format!("owed {}{}", format_amount(self.net_balance), self.currency)
        } else if self.net_balance < 0.0 {
            format!("owing {}{}", format_amount(-self.net_balance), self.currency)
        } else {
            "settled".to_string()
        };
        if self.hint.is_empty() {
            format!("billsplit | {friends} | {net}")
        } else {
            format!("billsplit | {friends} | {net} | {}", self.hint)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}

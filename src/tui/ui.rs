use crate::core::state::App;
use crate::core::view::roster_view;
use crate::tui::component::Component;
use crate::tui::components::add_friend::FORM_HEIGHT as COMPOSER_HEIGHT;
use crate::tui::components::split_bill::FORM_HEIGHT as SPLIT_FORM_HEIGHT;
use crate::tui::components::{FriendList, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

/// Re-derive the whole screen from the current snapshot.
///
/// ```text
/// ┌ title bar ─────────────────────────────────────────┐
/// │ Friends              │ Split a bill with <friend>  │
/// │  ...                 │  (while a friend is         │
/// │ Add friend form      │   selected)                 │
/// │  (while open)        │                             │
/// │       [ Add friend ] │                             │
/// └──────────────────────┴─────────────────────────────┘
/// ```
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};

    let [title_area, body_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());
    let [sidebar_area, form_area] =
        Layout::horizontal([Percentage(50), Percentage(50)]).areas(body_area);

    let composer_height = if tui.composer.is_some() { COMPOSER_HEIGHT } else { 0 };
    let [list_area, composer_area, button_area] =
        Layout::vertical([Min(3), Length(composer_height), Length(1)]).areas(sidebar_area);

    let net_balance: f64 = app.roster.iter().map(|f| f.balance).sum();
    let mut title_bar = TitleBar::new(
        app.roster.len(),
        net_balance,
        tui.currency.clone(),
        tui.hint().to_string(),
    );
    title_bar.render(frame, title_area);

    let rows = roster_view(app, &tui.currency);
    FriendList::new(&mut tui.friend_list, &rows, tui.focus == Focus::Roster)
        .render(frame, list_area);

    if let Some(form) = tui.composer.as_mut() {
        form.render(frame, composer_area);
    }

    let button_label = if app.composer_open { "[ Close ]" } else { "[ Add friend ]" };
    let button = Paragraph::new(button_label)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(button, button_area);

    if let Some(form) = tui.split_form.as_mut() {
        let [split_area, _] = Layout::vertical([Length(SPLIT_FORM_HEIGHT), Min(0)]).areas(form_area);
        form.render(frame, split_area);
    }
}

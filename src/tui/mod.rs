//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm event → TuiEvent → focused component → Action → update() → App
//!                                                                  │
//!                         TuiState::sync(&App)  ◀──────────────────┘
//! ```
//!
//! `sync` opens and drops the form components so they always mirror the
//! core state: the add-friend form exists only while the composer is open,
//! the split form only while a friend is selected (and is rebuilt when a
//! different friend gets selected).

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    AddFriendEvent, AddFriendForm, FriendListEvent, FriendListState, SplitBillForm, SplitEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Roster,
    Composer,
    Split,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub friend_list: FriendListState,
    /// Present while `app.composer_open`
    pub composer: Option<AddFriendForm>,
    /// Present while a friend is selected
    pub split_form: Option<SplitBillForm>,
    pub focus: Focus,
    pub currency: String,
    pub placeholder_image: String,
}

impl TuiState {
    pub fn new(currency: impl Into<String>, placeholder_image: impl Into<String>) -> Self {
        Self {
            friend_list: FriendListState::new(),
            composer: None,
            split_form: None,
            focus: Focus::Roster,
            currency: currency.into(),
            placeholder_image: placeholder_image.into(),
        }
    }

    /// Open or drop form components so they match `app`.
    pub fn sync(&mut self, app: &App) {
        self.friend_list.clamp(app.roster.len());

        match (app.composer_open, self.composer.is_some()) {
            (true, false) => {
                self.composer = Some(AddFriendForm::new(&self.placeholder_image));
                self.focus = Focus::Composer;
            }
            (false, true) => self.composer = None,
            _ => {}
        }

        match app.selected_friend() {
            Some(friend) => {
                let same_friend = self
                    .split_form
                    .as_ref()
                    .is_some_and(|form| form.friend_id == friend.id);
                if !same_friend {
                    self.split_form = Some(SplitBillForm::new(friend.id.clone(), &friend.name));
                    self.focus = Focus::Split;
                }
            }
            None => self.split_form = None,
        }

        let focus_lost = match self.focus {
            Focus::Roster => false,
            Focus::Composer => self.composer.is_none(),
            Focus::Split => self.split_form.is_none(),
        };
        if focus_lost {
            self.focus = Focus::Roster;
        }

        if let Some(form) = self.composer.as_mut() {
            form.focused = self.focus == Focus::Composer;
        }
        if let Some(form) = self.split_form.as_mut() {
            form.focused = self.focus == Focus::Split;
        }
    }

    /// Move focus from the roster to whichever form is open. The composer
    /// wins when both are; the split form is reached once it closes.
    fn focus_form(&mut self) {
        if self.composer.is_some() {
            self.focus = Focus::Composer;
        } else if self.split_form.is_some() {
            self.focus = Focus::Split;
        }
    }

    pub fn hint(&self) -> &'static str {
        match self.focus {
            Focus::Roster if self.composer.is_some() && self.split_form.is_some() => {
                "↑↓ Move  Enter Select  Tab Add form (close it for split)  q Quit"
            }
            Focus::Roster => "↑↓ Move  Enter Select  a Add friend  Tab Form  q Quit",
            Focus::Composer => "Tab Next field  Enter Add  Esc Close",
            Focus::Split => "Tab Next field  ←→ Payer  Enter Split  Esc Close",
        }
    }
}

/// Route one event to the focused pane and apply the resulting action.
///
/// Returns the next state and whether the app should quit.
pub fn dispatch(app: App, tui: &mut TuiState, event: &TuiEvent) -> (App, bool) {
    let action = match (tui.focus, event) {
        (_, TuiEvent::ForceQuit) => return (app, true),
        (_, TuiEvent::Resize) => return (app, false),
        (Focus::Roster, TuiEvent::Escape | TuiEvent::InputChar('q')) => return (app, true),
        (Focus::Roster, TuiEvent::InputChar('a')) => Some(Action::ToggleComposer),
        (Focus::Roster, TuiEvent::Tab) => {
            tui.focus_form();
            None
        }
        (Focus::Roster, _) => match tui.friend_list.handle_event(event, app.roster.len()) {
            Some(FriendListEvent::Toggle(index)) => app
                .roster
                .get(index)
                .map(|friend| Action::SelectFriend(friend.id.clone())),
            None => None,
        },
        (Focus::Composer, _) => match tui.composer.as_mut().and_then(|f| f.handle_event(event)) {
            Some(AddFriendEvent::Submit(candidate)) => Some(Action::AddFriend(candidate)),
            Some(AddFriendEvent::Dismiss) => Some(Action::ToggleComposer),
            None => None,
        },
        (Focus::Split, _) => match tui.split_form.as_mut().and_then(|f| f.handle_event(event)) {
            Some(SplitEvent::Submit { friend_id, delta }) => {
                Some(Action::ApplySplit { friend_id, delta })
            }
            // Deselecting is a toggle on the current selection
            Some(SplitEvent::Dismiss) => app.selection.clone().map(Action::SelectFriend),
            None => None,
        },
    };

    let app = match action {
        Some(action) => {
            let roster_len = app.roster.len();
            let app = update(app, action);
            if app.roster.len() > roster_len {
                tui.friend_list.cursor = app.roster.len() - 1;
            }
            app
        }
        None => app,
    };
    tui.sync(&app);
    (app, false)
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut app = App::new(config.friends);
    let mut tui = TuiState::new(config.currency, config.placeholder_image);
    tui.sync(&app);
    info!("Starting with {} friends", app.roster.len());

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();

    info!("Exiting with {} friends", app.roster.len());
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        // Nothing animates, so idle polls can be long
        let Some(first_event) = poll_event_timeout(Duration::from_millis(500))? else {
            continue;
        };

        // Process first event + drain ALL pending events before next draw
        let mut pending = vec![first_event];
        while let Some(event) = poll_event_immediate()? {
            pending.push(event);
        }

        for event in pending {
            needs_redraw = true;
            let (next, quit) = dispatch(std::mem::take(app), tui, &event);
            *app = next;
            if quit {
                debug!("Quit requested via {:?}", event);
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn setup() -> (App, TuiState) {
        let app = test_app();
        let mut tui = TuiState::new("€", "https://i.pravatar.cc/48");
        tui.sync(&app);
        (app, tui)
    }

    fn press(app: App, tui: &mut TuiState, events: &[TuiEvent]) -> App {
        events.iter().fold(app, |app, event| {
            let (next, quit) = dispatch(app, tui, event);
            assert!(!quit, "unexpected quit on {:?}", event);
            next
        })
    }

    fn type_events(text: &str) -> Vec<TuiEvent> {
        text.chars().map(TuiEvent::InputChar).collect()
    }

    #[test]
    fn test_select_mike_and_split() {
        let (app, mut tui) = setup();
        let app = press(
            app,
            &mut tui,
            &[TuiEvent::CursorDown, TuiEvent::CursorDown, TuiEvent::Submit],
        );
        assert_eq!(app.selected_friend().unwrap().name, "Mike");
        assert_eq!(tui.focus, Focus::Split);

        let mut events = type_events("100");
        events.push(TuiEvent::Tab);
        events.extend(type_events("40"));
        events.push(TuiEvent::Submit);
        let app = press(app, &mut tui, &events);

        assert_eq!(app.roster[2].balance, 60.0);
        assert!(app.selection.is_none());
        assert!(tui.split_form.is_none());
        assert_eq!(tui.focus, Focus::Roster);
    }

    #[test]
    fn test_add_friend_flow() {
        let (app, mut tui) = setup();
        let app = press(app, &mut tui, &[TuiEvent::InputChar('a')]);
        assert!(app.composer_open);
        assert_eq!(tui.focus, Focus::Composer);

        let mut events = type_events("Ana");
        events.push(TuiEvent::Submit);
        let app = press(app, &mut tui, &events);

        assert_eq!(app.roster.len(), 4);
        assert_eq!(app.roster[3].name, "Ana");
        assert!(!app.composer_open);
        assert!(tui.composer.is_none());
        assert_eq!(tui.friend_list.cursor, 3);
        assert_eq!(tui.focus, Focus::Roster);
    }

    #[test]
    fn test_add_friend_with_empty_name_keeps_composer() {
        let (app, mut tui) = setup();
        let app = press(app, &mut tui, &[TuiEvent::InputChar('a'), TuiEvent::Submit]);
        assert_eq!(app.roster.len(), 3);
        assert!(app.composer_open);
        assert!(tui.composer.is_some());
    }

    #[test]
    fn test_escape_closes_composer_and_discards_draft() {
        let (app, mut tui) = setup();
        let mut events = vec![TuiEvent::InputChar('a')];
        events.extend(type_events("Ana"));
        events.push(TuiEvent::Escape);
        let app = press(app, &mut tui, &events);
        assert!(!app.composer_open);
        assert!(tui.composer.is_none());

        let _app = press(app, &mut tui, &[TuiEvent::InputChar('a')]);
        assert_eq!(tui.composer.as_ref().unwrap().draft.name, "");
    }

    #[test]
    fn test_selecting_closes_composer() {
        let (app, mut tui) = setup();
        let app = press(app, &mut tui, &[TuiEvent::InputChar('a')]);
        assert!(tui.composer.is_some());

        let sofia = app.roster[1].id.clone();
        let app = update(app, Action::SelectFriend(sofia));
        tui.sync(&app);

        assert!(!app.composer_open);
        assert!(tui.composer.is_none());
        assert_eq!(tui.focus, Focus::Split);
        assert_eq!(tui.split_form.as_ref().unwrap().friend_name, "Sofia");
    }

    #[test]
    fn test_opening_composer_keeps_selection() {
        let (app, mut tui) = setup();
        let app = press(app, &mut tui, &[TuiEvent::Submit]);
        assert!(tui.split_form.is_some());

        let app = update(app, Action::ToggleComposer);
        tui.sync(&app);

        assert!(app.selection.is_some());
        assert!(tui.split_form.is_some());
        assert_eq!(tui.focus, Focus::Composer);
        assert!(!tui.split_form.as_ref().unwrap().focused);
    }

    #[test]
    fn test_tab_reaches_split_form_after_composer_closes() {
        let (app, mut tui) = setup();
        let app = press(app, &mut tui, &[TuiEvent::Submit]);
        let app = update(app, Action::ToggleComposer);
        tui.sync(&app);
        tui.focus = Focus::Roster;
        assert!(tui.hint().contains("close it for split"));

        let app = press(app, &mut tui, &[TuiEvent::Tab]);
        assert_eq!(tui.focus, Focus::Composer);

        let _app = press(app, &mut tui, &[TuiEvent::Escape, TuiEvent::Tab]);
        assert!(tui.composer.is_none());
        assert_eq!(tui.focus, Focus::Split);
    }

    #[test]
    fn test_escape_on_split_form_deselects() {
        let (app, mut tui) = setup();
        let app = press(app, &mut tui, &[TuiEvent::Submit, TuiEvent::Escape]);
        assert!(app.selection.is_none());
        assert!(tui.split_form.is_none());
        assert_eq!(tui.focus, Focus::Roster);
    }

    #[test]
    fn test_switching_friend_discards_split_draft() {
        let (app, mut tui) = setup();
        let mut events = vec![TuiEvent::Submit];
        events.extend(type_events("50"));
        let app = press(app, &mut tui, &events);
        assert_eq!(tui.split_form.as_ref().unwrap().bill_text, "50");

        let mike = app.roster[2].id.clone();
        let app = update(app, Action::SelectFriend(mike.clone()));
        tui.sync(&app);
        let form = tui.split_form.as_ref().unwrap();
        assert_eq!(form.friend_id, mike);
        assert_eq!(form.bill_text, "");
    }

    #[test]
    fn test_incomplete_split_is_ignored() {
        let (app, mut tui) = setup();
        let mut events = vec![TuiEvent::Submit];
        events.extend(type_events("100"));
        events.push(TuiEvent::Submit);
        let app = press(app, &mut tui, &events);
        assert_eq!(app.roster[0].balance, 27.0);
        assert!(app.selection.is_some());
    }

    #[test]
    fn test_quit_keys() {
        let (app, mut tui) = setup();
        let (app, quit) = dispatch(app, &mut tui, &TuiEvent::InputChar('q'));
        assert!(quit);
        let (_, quit) = dispatch(app, &mut tui, &TuiEvent::ForceQuit);
        assert!(quit);
    }

    #[test]
    fn test_typing_q_in_form_does_not_quit() {
        let (app, mut tui) = setup();
        let app = press(app, &mut tui, &[TuiEvent::InputChar('a')]);
        let app = press(app, &mut tui, &[TuiEvent::InputChar('q')]);
        assert_eq!(tui.composer.as_ref().unwrap().draft.name, "q");
        assert!(app.composer_open);
    }
}

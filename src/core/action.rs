//! # Actions
//!
//! Everything that can happen to the roster becomes an `Action`.
//! User picks a friend? That's `Action::SelectFriend(id)`.
//! Split form submitted? That's `Action::ApplySplit { friend_id, delta }`.
//!
//! The `update()` function takes the current state and an action,
//! then returns the new state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! This makes everything testable: `assert_eq!(update(state, action), expected)`.
//! And debuggable: log every action, replay the exact session.

use log::debug;

use crate::core::friend::{FriendId, NewFriend};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleComposer,
    AddFriend(NewFriend),
    SelectFriend(FriendId),
    ApplySplit { friend_id: FriendId, delta: f64 },
}

/// Apply one action to a state snapshot and return the next snapshot.
pub fn update(mut app: App, action: Action) -> App {
    debug!("update: {:?}", action);
    match action {
        Action::ToggleComposer => app.toggle_composer(),
        Action::AddFriend(candidate) => {
            app.add_friend(candidate);
        }
        Action::SelectFriend(id) => app.select_friend(&id),
        Action::ApplySplit { friend_id, delta } => app.apply_split(&friend_id, delta),
    }
    app
}

//! # Application State
//!
//! Core business state for billsplit. This module contains domain logic only -
//! no TUI-specific types. Presentation state (cursor, focused field, form
//! drafts) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── roster: Vec<Friend>          // ordered, ids unique
//! ├── selection: Option<FriendId>  // at most one selected friend
//! └── composer_open: bool          // add-friend form visible
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use log::{debug, info, warn};

use crate::core::friend::{Friend, FriendId, NewFriend};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct App {
    pub roster: Vec<Friend>,
    pub selection: Option<FriendId>,
    pub composer_open: bool,
}

impl App {
    /// Build an app around a seed roster. Later duplicates of an id are dropped.
    pub fn new(seed: Vec<Friend>) -> Self {
        let mut roster: Vec<Friend> = Vec::with_capacity(seed.len());
        for friend in seed {
            if roster.iter().any(|f| f.id == friend.id) {
                warn!("Dropping seed friend '{}': duplicate id {}", friend.name, friend.id);
                continue;
            }
            roster.push(friend);
        }
        Self {
            roster,
            selection: None,
            composer_open: false,
        }
    }

    pub fn friend(&self, id: &FriendId) -> Option<&Friend> {
        self.roster.iter().find(|f| &f.id == id)
    }

    /// The selected friend, resolved against the roster.
    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selection.as_ref().and_then(|id| self.friend(id))
    }

    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selection.as_ref() == Some(id)
    }

    pub fn toggle_composer(&mut self) {
        self.composer_open = !self.composer_open;
    }

    /// Append a new friend with a zero balance and close the composer.
    ///
    /// Returns `None` (and leaves everything untouched) when either field is
    /// blank.
    pub fn add_friend(&mut self, candidate: NewFriend) -> Option<FriendId> {
        if !candidate.is_valid() {
            debug!("Rejected add-friend: name or image is empty");
            return None;
        }

        let id = self.fresh_id();
        let image = format!("{}?={}", candidate.image.trim(), id);
        let friend = Friend::new(id.clone(), candidate.name.trim(), image);
        info!("Added friend '{}' ({})", friend.name, friend.id);
        self.roster.push(friend);
        self.composer_open = false;
        Some(id)
    }

    /// Toggle selection of `id`. Always closes the composer.
    pub fn select_friend(&mut self, id: &FriendId) {
        if self.friend(id).is_none() {
            warn!("Ignoring selection of unknown friend {}", id);
            return;
        }
        if self.is_selected(id) {
            self.selection = None;
        } else {
            self.selection = Some(id.clone());
        }
        self.composer_open = false;
    }

    /// Add `delta` to one friend's balance, then clear the selection.
    pub fn apply_split(&mut self, id: &FriendId, delta: f64) {
        match self.roster.iter_mut().find(|f| &f.id == id) {
            Some(friend) => {
                friend.balance += delta;
                info!(
                    "Split applied to '{}': delta {}, balance now {}",
                    friend.name, delta, friend.balance
                );
            }
            None => warn!("Split for unknown friend {} ignored", id),
        }
        self.selection = None;
    }

    /// A random id that no roster entry uses yet.
    fn fresh_id(&self) -> FriendId {
        loop {
            let id = FriendId::random();
            if self.friend(&id).is_none() {
                return id;
            }
        }
    }
}

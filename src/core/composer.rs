//! # Add-Friend Draft
//!
//! The ephemeral state behind the add-friend form: a name and an avatar URL.
//! Submitting a valid draft hands back a `NewFriend` and resets the fields;
//! an invalid one is silently kept as-is.

use log::debug;

use crate::core::friend::NewFriend;

pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://i.pravatar.cc/48";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendDraft {
    pub name: String,
    pub image: String,
    placeholder: String,
}

impl FriendDraft {
    pub fn new(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        Self {
            name: String::new(),
            image: placeholder.clone(),
            placeholder,
        }
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.image = self.placeholder.clone();
    }

    pub fn submit(&mut self) -> Option<NewFriend> {
        let candidate = NewFriend::new(self.name.trim(), self.image.trim());
        if !candidate.is_valid() {
            debug!("Add-friend draft rejected (name={:?}, image={:?})", self.name, self.image);
            return None;
        }
        self.reset();
        Some(candidate)
    }
}

impl Default for FriendDraft {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_IMAGE)
    }
}

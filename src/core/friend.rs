//! # Friends
//!
//! The record the whole app revolves around: who, their avatar, and the
//! running balance between them and the user.
//!
//! Balance sign convention: positive means the friend owes the user,
//! negative means the user owes the friend.

use std::fmt;

/// Opaque friend identifier, unique within a roster.
///
/// Seed friends from the config file carry numeric strings, friends added
/// at runtime get a UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FriendId(String);

impl FriendId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    /// Avatar URL. Never fetched or validated.
    pub image: String,
    pub balance: f64,
}

impl Friend {
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance: 0.0,
        }
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }
}

/// A friend candidate produced by the add-friend form, before the roster
/// assigns it an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFriend {
    pub name: String,
    pub image: String,
}

impl NewFriend {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }

    /// Both fields must be non-blank.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.image.trim().is_empty()
    }
}

/// Format an amount with at most two decimals and no trailing zeros.
///
/// `27.0` → `"27"`, `12.5` → `"12.5"`, `0.1 + 0.2` → `"0.3"`.
pub fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    // Avoid printing "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

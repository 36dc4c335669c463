//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::friend::{Friend, FriendId};
use crate::core::state::App;

pub fn test_friend(id: &str, name: &str, balance: f64) -> Friend {
    Friend::new(FriendId::new(id), name, format!("https://i.pravatar.cc/48?u={id}"))
        .with_balance(balance)
}

/// Creates a test App with the Suzan (27) / Sofia (-20) / Mike (0) roster.
pub fn test_app() -> App {
    App::new(vec![
        test_friend("118836", "Suzan", 27.0),
        test_friend("933372", "Sofia", -20.0),
        test_friend("499476", "Mike", 0.0),
    ])
}

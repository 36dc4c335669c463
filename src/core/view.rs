//! # Roster View
//!
//! Pure projection of `App` into display rows. Adapters call this every
//! frame and render whatever comes back; nothing here is cached.

use crate::core::friend::{FriendId, format_amount};
use crate::core::state::App;

/// Which way the balance leans, for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceTone {
    /// The user owes the friend.
    Owing,
    /// The friend owes the user.
    Owed,
    Even,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FriendRow {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    pub message: String,
    pub tone: BalanceTone,
    pub selected: bool,
}

impl FriendRow {
    pub fn toggle_label(&self) -> &'static str {
        if self.selected { "Close" } else { "Select" }
    }
}

pub fn balance_message(name: &str, balance: f64, currency: &str) -> (String, BalanceTone) {
    if balance < 0.0 {
        (
            format!("You owe {} {}{}", name, format_amount(balance.abs()), currency),
            BalanceTone::Owing,
        )
    } else if balance > 0.0 {
        (
            format!("{} owes you {}{}", name, format_amount(balance), currency),
            BalanceTone::Owed,
        )
    } else {
        (format!("You and {} are even", name), BalanceTone::Even)
    }
}

pub fn roster_view(app: &App, currency: &str) -> Vec<FriendRow> {
    app.roster
        .iter()
        .map(|friend| {
            let (message, tone) = balance_message(&friend.name, friend.balance, currency);
            FriendRow {
                id: friend.id.clone(),
                name: friend.name.clone(),
                image: friend.image.clone(),
                message,
                tone,
                selected: app.is_selected(&friend.id),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_balance_messages() {
        assert_eq!(
            balance_message("Sofia", -20.0, "€"),
            ("You owe Sofia 20€".to_string(), BalanceTone::Owing)
        );
        assert_eq!(
            balance_message("Suzan", 27.0, "€"),
            ("Suzan owes you 27€".to_string(), BalanceTone::Owed)
        );
        assert_eq!(
            balance_message("Mike", 0.0, "€"),
            ("You and Mike are even".to_string(), BalanceTone::Even)
        );
    }

    #[test]
    fn test_roster_view_preserves_order() {
        let rows = roster_view(&test_app(), "$");
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Suzan", "Sofia", "Mike"]);
        assert_eq!(rows[0].message, "Suzan owes you 27$");
    }

    #[test]
    fn test_toggle_label_follows_selection() {
        let mut app = test_app();
        let sofia = app.roster[1].id.clone();
        app.select_friend(&sofia);

        let rows = roster_view(&app, "€");
        let labels: Vec<&str> = rows.iter().map(|r| r.toggle_label()).collect();
        assert_eq!(labels, ["Select", "Close", "Select"]);
    }
}

//! # Bill Split Draft
//!
//! Pending bill for the selected friend: the total, the user's own share,
//! and who paid. The friend's share is derived, never entered.
//!
//! ```text
//! friend expense = bill - own expense
//!
//! payer = You     →  delta = +friend expense   (friend now owes you)
//! payer = Friend  →  delta = -own expense      (you now owe the friend)
//! ```
//!
//! Own expense is clamped to the bill when it is entered. Editing the bill
//! never rewrites the stored own expense, since the bill passes through
//! partial values while it is typed. The derived share caps own expense at
//! the bill instead, so it is never negative.

use log::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Payer {
    #[default]
    You,
    Friend,
}

impl Payer {
    pub fn toggle(self) -> Self {
        match self {
            Payer::You => Payer::Friend,
            Payer::Friend => Payer::You,
        }
    }
}

/// Parse a free-text amount field.
///
/// Blank, non-numeric, negative or non-finite input counts as "not entered".
pub fn parse_amount(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SplitDraft {
    bill: Option<f64>,
    own_expense: Option<f64>,
    pub payer: Payer,
}

impl SplitDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bill(&self) -> Option<f64> {
        self.bill
    }

    pub fn own_expense(&self) -> Option<f64> {
        self.own_expense
    }

    pub fn set_bill(&mut self, bill: Option<f64>) {
        self.bill = bill;
    }

    pub fn set_own_expense(&mut self, own_expense: Option<f64>) {
        self.own_expense = self.clamped(own_expense);
    }

    fn clamped(&self, own_expense: Option<f64>) -> Option<f64> {
        match (own_expense, self.bill) {
            (Some(own), Some(bill)) if own > bill => Some(bill),
            _ => own_expense,
        }
    }

    /// Own expense as it counts towards the split: at most the bill.
    fn effective_own(&self) -> Option<f64> {
        Some(self.own_expense?.min(self.bill?))
    }

    /// The friend's share, once both amounts are known.
    pub fn friend_expense(&self) -> Option<f64> {
        Some(self.bill? - self.effective_own()?)
    }

    /// Signed balance adjustment for the selected friend.
    pub fn delta(&self) -> Option<f64> {
        match self.payer {
            Payer::You => self.friend_expense(),
            Payer::Friend => self.effective_own().map(|own| -own),
        }
    }

    /// The delta to apply, or `None` while the bill or own expense is missing.
    pub fn submit(&self) -> Option<f64> {
        let delta = self.delta();
        if delta.is_none() {
            debug!("Split draft rejected: bill={:?} own={:?}", self.bill, self.own_expense);
        }
        delta
    }
}

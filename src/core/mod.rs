//! # Core Application Logic
//!
//! This module contains billsplit's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (roster)       │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Drafts (forms)       │
//!                    │  • View (projection)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │   Tests    │
//!            │  Adapter   │            │            │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct: roster, selection, composer flag
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`friend`]: `Friend`, `FriendId` and amount formatting
//! - [`composer`]: Add-friend draft
//! - [`split`]: Split-bill draft and delta computation
//! - [`view`]: Roster rows derived from state
//! - [`config`]: Config file loading (the only module that touches disk)

pub mod action;
pub mod composer;
pub mod config;
pub mod friend;
pub mod split;
pub mod state;
pub mod view;

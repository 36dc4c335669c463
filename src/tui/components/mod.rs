//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status line with roster size, net balance and key hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `FriendList`: The roster, with a cursor (`FriendListState`)
//! - `AddFriendForm`: Name + avatar fields over a `FriendDraft`
//! - `SplitBillForm`: Bill, own expense and payer over a `SplitDraft`
//! - `TextField`: Cursor handling shared by both forms
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields or function
//! parameters), never by reaching into `App`. The roster in particular is
//! handed over as `FriendRow`s projected by `core::view` on every frame.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (Top status line)
//! ├── friend_list.rs  (Roster sidebar)
//! ├── add_friend.rs   (Add-friend form)
//! ├── split_bill.rs   (Split-bill form)
//! └── text_field.rs   (Single-line input)
//! ```

pub mod add_friend;
pub mod friend_list;
pub mod split_bill;
pub mod text_field;
mod title_bar;

pub use add_friend::{AddFriendEvent, AddFriendForm};
pub use friend_list::{FriendList, FriendListEvent, FriendListState};
pub use split_bill::{SplitBillForm, SplitEvent};
pub use title_bar::TitleBar;

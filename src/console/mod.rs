//! Console frontend
//!
//! - `menu` - Menu texts and choice parsing
//! - `session` - The menu loop that drives a ledger from line input

pub mod menu;
pub mod session;

pub use menu::{GuestChoice, MemberChoice, GUEST_MENU, MEMBER_MENU};
pub use session::ConsoleSession;

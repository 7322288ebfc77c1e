//! TUI widgets

mod unread_badge;

pub use unread_badge::UnreadBadge;

//! TUI views

mod feed_view;

pub use feed_view::FeedView;

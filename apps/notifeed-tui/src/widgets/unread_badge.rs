//! Unread count badge shown next to the page title.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Badge background (dark blue).
pub const BADGE_COLOR: Color = Color::Rgb(0x0a, 0x31, 0x7b);

/// Displays the number of unread notifications.
///
/// Dimmed when nothing is unread.
pub struct UnreadBadge {
    count: usize,
}

impl UnreadBadge {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn label(&self) -> String {
        format!(" {} ", self.count)
    }

    pub fn style(&self) -> Style {
        if self.count == 0 {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::White)
                .bg(BADGE_COLOR)
                .add_modifier(Modifier::BOLD)
        }
    }

    /// Render as a styled span (for embedding in other widgets).
    pub fn as_span(&self) -> Span<'static> {
        Span::styled(self.label(), self.style())
    }
}

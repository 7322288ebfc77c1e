//! Application state and main render loop

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use notifeed_core::{
    render_feed, DisplayConfig, Feed, FeedPage, ReferenceData, Resolver, Snapshot,
};

use crate::keybindings::{action_for, Action};
use crate::views::FeedView;

/// Main application state
pub struct App {
    /// Reference collections, fixed for the session
    pub reference: Arc<ReferenceData>,
    /// Notifications and their read state
    pub feed: Feed,
    /// Labels and asset naming
    pub display: DisplayConfig,
    /// Selected item index
    pub selected: usize,
    /// Status message
    pub status_message: Option<String>,
    /// Whether to show the help overlay
    pub show_help: bool,
    pub feed_view: FeedView,
}

impl App {
    /// Create an app over a loaded snapshot
    pub fn new(snapshot: Snapshot, display: DisplayConfig) -> Self {
        Self {
            reference: snapshot.reference,
            feed: Feed::new(snapshot.notifications),
            display,
            selected: 0,
            status_message: None,
            show_help: false,
            feed_view: FeedView::new(),
        }
    }

    /// Current page, joined against the reference collections
    pub fn page(&self) -> FeedPage {
        render_feed(&self.feed, &Resolver::new(&self.reference), &self.display)
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Feed
                Constraint::Length(1), // Status line
            ])
            .split(size);

        let page = self.page();
        self.feed_view.render(frame, chunks[0], &page, self.selected);
        self.render_status_line(frame, chunks[1]);

        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let content = self.status_message.clone().unwrap_or_else(|| {
            "j/k move | Enter mark read | a mark all read | ? help | q quit".to_string()
        });
        let paragraph = Paragraph::new(content).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(paragraph, area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_text = r#"
Notifications - Help

Navigation:
  j/k, Up/Down  - Move selection
  g/G           - First / last notification

Read state:
  Enter, Space  - Mark selected as read
  a             - Mark all as read

Other:
  ?             - Toggle this help
  Esc           - Close help
  q             - Quit
"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(60, 60, area);
        frame.render_widget(ratatui::widgets::Clear, help_area);
        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, help_area);
    }

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> bool {
        let Some(action) = action_for(code) else {
            return false;
        };

        match action {
            Action::Quit => return true,
            Action::Cancel => {
                if !self.show_help {
                    return true;
                }
                self.show_help = false;
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
            }
            Action::MoveDown => self.navigate_down(),
            Action::MoveUp => self.navigate_up(),
            Action::First => self.selected = 0,
            Action::Last => self.selected = self.feed.len().saturating_sub(1),
            Action::MarkRead => self.mark_selected_read(),
            Action::MarkAllRead => self.mark_all_read(),
        }
        false
    }

    fn navigate_down(&mut self) {
        let count = self.feed.len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    fn navigate_up(&mut self) {
        let count = self.feed.len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Mark the selected notification as read
    pub fn mark_selected_read(&mut self) {
        let Some(id) = self
            .feed
            .notifications()
            .get(self.selected)
            .map(|n| n.id.clone())
        else {
            return;
        };

        if self.feed.mark_one_read(&id) {
            self.status_message = Some(format!(
                "Marked {} as read ({} unread)",
                id,
                self.feed.unread_count()
            ));
        }
    }

    /// Mark every notification as read
    pub fn mark_all_read(&mut self) {
        let changed = self.feed.mark_all_read();
        self.status_message = Some(match changed {
            0 => "Nothing unread".to_string(),
            1 => "Marked 1 notification as read".to_string(),
            n => format!("Marked {} notifications as read", n),
        });
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use notifeed_core::{Group, Notification, Post, ReadStatus, User};
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        let reference = ReferenceData::new()
            .with_users(vec![
                User::new("markwebber", "Mark Webber"),
                User::new("jacobthompson", "Jacob Thompson"),
            ])
            .with_posts(vec![Post::new("p1", "My first tournament today!")])
            .with_groups(vec![Group::new("g1", "Chess Club")]);
        let notifications = vec![
            Notification::new(1, "markwebber", "reacted to your recent post")
                .with_target("p1")
                .with_time("1m"),
            Notification::new(2, "jacobthompson", "has joined your group")
                .with_target("g1")
                .with_time("1 day"),
            Notification::new(3, "markwebber", "followed you")
                .with_time("1 week")
                .with_status(ReadStatus::Read),
        ];
        App::new(Snapshot::new(reference, notifications), DisplayConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::NONE)
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_enter_marks_selected_read() {
        let mut app = app();
        assert_eq!(app.feed.unread_count(), 2);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.feed.unread_count(), 1);
        assert!(app.feed.notifications()[0].is_unread());
        assert!(!app.feed.notifications()[1].is_unread());
    }

    #[test]
    fn test_mark_all_read_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.feed.unread_count(), 0);
        assert_eq!(app.page().unread_count, 0);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.status_message.as_deref(), Some("Nothing unread"));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 2);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 0);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_quit_and_help_keys() {
        let mut app = app();
        assert!(!press(&mut app, KeyCode::Char('?')));
        assert!(app.show_help);
        assert!(!press(&mut app, KeyCode::Esc));
        assert!(!app.show_help);
        assert!(press(&mut app, KeyCode::Esc));
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_empty_feed_keys_are_safe() {
        let mut app = App::new(Snapshot::default(), DisplayConfig::default());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.selected, 0);
        assert!(screen(&app).contains("No notifications"));
    }

    #[test]
    fn test_render_shows_joined_text() {
        let app = app();
        let text = screen(&app);
        assert!(text.contains("Notifications"));
        assert!(text.contains("Mark all as read"));
        assert!(text.contains("Mark Webber"));
        assert!(text.contains("My first tournament today!"));
        assert!(text.contains("Chess Club"));
        assert!(text.contains("1 day ago"));
    }
}

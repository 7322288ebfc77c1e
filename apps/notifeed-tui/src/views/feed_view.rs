//! Feed view
//!
//! Header with the unread badge, then one list entry per notification:
//! - name, event and target preview (post titles muted, group names bold)
//! - unread dot and highlighted row while unread
//! - elapsed time
//! - message preview and picture marker when present

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use notifeed_core::{FeedItem, FeedPage, PreviewStyle};

use crate::widgets::UnreadBadge;

const NAME_COLOR: Color = Color::Rgb(0x1c, 0x20, 0x2b);
const MUTED_COLOR: Color = Color::Rgb(0x5e, 0x67, 0x78);
const EMPHASIS_COLOR: Color = Color::Rgb(0x0a, 0x31, 0x7b);
const DOT_COLOR: Color = Color::Rgb(0xf6, 0x53, 0x51);
const TIME_COLOR: Color = Color::Rgb(0x93, 0x9d, 0xae);
const UNREAD_ROW: Color = Color::Rgb(0xf7, 0xfa, 0xfd);

/// Feed view
pub struct FeedView;

impl FeedView {
    pub fn new() -> Self {
        Self
    }

    /// Render the header and the item list
    pub fn render(&self, frame: &mut Frame, area: Rect, page: &FeedPage, selected: usize) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Items
            ])
            .split(area);

        self.render_header(frame, chunks[0], page);
        self.render_items(frame, chunks[1], page, selected);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, page: &FeedPage) {
        let line = Line::from(vec![
            Span::styled(
                page.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            UnreadBadge::new(page.unread_count).as_span(),
            Span::raw("    "),
            Span::styled(
                format!("{} (a)", page.mark_all_label),
                Style::default().fg(MUTED_COLOR),
            ),
        ]);

        let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn render_items(&self, frame: &mut Frame, area: Rect, page: &FeedPage, selected: usize) {
        if page.items.is_empty() {
            let paragraph = Paragraph::new("No notifications")
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = page.items.iter().map(item_lines).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(selected));
        frame.render_stateful_widget(list, area, &mut state);
    }
}

impl Default for FeedView {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the list entry for one item.
pub fn item_lines(item: &FeedItem) -> ListItem<'static> {
    let mut headline = vec![
        Span::styled(
            item.display_name.clone(),
            Style::default().fg(NAME_COLOR).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(item.event.clone(), Style::default().fg(MUTED_COLOR)),
    ];

    if let Some(link) = &item.target_link {
        let style = match link.style {
            PreviewStyle::Muted => Style::default()
                .fg(MUTED_COLOR)
                .add_modifier(Modifier::BOLD),
            PreviewStyle::Emphasized => Style::default()
                .fg(EMPHASIS_COLOR)
                .add_modifier(Modifier::BOLD),
        };
        headline.push(Span::raw(" "));
        headline.push(Span::styled(link.text.clone(), style));
    }

    if item.unread {
        headline.push(Span::styled(" ●", Style::default().fg(DOT_COLOR)));
    }

    if item.thumbnail.is_some() {
        headline.push(Span::styled(" [image]", Style::default().fg(MUTED_COLOR)));
    }

    let mut lines = vec![
        Line::from(headline),
        Line::from(Span::styled(
            item.time_label.clone(),
            Style::default().fg(TIME_COLOR),
        )),
    ];

    if let Some(message) = &item.message {
        lines.push(Line::from(Span::styled(
            format!("  │ {}", message.text),
            Style::default().fg(MUTED_COLOR),
        )));
    }
    lines.push(Line::from(""));

    let style = if item.unread {
        Style::default().bg(UNREAD_ROW)
    } else {
        Style::default()
    };
    ListItem::new(lines).style(style)
}

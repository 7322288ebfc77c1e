//! Keybinding definitions

use crossterm::event::KeyCode;

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Close the help overlay, or quit
    Cancel,
    /// Move up in list
    MoveUp,
    /// Move down in list
    MoveDown,
    /// Jump to first item
    First,
    /// Jump to last item
    Last,
    /// Mark the selected notification as read
    MarkRead,
    /// Mark every notification as read
    MarkAllRead,
    /// Toggle help
    ToggleHelp,
}

/// Get the action for a key
pub fn action_for(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::First),
        KeyCode::Char('G') | KeyCode::End => Some(Action::Last),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::MarkRead),
        KeyCode::Char('a') => Some(Action::MarkAllRead),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_keys() {
        assert_eq!(action_for(KeyCode::Enter), Some(Action::MarkRead));
        assert_eq!(action_for(KeyCode::Char(' ')), Some(Action::MarkRead));
        assert_eq!(action_for(KeyCode::Char('a')), Some(Action::MarkAllRead));
        assert_eq!(action_for(KeyCode::Char('x')), None);
    }
}

//! Screen identifiers and keyboard navigation
//!
//! Maps raw key events to the navigation actions the screens understand.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Onboarding sequence
    Walkthrough,
    /// Research mode selection
    Modes,
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back/cancel (Esc, Backspace)
    Back,
    /// Next item (Tab)
    Next,
    /// Previous item (Shift+Tab)
    Previous,
    /// Open the skip dialog (s)
    Skip,
    /// Add something new (a, +)
    Add,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Convert keyboard event to navigation action
pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
    match key.code {
        // Quit keys
        KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            NavigationAction::Quit
        }

        // Navigation keys
        KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
        KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
        KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
        KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

        // Selection and confirmation
        KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

        // Back/cancel
        KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

        KeyCode::Char('s') | KeyCode::Char('S') => NavigationAction::Skip,
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('+') => NavigationAction::Add,

        // Tab navigation
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                NavigationAction::Previous
            } else {
                NavigationAction::Next
            }
        }
        KeyCode::BackTab => NavigationAction::Previous,

        _ => NavigationAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_navigation(key(KeyCode::Char('q'))), NavigationAction::Quit);
        assert_eq!(key_to_navigation(key(KeyCode::Char('Q'))), NavigationAction::Quit);
        assert_eq!(
            key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );
        assert_eq!(key_to_navigation(key(KeyCode::Char('c'))), NavigationAction::None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(key_to_navigation(key(KeyCode::Up)), NavigationAction::Up);
        assert_eq!(key_to_navigation(key(KeyCode::Char('j'))), NavigationAction::Down);
        assert_eq!(key_to_navigation(key(KeyCode::Left)), NavigationAction::Left);
        assert_eq!(key_to_navigation(key(KeyCode::Char('l'))), NavigationAction::Right);
        assert_eq!(key_to_navigation(key(KeyCode::Enter)), NavigationAction::Select);
        assert_eq!(key_to_navigation(key(KeyCode::Char(' '))), NavigationAction::Select);
        assert_eq!(key_to_navigation(key(KeyCode::Esc)), NavigationAction::Back);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key_to_navigation(key(KeyCode::Char('s'))), NavigationAction::Skip);
        assert_eq!(key_to_navigation(key(KeyCode::Char('+'))), NavigationAction::Add);
        assert_eq!(key_to_navigation(key(KeyCode::Char('a'))), NavigationAction::Add);
    }

    #[test]
    fn test_tab_navigation() {
        assert_eq!(key_to_navigation(key(KeyCode::Tab)), NavigationAction::Next);
        assert_eq!(
            key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)),
            NavigationAction::Previous
        );
        assert_eq!(key_to_navigation(key(KeyCode::BackTab)), NavigationAction::Previous);
    }
}

//! Terminal management system
//!
//! Handles crossterm backend initialization, screen management,
//! and input event processing for the TUI application.

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::Duration,
};

use crate::{ResearcherError, Result};

/// Input the application reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Left mouse button pressed at a cell
    Click { column: u16, row: u16 },
}

impl InputEvent {
    /// Keep key presses and left clicks, drop everything else
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(Self::Key(key)),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some(Self::Click {
                    column: mouse.column,
                    row: mouse.row,
                })
            }
            _ => None,
        }
    }
}

/// Terminal wrapper that manages crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)
            .map_err(|e| ResearcherError::TuiError(format!("Failed to create terminal: {}", e)))?;

        Ok(Self {
            terminal,
            active: false,
        })
    }

    /// Initialize terminal with proper setup
    pub fn init(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        self.active = true;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to its previous state
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        self.active = false;
        Ok(())
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Wait up to `timeout` for the next relevant input event
    pub fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        if event::poll(timeout)? {
            return Ok(InputEvent::from_crossterm(event::read()?));
        }
        Ok(None)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseEvent};

    #[test]
    fn test_key_release_is_dropped() {
        let press = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            InputEvent::from_crossterm(Event::Key(press)),
            Some(InputEvent::Key(press))
        );

        let release = KeyEvent {
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
            ..press
        };
        assert_eq!(InputEvent::from_crossterm(Event::Key(release)), None);
    }

    #[test]
    fn test_left_click_is_kept() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            InputEvent::from_crossterm(Event::Mouse(click)),
            Some(InputEvent::Click { column: 12, row: 7 })
        );

        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            ..click
        };
        assert_eq!(InputEvent::from_crossterm(Event::Mouse(moved)), None);
    }

    #[test]
    fn test_resize_is_ignored() {
        assert_eq!(InputEvent::from_crossterm(Event::Resize(80, 24)), None);
    }
}

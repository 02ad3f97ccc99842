//! Event handling for the kask TUI.
//!
//! Converts terminal key presses into dashboard events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Application-level events that can trigger state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Select the next keg
    Advance,
    /// Select the previous keg
    Retreat,
    /// Leave the dashboard
    Quit,
    /// Terminal was resized; lay panes out again
    Resize,
    /// No action needed
    None,
}

/// Input handler for converting key events to app events.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Create a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Handle a key event and return the corresponding app event.
    pub fn handle_key(&self, key: KeyEvent) -> AppEvent {
        // Some terminals report releases too; only presses move the cursor.
        if key.kind == KeyEventKind::Release {
            return AppEvent::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppEvent::Quit;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => AppEvent::Advance,
            KeyCode::Up | KeyCode::Char('k') => AppEvent::Retreat,
            KeyCode::Char('q') | KeyCode::Char('Q') => AppEvent::Quit,
            _ => AppEvent::None,
        }
    }
}

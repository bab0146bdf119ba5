//! Event handling for Duskswitch
//!
//! Raw crossterm input is translated into a small set of application events so
//! the app logic can be driven without a terminal.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Application events that can occur during runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// User requested to quit the application
    Quit,
    /// Force quit the application (Ctrl+C)
    ForceQuit,
    /// User activated the toggle button from the keyboard
    Activate,
    /// Left mouse button pressed at (column, row)
    Click { column: u16, row: u16 },
    /// Terminal was resized to new dimensions
    Resize(u16, u16),
    /// No event occurred (timeout)
    None,
}

impl From<Event> for AppEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => key_event(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => AppEvent::Click { column, row },
            Event::Resize(width, height) => AppEvent::Resize(width, height),
            _ => AppEvent::None,
        }
    }
}

fn key_event(key: KeyEvent) -> AppEvent {
    if key.kind != KeyEventKind::Press {
        return AppEvent::None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::ForceQuit,
        KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('t') | KeyCode::Char('T') => {
            AppEvent::Activate
        }
        _ => AppEvent::None,
    }
}

/// Input event handler for the application
#[derive(Debug, Clone)]
pub struct EventHandler {
    /// Polling timeout for input events
    timeout: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified timeout
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Poll for the next input event and convert it to an AppEvent
    pub fn next_event(&self) -> std::io::Result<AppEvent> {
        if crossterm::event::poll(self.timeout)? {
            Ok(crossterm::event::read()?.into())
        } else {
            Ok(AppEvent::None)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(50))
    }
}

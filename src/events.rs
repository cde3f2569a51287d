//! Events Module - Widget event types and the crossterm bridge
//!
//! Key and press events in the shape the controllers consume, plus
//! conversions from crossterm's terminal events so a host event loop can
//! feed the widget directly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowLeft").
    pub key: String,
    /// Modifier keys state.
    pub modifiers: Modifiers,
}

impl KeyboardEvent {
    /// Create a simple key press event.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
        }
    }

    /// Create a key press with modifiers.
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

/// A pointer press at viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressEvent {
    pub x: u16,
    pub y: u16,
}

impl PressEvent {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Extract a press from a terminal mouse event.
    ///
    /// Only button-down events count as presses; moves, drags, releases
    /// and scrolls yield `None`.
    pub fn from_mouse(event: &MouseEvent) -> Option<Self> {
        match event.kind {
            MouseEventKind::Down(_) => Some(Self::new(event.column, event.row)),
            _ => None,
        }
    }
}

// =============================================================================
// CROSSTERM BRIDGE
// =============================================================================

impl From<&KeyEvent> for KeyboardEvent {
    fn from(event: &KeyEvent) -> Self {
        let key = match event.code {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Escape".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Delete => "Delete".to_string(),
            KeyCode::Left => "ArrowLeft".to_string(),
            KeyCode::Right => "ArrowRight".to_string(),
            KeyCode::Up => "ArrowUp".to_string(),
            KeyCode::Down => "ArrowDown".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            _ => "Unidentified".to_string(),
        };

        Self {
            key,
            modifiers: Modifiers {
                ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
                alt: event.modifiers.contains(KeyModifiers::ALT),
                shift: event.modifiers.contains(KeyModifiers::SHIFT),
                meta: event.modifiers.contains(KeyModifiers::SUPER),
            },
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

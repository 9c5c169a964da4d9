//! Content protection
//!
//! The site suppresses the context menu, text selection, drag, clipboard
//! events and a set of keyboard shortcuts (copy, save, view source, devtools,
//! print). This module decides which document events get `preventDefault`.

/// A key press as reported by a `keydown` event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// `KeyboardEvent.key`, case preserved
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl: false,
            shift: false,
        }
    }

    pub fn ctrl(key: &str) -> Self {
        Self {
            ctrl: true,
            ..Self::new(key)
        }
    }

    pub fn ctrl_shift(key: &str) -> Self {
        Self {
            ctrl: true,
            shift: true,
            ..Self::new(key)
        }
    }
}

/// Document events the guard listens to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    ContextMenu,
    KeyDown(KeyPress),
    DragStart,
    SelectStart,
    Copy,
    Cut,
}

/// Ctrl shortcuts blocked regardless of shift: copy, paste, cut, save, select all, source, print
const BLOCKED_CTRL_KEYS: [&str; 7] = ["c", "v", "x", "s", "a", "u", "p"];

/// Ctrl+Shift shortcuts that open developer tools
const BLOCKED_CTRL_SHIFT_KEYS: [&str; 3] = ["I", "J", "C"];

/// Whether a key press is one of the suppressed shortcuts
pub fn is_blocked_shortcut(press: &KeyPress) -> bool {
    if press.key == "F12" {
        return true;
    }
    if !press.ctrl {
        return false;
    }
    if BLOCKED_CTRL_KEYS.contains(&press.key.as_str()) {
        return true;
    }
    press.shift && BLOCKED_CTRL_SHIFT_KEYS.contains(&press.key.as_str())
}

/// Decides which document events are cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentGuard {
    enabled: bool,
}

impl ContentGuard {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether the event's default action should be prevented
    pub fn should_prevent(&self, event: &DocumentEvent) -> bool {
        if !self.enabled {
            return false;
        }
        match event {
            DocumentEvent::KeyDown(press) => is_blocked_shortcut(press),
            DocumentEvent::ContextMenu
            | DocumentEvent::DragStart
            | DocumentEvent::SelectStart
            | DocumentEvent::Copy
            | DocumentEvent::Cut => true,
        }
    }
}

impl Default for ContentGuard {
    fn default() -> Self {
        Self::new(true)
    }
}

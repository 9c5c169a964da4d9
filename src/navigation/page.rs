//! Host page abstraction
//!
//! [`Page`] is the only way the coordination layer touches the document:
//! element geometry, the window scroll position and scroll commands.
//! [`HeadlessPage`] is an in-memory document used by tests and the CLI.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// How a scroll is animated
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// The document the site is rendered into
pub trait Page: Send + Sync {
    /// Top edge of the element with this id relative to the viewport, if present
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Current vertical scroll offset of the window
    fn scroll_y(&self) -> f64;

    fn viewport_width(&self) -> f64;

    fn viewport_height(&self) -> f64;

    /// Scroll the window to an absolute vertical offset
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);
}

/// A scroll command received by a [`HeadlessPage`]
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ScrollCommand {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Default)]
struct HeadlessState {
    /// Element tops relative to the document
    anchors: HashMap<String, f64>,
    scroll_y: f64,
    width: f64,
    height: f64,
    log: Vec<ScrollCommand>,
}

/// In-memory [`Page`]; scrolls complete immediately
#[derive(Debug, Clone, Default)]
pub struct HeadlessPage {
    state: Arc<Mutex<HeadlessState>>,
}

impl HeadlessPage {
    /// Create an empty page with the given viewport size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            state: Arc::new(Mutex::new(HeadlessState {
                width,
                height,
                ..HeadlessState::default()
            })),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, HeadlessState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Place an element at a document-relative offset
    pub fn with_anchor(self, id: &str, document_top: f64) -> Self {
        self.set_anchor(id, document_top);
        self
    }

    pub fn set_anchor(&self, id: &str, document_top: f64) {
        self.state().anchors.insert(id.to_string(), document_top);
    }

    pub fn remove_anchor(&self, id: &str) {
        self.state().anchors.remove(id);
    }

    /// Swap the document for another route's content, keeping the scroll offset
    pub fn replace_anchors<'a>(&self, anchors: impl IntoIterator<Item = (&'a str, f64)>) {
        let mut state = self.state();
        state.anchors = anchors
            .into_iter()
            .map(|(id, top)| (id.to_string(), top))
            .collect();
    }

    /// Simulate the user scrolling
    pub fn set_scroll_y(&self, scroll_y: f64) {
        self.state().scroll_y = scroll_y.max(0.0);
    }

    pub fn set_viewport_width(&self, width: f64) {
        self.state().width = width;
    }

    /// Every scroll command received so far
    pub fn scroll_log(&self) -> Vec<ScrollCommand> {
        self.state().log.clone()
    }

    pub fn last_scroll(&self) -> Option<ScrollCommand> {
        self.state().log.last().copied()
    }
}

impl Page for HeadlessPage {
    fn element_top(&self, id: &str) -> Option<f64> {
        let state = self.state();
        state.anchors.get(id).map(|top| top - state.scroll_y)
    }

    fn scroll_y(&self) -> f64 {
        self.state().scroll_y
    }

    fn viewport_width(&self) -> f64 {
        self.state().width
    }

    fn viewport_height(&self) -> f64 {
        self.state().height
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let mut state = self.state();
        state.scroll_y = top.max(0.0);
        state.log.push(ScrollCommand { top, behavior });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_top_is_viewport_relative() {
        let page = HeadlessPage::new(1280.0, 800.0).with_anchor("faq", 3000.0);
        assert_eq!(page.element_top("faq"), Some(3000.0));

        page.set_scroll_y(1000.0);
        assert_eq!(page.element_top("faq"), Some(2000.0));
        assert_eq!(page.element_top("percorsi"), None);
    }

    #[test]
    fn test_scroll_to_records_and_clamps() {
        let page = HeadlessPage::new(1280.0, 800.0);
        page.scroll_to(-20.0, ScrollBehavior::Instant);
        assert_eq!(page.scroll_y(), 0.0);
        assert_eq!(
            page.last_scroll(),
            Some(ScrollCommand { top: -20.0, behavior: ScrollBehavior::Instant })
        );
    }

    #[test]
    fn test_replace_anchors_keeps_scroll() {
        let page = HeadlessPage::new(390.0, 844.0).with_anchor("faq", 100.0);
        page.set_scroll_y(500.0);
        page.replace_anchors([("percorsi", 1500.0)]);

        assert_eq!(page.element_top("faq"), None);
        assert_eq!(page.element_top("percorsi"), Some(1000.0));
    }
}

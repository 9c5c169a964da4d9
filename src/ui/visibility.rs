//! Visibility of the hero call-to-action
//!
//! The sticky mobile CTA appears once the hero's own CTA leaves a viewport
//! that is shrunk by a margin at the top and bottom, so it slides in slightly
//! before the hero button disappears.
//!
//! [`observe`] returns the observer, which the host feeds with element
//! geometry, and a one-shot stream of visibility values. The stream starts
//! with `true` and then yields every change in order, including changes
//! reported before the consumer polls; it ends when the observer is
//! unobserved or dropped.

use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tracing::debug;

use crate::config::VisibilityConfig;
use crate::navigation::Page;

/// Stream of "is the reference element visible" values
pub type VisibilityStream = Pin<Box<dyn Stream<Item = bool> + Send>>;

/// Vertical extent of an element relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub bottom: f64,
}

impl ElementBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }
}

/// Watches one element against the shrunken viewport
#[derive(Debug)]
pub struct VisibilityObserver {
    root_margin: f64,
    /// Last visibility sent on the stream
    visible: AtomicBool,
    sender: Option<mpsc::UnboundedSender<bool>>,
}

/// Start observing a single reference element
pub fn observe(config: &VisibilityConfig) -> (VisibilityObserver, VisibilityStream) {
    let (sender, mut receiver) = mpsc::unbounded_channel();

    let stream = async_stream::stream! {
        yield true;
        while let Some(visible) = receiver.recv().await {
            yield visible;
        }
    };

    let observer = VisibilityObserver {
        root_margin: config.root_margin,
        visible: AtomicBool::new(true),
        sender: Some(sender),
    };
    (observer, Box::pin(stream))
}

impl VisibilityObserver {
    /// Whether `bounds` overlap the viewport once the margins are removed
    pub fn is_intersecting(&self, bounds: ElementBounds, viewport_height: f64) -> bool {
        let root_top = self.root_margin;
        let root_bottom = viewport_height - self.root_margin;
        bounds.bottom > root_top && bounds.top < root_bottom
    }

    /// Feed new geometry; emits on the stream only when visibility flips
    ///
    /// Returns the visibility computed for `bounds`. Ignored after unobserve.
    pub fn report(&self, bounds: ElementBounds, viewport_height: f64) -> bool {
        let visible = self.is_intersecting(bounds, viewport_height);
        if let Some(sender) = &self.sender {
            if self.visible.swap(visible, Ordering::SeqCst) != visible {
                debug!(visible = visible, "Reference element visibility changed");
                // The receiver only goes away with the stream; nothing to notify then.
                let _ = sender.send(visible);
            }
        }
        visible
    }

    /// Measure an element on a page and report it
    ///
    /// A missing element counts as not visible.
    pub fn report_element(&self, page: &dyn Page, id: &str, height: f64) -> bool {
        let viewport_height = page.viewport_height();
        match page.element_top(id) {
            Some(top) => self.report(ElementBounds::new(top, height), viewport_height),
            None => self.report(
                ElementBounds {
                    top: f64::INFINITY,
                    bottom: f64::INFINITY,
                },
                viewport_height,
            ),
        }
    }

    pub fn is_observing(&self) -> bool {
        self.sender.is_some()
    }

    /// Stop observing; the stream ends after any pending value
    pub fn unobserve(&mut self) {
        if self.sender.take().is_some() {
            debug!("Visibility observer disconnected");
        }
    }
}

/// Whether the sticky CTA should be shown, derived from hero CTA visibility
pub fn sticky_cta(visibility: VisibilityStream) -> impl Stream<Item = bool> + Send {
    visibility.map(|visible| !visible)
}

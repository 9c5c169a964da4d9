//! "How it works" step carousel
//!
//! A bounded index moved by the arrow controls, the pagination dots, or a
//! horizontal swipe. It never wraps around.

use tracing::trace;

use crate::config::CarouselConfig;

/// Direction emitted by a completed swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: advance
    Next,
    /// Finger moved right: go back
    Prev,
}

/// Touch positions captured during one interaction
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeGesture {
    pub start_x: Option<f64>,
    pub end_x: Option<f64>,
}

impl SwipeGesture {
    /// `start - end`, if both ends were captured
    pub fn distance(&self) -> Option<f64> {
        Some(self.start_x? - self.end_x?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepCarousel {
    index: usize,
    steps: usize,
    swipe_threshold: f64,
    gesture: SwipeGesture,
}

impl StepCarousel {
    /// A freshly mounted carousel, showing the first step
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            index: 0,
            steps: config.steps.max(1),
            swipe_threshold: config.swipe_threshold,
            gesture: SwipeGesture::default(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    fn last(&self) -> usize {
        self.steps - 1
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index < self.last()
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1).min(self.last());
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = self.index.saturating_sub(1);
        self.index
    }

    /// Jump to a step from the pagination dots; out-of-range values clamp
    pub fn go_to(&mut self, index: usize) -> usize {
        if index > self.last() {
            trace!(requested = index, last = self.last(), "Carousel index clamped");
        }
        self.index = index.min(self.last());
        self.index
    }

    /// Whether dot `index` is the current step
    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    pub fn gesture(&self) -> SwipeGesture {
        self.gesture
    }

    pub fn touch_start(&mut self, x: f64) {
        self.gesture = SwipeGesture {
            start_x: Some(x),
            end_x: None,
        };
    }

    pub fn touch_move(&mut self, x: f64) {
        self.gesture.end_x = Some(x);
    }

    /// Resolve the interaction into at most one transition
    ///
    /// The gesture is cleared whatever the outcome.
    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        let distance = std::mem::take(&mut self.gesture).distance()?;

        let direction = if distance > self.swipe_threshold {
            SwipeDirection::Next
        } else if distance < -self.swipe_threshold {
            SwipeDirection::Prev
        } else {
            return None;
        };

        match direction {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Prev => self.prev(),
        };
        Some(direction)
    }

    /// Horizontal offset of the track, in percent of its width
    pub fn translate_percent(&self) -> f64 {
        // subtraction keeps step 0 at +0.0 rather than -0.0
        0.0 - self.index as f64 * 100.0
    }

    /// CSS transform for the track
    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.translate_percent())
    }
}

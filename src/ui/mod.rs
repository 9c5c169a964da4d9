//! UI state
//!
//! Small state machines behind the interactive parts of the pages: the step
//! carousel, the sticky CTA visibility, the header, the FAQ accordion and the
//! content guard.

pub mod carousel;
pub mod faq;
pub mod guard;
pub mod header;
pub mod labels;
pub mod visibility;

pub use carousel::{StepCarousel, SwipeDirection, SwipeGesture};
pub use faq::{faq_items, faq_keys, FaqAccordion, FaqItem};
pub use guard::{ContentGuard, DocumentEvent, KeyPress};
pub use header::{language_options, HeaderState, LanguageOption};
pub use labels::{missing_required_keys, required_keys, STICKY_CTA_KEY};
pub use visibility::{observe, sticky_cta, ElementBounds, VisibilityObserver, VisibilityStream};

//! Navigation and scroll coordination
//!
//! Anchor registry, the host page seam, the scroll coordinator, the
//! cross-page handoff and the header navigator that ties them together.

pub mod handoff;
pub mod navigator;
pub mod page;
pub mod scroll;
pub mod section;

pub use handoff::NavigationHandoff;
pub use navigator::{NavOutcome, Route, SiteNavigator};
pub use page::{HeadlessPage, Page, ScrollBehavior, ScrollCommand};
pub use scroll::{Arrival, ScrollContext, ScrollCoordinator};
pub use section::Section;

//! Scroll coordination
//!
//! Turns "go to this section" into a window scroll, compensating for the
//! fixed header. The margin depends on where the request comes from:
//!
//! | context                              | margin                  |
//! |--------------------------------------|-------------------------|
//! | in-page, viewport >= breakpoint      | header height (80)      |
//! | in-page, viewport < breakpoint       | header height - 15 (65) |
//! | header link, home already mounted    | 65                      |
//! | arrival after cross-page navigation  | 15                      |
//!
//! Arrivals first jump to the top instantly, then scroll smoothly to the
//! target once the settle delay has elapsed.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

use super::page::{Page, ScrollBehavior};
use super::section::Section;
use crate::config::ScrollConfig;
use crate::utils::logging::{log_missing_anchor, log_scroll};

/// Offsets closer than this to the current position count as converged
const CONVERGED_EPSILON: f64 = 0.5;

/// How the page was reached when an arrival scroll runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrival {
    /// Header navigation while the home route is already mounted
    AlreadyMounted,
    /// First render of the home route after a cross-page navigation
    FreshNavigation,
}

/// Where a scroll request originates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollContext {
    InPage,
    Arriving(Arrival),
}

impl ScrollContext {
    pub fn as_str(self) -> &'static str {
        match self {
            ScrollContext::InPage => "in-page",
            ScrollContext::Arriving(Arrival::AlreadyMounted) => "arriving-mounted",
            ScrollContext::Arriving(Arrival::FreshNavigation) => "arriving-fresh",
        }
    }
}

/// Computes and performs section scrolls on a [`Page`]
#[derive(Clone)]
pub struct ScrollCoordinator {
    page: Arc<dyn Page>,
    config: ScrollConfig,
}

impl ScrollCoordinator {
    pub fn new(page: Arc<dyn Page>, config: ScrollConfig) -> Self {
        Self { page, config }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Whether the viewport is below the mobile breakpoint
    pub fn is_mobile(&self) -> bool {
        self.page.viewport_width() < self.config.mobile_breakpoint
    }

    /// Distance kept between the section and the top of the viewport
    pub fn margin(&self, context: ScrollContext) -> f64 {
        match context {
            ScrollContext::InPage if self.is_mobile() => {
                self.config.header_height - self.config.mobile_header_offset
            }
            ScrollContext::InPage => self.config.header_height,
            ScrollContext::Arriving(Arrival::AlreadyMounted) => self.config.mounted_arrival_margin,
            ScrollContext::Arriving(Arrival::FreshNavigation) => self.config.fresh_arrival_margin,
        }
    }

    /// Window offset that brings `section` under the header, if it is on the page
    pub fn target_offset(&self, section: Section, context: ScrollContext) -> Option<f64> {
        let top = self.page.element_top(section.id())?;
        let document_top = top + self.page.scroll_y();
        Some((document_top - self.margin(context)).max(0.0))
    }

    /// Smoothly scroll to a section
    ///
    /// Missing sections are ignored. Returns whether a scroll was issued.
    pub fn scroll_to_anchor(&self, section: Section, context: ScrollContext) -> bool {
        let Some(target) = self.target_offset(section, context) else {
            log_missing_anchor(section.id(), context.as_str());
            return false;
        };

        if (self.page.scroll_y() - target).abs() < CONVERGED_EPSILON {
            trace!(anchor = section.id(), target = target, "Already at target, scroll skipped");
            return false;
        }

        self.page.scroll_to(target, ScrollBehavior::Smooth);
        log_scroll(section.id(), target, context.as_str());
        true
    }

    pub fn scroll_to_top(&self, behavior: ScrollBehavior) {
        self.page.scroll_to(0.0, behavior);
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.config.settle_delay_ms)
    }

    /// Scroll to a section on a freshly mounted page
    ///
    /// Jumps to the top immediately (cancelling scroll restoration) and
    /// schedules the smooth scroll after the settle delay. The task is never
    /// cancelled; if the section is gone by then it does nothing.
    /// Must be called from within a tokio runtime.
    pub fn arrive_at(&self, section: Section) -> JoinHandle<bool> {
        self.scroll_to_top(ScrollBehavior::Instant);

        let coordinator = self.clone();
        let delay = self.settle_delay();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            coordinator.scroll_to_anchor(section, ScrollContext::Arriving(Arrival::FreshNavigation))
        })
    }
}

impl std::fmt::Debug for ScrollCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollCoordinator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

//! Site navigation
//!
//! Handles header clicks across the three routes. A section link on the home
//! page scrolls in place; from any other route it hands the section off and
//! navigates home, where [`SiteNavigator::mount`] finishes the scroll.

use std::fmt;

use tokio::task::JoinHandle;

use super::handoff::NavigationHandoff;
use super::page::ScrollBehavior;
use super::scroll::{Arrival, ScrollContext, ScrollCoordinator};
use super::section::Section;
use crate::ui::header::HeaderState;
use crate::utils::logging::log_navigation;

/// A route of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    ChiSiamo,
    Contatti,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::ChiSiamo, Route::Contatti];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::ChiSiamo => "/chi-siamo",
            Route::Contatti => "/contatti",
        }
    }

    /// Match a URL path, ignoring a trailing slash
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Translation key of the route's navigation label; home is the logo
    pub fn label_key(self) -> Option<&'static str> {
        match self {
            Route::Home => None,
            Route::ChiSiamo => Some("nav.chiSiamo"),
            Route::Contatti => Some("nav.contatti"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// What a section click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Already on home; `issued` is false when the section was missing or reached
    ScrolledInPlace { issued: bool },
    /// Section handed off and the router moved to this route
    Navigated(Route),
}

/// Header navigation controller
#[derive(Debug)]
pub struct SiteNavigator {
    route: Route,
    coordinator: ScrollCoordinator,
    handoff: NavigationHandoff,
    header: HeaderState,
}

impl SiteNavigator {
    pub fn new(initial: Route, coordinator: ScrollCoordinator, handoff: NavigationHandoff) -> Self {
        let header = HeaderState::new(coordinator.config().scrolled_threshold);
        Self {
            route: initial,
            coordinator,
            handoff,
            header,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut HeaderState {
        &mut self.header
    }

    pub fn coordinator(&self) -> &ScrollCoordinator {
        &self.coordinator
    }

    pub fn handoff(&self) -> &NavigationHandoff {
        &self.handoff
    }

    fn navigate(&mut self, to: Route, pending: Option<Section>) {
        log_navigation(self.route.path(), to.path(), pending.map(Section::id));
        self.route = to;
    }

    /// Header link to a home section
    pub fn click_section(&mut self, section: Section) -> NavOutcome {
        self.header.close_menu();

        if self.route == Route::Home {
            let issued = self
                .coordinator
                .scroll_to_anchor(section, ScrollContext::Arriving(Arrival::AlreadyMounted));
            return NavOutcome::ScrolledInPlace { issued };
        }

        self.handoff.request_scroll(section);
        self.navigate(Route::Home, Some(section));
        NavOutcome::Navigated(Route::Home)
    }

    /// Logo click: back home, smoothly to the top
    pub fn click_logo(&mut self) {
        self.header.close_menu();
        self.coordinator.scroll_to_top(ScrollBehavior::Smooth);
        if self.route != Route::Home {
            self.navigate(Route::Home, None);
        }
    }

    /// Link to another route: jump to the top instantly
    pub fn click_route(&mut self, route: Route) {
        self.header.close_menu();
        self.coordinator.scroll_to_top(ScrollBehavior::Instant);
        if self.route != route {
            self.navigate(route, None);
        }
    }

    /// Called once the router has rendered `route`
    ///
    /// On the home route a pending handoff is consumed and scrolled to after
    /// the settle delay; the returned handle resolves when that scroll ran.
    /// Other routes leave any pending target in place.
    pub fn mount(&mut self, route: Route) -> Option<JoinHandle<bool>> {
        self.route = route;
        if route != Route::Home {
            return None;
        }

        let section = self.handoff.consume_pending_scroll()?;
        Some(self.coordinator.arrive_at(section))
    }
}

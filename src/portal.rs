//! Route-keyed navigation.
//!
//! The portal owns the page loader and the state of the one page on screen.
//! Navigation is split in two so a slow load can be overtaken by a newer one:
//!
//! ```text
//! begin(route)  → bumps the generation, state = Loading, returns a ticket
//! loader.load() → runs without holding the portal
//! finish(ticket, result)
//!               → applied only if ticket.generation is still current,
//!                 otherwise discarded
//! ```
//!
//! Every applied load gets a brand-new [`PageSession`], so slider state never
//! leaks from one page visit to the next.

use crate::loader::{LoadError, LoadedPage, PageLoader};
use crate::routes::Route;
use crate::session::PageSession;

/// Identifies one navigation. Only the latest ticket may change the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub route_key: String,
}

#[derive(Debug)]
pub enum PageState {
    Home,
    Loading { route_key: String },
    Ready(Box<PageSession>),
    NotFound { path: String },
    Failed { route_key: String, reason: String },
}

impl PageState {
    pub fn session(&self) -> Option<&PageSession> {
        match self {
            PageState::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut PageSession> {
        match self {
            PageState::Ready(session) => Some(session),
            _ => None,
        }
    }
}

pub struct Portal {
    loader: PageLoader,
    generation: u64,
    state: PageState,
}

impl Portal {
    pub fn new(loader: PageLoader) -> Self {
        Self {
            loader,
            generation: 0,
            state: PageState::Home,
        }
    }

    pub fn loader(&self) -> &PageLoader {
        &self.loader
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PageState {
        &mut self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start navigating to `route`.
    ///
    /// Home and unmatched routes resolve immediately and return `None`; they
    /// still bump the generation so any load in flight becomes stale.
    pub fn begin(&mut self, route: &Route) -> Option<LoadTicket> {
        self.generation += 1;
        match route {
            Route::Home => {
                self.state = PageState::Home;
                None
            }
            Route::NotFound { path } => {
                self.state = PageState::NotFound { path: path.clone() };
                None
            }
            Route::Section { .. } => {
                let route_key = route.content_key().unwrap_or_default().to_string();
                self.state = PageState::Loading {
                    route_key: route_key.clone(),
                };
                Some(LoadTicket {
                    generation: self.generation,
                    route_key,
                })
            }
        }
    }

    /// Apply a load result if `ticket` is still the current navigation.
    ///
    /// Returns `false` when the result was stale and has been dropped.
    pub fn finish(&mut self, ticket: LoadTicket, result: Result<LoadedPage, LoadError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                route_key = %ticket.route_key,
                stale = ticket.generation,
                current = self.generation,
                "discarding stale page load"
            );
            return false;
        }
        self.state = match result {
            Ok(loaded) => PageState::Ready(Box::new(PageSession::new(loaded.content))),
            Err(LoadError::ContentNotFound { route_key, .. }) => PageState::NotFound {
                path: format!("/{route_key}"),
            },
            Err(err @ LoadError::LoadFailure { .. }) => PageState::Failed {
                route_key: err.route_key().to_string(),
                reason: err.to_string(),
            },
        };
        true
    }

    /// Navigate and wait for the page, the common single-caller case.
    pub async fn navigate(&mut self, route: &Route) -> &PageState {
        if let Some(ticket) = self.begin(route) {
            let result = self.loader.load(&ticket.route_key).await;
            self.finish(ticket, result);
        }
        &self.state
    }
}

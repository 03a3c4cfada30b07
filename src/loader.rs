//! Page content loading with a single fallback.
//!
//! Resolution for a route key:
//!
//! ```text
//! fetch(key) ── Some ──────────────────────────────→ page
//!    │ None                     │ Err
//!    ▼                          ▼
//! fetch(fallback)          fetch(fallback)          (exactly one attempt)
//!    │ Some → page             │ Some → page
//!    │ None → ContentNotFound  │ None / Err → LoadFailure
//!    │ Err  → LoadFailure
//! ```
//!
//! Every store error is converted here into one of the two [`LoadError`]
//! variants; nothing propagates further as a raw store error.

use crate::content::PageContent;
use crate::store::{ContentStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("no content for '{route_key}' and fallback '{fallback}' is missing too")]
    ContentNotFound { route_key: String, fallback: String },
    #[error("failed to load '{route_key}': {source}")]
    LoadFailure {
        route_key: String,
        #[source]
        source: StoreError,
    },
}

impl LoadError {
    pub fn route_key(&self) -> &str {
        match self {
            LoadError::ContentNotFound { route_key, .. } | LoadError::LoadFailure { route_key, .. } => {
                route_key
            }
        }
    }
}

/// A successfully loaded page and how it was resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage {
    /// The key that was asked for.
    pub route_key: String,
    pub content: PageContent,
    /// True when `content` came from the fallback key.
    pub used_fallback: bool,
}

/// Resolves route keys against an injected [`ContentStore`].
#[derive(Clone)]
pub struct PageLoader {
    store: Arc<dyn ContentStore>,
    fallback: String,
}

impl PageLoader {
    pub fn new(store: Arc<dyn ContentStore>, fallback: impl Into<String>) -> Self {
        Self {
            store,
            fallback: fallback.into(),
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn store(&self) -> &Arc<dyn ContentStore> {
        &self.store
    }

    pub async fn load(&self, route_key: &str) -> Result<LoadedPage, LoadError> {
        tracing::debug!(route_key, "loading page content");
        match self.store.fetch_page_content(route_key).await {
            Ok(Some(content)) => Ok(LoadedPage {
                route_key: route_key.to_string(),
                content,
                used_fallback: false,
            }),
            Ok(None) if route_key == self.fallback => {
                tracing::warn!(route_key, "fallback page is missing from the store");
                Err(self.not_found(route_key))
            }
            Ok(None) => {
                tracing::info!(route_key, fallback = %self.fallback, "no content, using fallback");
                match self.store.fetch_page_content(&self.fallback).await {
                    Ok(Some(content)) => Ok(self.fallback_page(route_key, content)),
                    Ok(None) => Err(self.not_found(route_key)),
                    Err(source) => Err(self.failure(route_key, source)),
                }
            }
            Err(err) => {
                tracing::warn!(route_key, error = %err, "store read failed, trying fallback");
                match self.store.fetch_page_content(&self.fallback).await {
                    Ok(Some(content)) => Ok(self.fallback_page(route_key, content)),
                    Ok(None) => Err(self.failure(route_key, err)),
                    Err(source) => Err(self.failure(route_key, source)),
                }
            }
        }
    }

    fn fallback_page(&self, route_key: &str, content: PageContent) -> LoadedPage {
        LoadedPage {
            route_key: route_key.to_string(),
            content,
            used_fallback: true,
        }
    }

    fn not_found(&self, route_key: &str) -> LoadError {
        LoadError::ContentNotFound {
            route_key: route_key.to_string(),
            fallback: self.fallback.clone(),
        }
    }

    fn failure(&self, route_key: &str, source: StoreError) -> LoadError {
        tracing::error!(route_key, error = %source, "page load failed");
        LoadError::LoadFailure {
            route_key: route_key.to_string(),
            source,
        }
    }
}

//! URL paths understood by the portal.
//!
//! ```text
//! /                                  → Home
//! /:section                          → Section, key = section
//! /:section/:subsection              → Section, key = subsection
//! /:section/:subsection/:item        → Section, key = item
//! anything else                      → NotFound
//! ```
//!
//! Service pages such as `/actualizacion-datos` are plain one-segment routes
//! keyed by their own name. Query strings and fragments are ignored.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Section {
        section: String,
        subsection: Option<String>,
        item: Option<String>,
    },
    NotFound {
        path: String,
    },
}

pub(crate) fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let trimmed = path.split(['?', '#']).next().unwrap_or_default();
        let inner = trimmed.trim_matches('/');
        if inner.is_empty() {
            return Route::Home;
        }
        let segments: Vec<&str> = inner.split('/').collect();
        if segments.len() > 3 || !segments.iter().all(|s| is_valid_segment(s)) {
            return Route::NotFound {
                path: path.to_string(),
            };
        }
        let mut parts = segments.into_iter().map(str::to_string);
        Route::Section {
            section: parts.next().unwrap_or_default(),
            subsection: parts.next(),
            item: parts.next(),
        }
    }

    /// Content store key for this route: the deepest path segment.
    pub fn content_key(&self) -> Option<&str> {
        match self {
            Route::Section {
                section,
                subsection,
                item,
            } => Some(
                item.as_deref()
                    .or(subsection.as_deref())
                    .unwrap_or(section.as_str()),
            ),
            Route::Home | Route::NotFound { .. } => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Section {
                section,
                subsection,
                item,
            } => {
                write!(f, "/{section}")?;
                for segment in [subsection, item].into_iter().flatten() {
                    write!(f, "/{segment}")?;
                }
                Ok(())
            }
            Route::NotFound { path } => write!(f, "{path}"),
        }
    }
}

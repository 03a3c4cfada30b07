//! # Civic Portal
//!
//! Content pages for a public-sector information portal. Every page is an
//! ordered list of image galleries, videos, PDF documents and rich-text
//! blocks served from a keyed content store and rendered to static HTML.
//!
//! # Data Flow
//!
//! ```text
//! route ─→ Portal::begin ─→ PageLoader::load ─→ ContentStore::fetch_page_content
//!                                  │                 (fallback page on a miss)
//!                                  ▼
//!          Portal::finish ─→ PageSession ─→ partition + filters ─→ render
//!          (stale tickets dropped)  │
//!                                   └─ SliderStates, one entry per gallery item
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Page and item model, JSON wire format, typed invariants |
//! | [`store`] | `ContentStore` trait and the static, delayed in-memory store |
//! | [`loader`] | Route key → page with a single fallback, typed load errors |
//! | [`routes`] | URL path parsing; the content key is the deepest segment |
//! | [`partition`] | PDF / non-PDF split, ordering, search and category filters |
//! | [`slider`] | Per-item gallery state: index, modal, zoom, pan, playback |
//! | [`layout`] | Column span → responsive grid classes |
//! | [`session`] | One page visit: sliders, filters, open PDF, interactions |
//! | [`portal`] | Generation-counted navigation between page states |
//! | [`render`] | Maud HTML for every page state |
//! | [`site`] | Renders every stored page into an output directory |
//! | [`config`] | `portal.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI report formatting |
//!
//! # Design Decisions
//!
//! ## Injected Store
//!
//! Nothing reads page content except through `Arc<dyn ContentStore>`, built
//! once in the binary and handed to the [`loader::PageLoader`]. Tests script
//! the store to drive every fallback path.
//!
//! ## Slider State Lives With the Page Visit
//!
//! Gallery state is keyed by item id inside the [`session::PageSession`] and
//! created on first use. A new load creates a new session, so returning to a
//! page always starts every gallery at its first slide.
//!
//! ## Trusted Rich Text
//!
//! Rich-text bodies are emitted verbatim. All other interpolated content is
//! escaped by Maud.

pub mod config;
pub mod content;
pub mod layout;
pub mod loader;
pub mod output;
pub mod partition;
pub mod portal;
pub mod render;
pub mod routes;
pub mod session;
pub mod site;
pub mod slider;
pub mod store;

#[cfg(test)]
pub(crate) mod test_helpers;

//! Content store: the keyed table of page content.
//!
//! The rest of the crate only sees the [`ContentStore`] trait, so the static
//! table can be swapped for a real backend without touching the loader or the
//! renderer. Reads are async and may fail; a miss is `Ok(None)`, not an error.
//!
//! [`StaticStore`] is the bundled implementation. It serves pages from memory
//! after a fixed artificial delay, populated either from the built-in seed
//! (`static/content.json`) or from a directory of page JSON files:
//!
//! ```text
//! content/
//! ├── actualizacion-datos.json     # one PageContent object per file
//! ├── declaracion-patrimonial.json
//! └── servicios/
//!     └── solicitud-finiquito.json # nested directories are walked too
//! ```
//!
//! Pages are keyed by their `id` field, not their file name.

use crate::content::{ContentError, PageContent};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use walkdir::WalkDir;

const BUILTIN_CONTENT: &str = include_str!("../static/content.json");

/// Delay applied to every read by default, standing in for network latency.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(500);

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid content: {0}")]
    Content(#[from] ContentError),
    #[error("Duplicate page id '{0}'")]
    DuplicatePage(String),
    #[error("Content store unavailable: {0}")]
    Unavailable(String),
}

/// Read interface consumed by the page loader.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch one page by id. `Ok(None)` means the id is unknown.
    async fn fetch_page_content(&self, page_id: &str) -> Result<Option<PageContent>, StoreError>;

    /// Every page id the store can serve, sorted.
    async fn page_ids(&self) -> Result<Vec<String>, StoreError>;
}

/// In-memory store with a fixed read delay.
#[derive(Debug, Clone)]
pub struct StaticStore {
    pages: HashMap<String, PageContent>,
    delay: Duration,
}

impl StaticStore {
    /// Build a store from pages, validating each one and rejecting duplicate ids.
    pub fn new(pages: Vec<PageContent>) -> Result<Self, StoreError> {
        let mut table = HashMap::with_capacity(pages.len());
        for page in pages {
            page.validate()?;
            if table.contains_key(&page.id) {
                return Err(StoreError::DuplicatePage(page.id));
            }
            table.insert(page.id.clone(), page);
        }
        Ok(Self {
            pages: table,
            delay: DEFAULT_FETCH_DELAY,
        })
    }

    /// The seed content compiled into the binary.
    pub fn builtin() -> Result<Self, StoreError> {
        let pages: Vec<PageContent> =
            serde_json::from_str(BUILTIN_CONTENT).map_err(|source| StoreError::Json {
                path: PathBuf::from("static/content.json"),
                source,
            })?;
        Self::new(pages)
    }

    /// Load every `*.json` file under `dir` as one page.
    pub fn from_dir(dir: &Path) -> Result<Self, StoreError> {
        let mut pages = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|e| e != "json") {
                continue;
            }
            let raw = fs::read_to_string(path)?;
            let page: PageContent = serde_json::from_str(&raw).map_err(|source| StoreError::Json {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!(page = %page.id, path = %path.display(), "loaded page file");
            pages.push(page);
        }
        Self::new(pages)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[async_trait]
impl ContentStore for StaticStore {
    async fn fetch_page_content(&self, page_id: &str) -> Result<Option<PageContent>, StoreError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.pages.get(page_id).cloned())
    }

    async fn page_ids(&self) -> Result<Vec<String>, StoreError> {
        let mut ids: Vec<String> = self.pages.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

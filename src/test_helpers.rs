//! Shared test utilities for the civic-portal test suite.
//!
//! Builders for every content kind, a zero-delay store, and a scripted store
//! whose replies are fixed up front so loader fallback paths can be driven
//! deterministically.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let store = store_with(vec![page_with("inicio", vec![
//!     rich_item("intro", 1),
//!     image_item("galeria", 2, 3),
//!     pdf_item("manual", 1, "Manuales", "Manual de Auditoría"),
//! ])]);
//! ```

use async_trait::async_trait;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::content::{
    ColumnSpan, ContentBody, ContentItem, Gallery, ImageEntry, MarkupFormat, PageContent,
    PdfDocument, RichText, VideoEntry, VideoKind,
};
use crate::store::{ContentStore, StaticStore, StoreError};

// =========================================================================
// Item builders
// =========================================================================

fn item(id: &str, order: i32, category: &str, title: String, body: ContentBody) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        title,
        description: format!("Description of {id}"),
        category: category.to_string(),
        order,
        column_span: ColumnSpan::new(6).unwrap(),
        last_updated: "2024-12-25".to_string(),
        body,
    }
}

/// Image gallery with `count` entries.
pub fn image_item(id: &str, order: i32, count: usize) -> ContentItem {
    let images = (0..count)
        .map(|n| ImageEntry {
            id: format!("{id}-{n}"),
            src: format!("https://img.example.org/{id}/{n}.jpg"),
            alt: format!("Alt {n}"),
            title: format!("Photo {n}"),
        })
        .collect();
    item(
        id,
        order,
        "Ubicaciones",
        format!("Gallery {id}"),
        ContentBody::Image {
            images: Gallery::new(images).unwrap(),
        },
    )
}

/// Embedded video gallery with `count` entries.
pub fn video_item(id: &str, order: i32, count: usize) -> ContentItem {
    let videos = (0..count)
        .map(|n| VideoEntry {
            id: format!("{id}-{n}"),
            src: format!("https://video.example.org/embed/{id}-{n}"),
            kind: VideoKind::Embedded,
            title: format!("Clip {n}"),
            thumbnail: None,
        })
        .collect();
    item(
        id,
        order,
        "Tutoriales",
        format!("Videos {id}"),
        ContentBody::Video {
            videos: Gallery::new(videos).unwrap(),
        },
    )
}

pub fn pdf_item(id: &str, order: i32, category: &str, title: &str) -> ContentItem {
    item(
        id,
        order,
        category,
        title.to_string(),
        ContentBody::Pdf(PdfDocument {
            url: format!("/docs/{id}.pdf"),
            thumbnail: None,
            size: Some("1.2 MB".to_string()),
            subtype: None,
            download_count: Some(10),
        }),
    )
}

pub fn rich_item(id: &str, order: i32) -> ContentItem {
    item(
        id,
        order,
        "Guías",
        format!("Text {id}"),
        ContentBody::RichText(RichText {
            body: format!("<p>Body of {id}</p>"),
            format: MarkupFormat::Html,
        }),
    )
}

pub fn page_with(id: &str, items: Vec<ContentItem>) -> PageContent {
    PageContent {
        id: id.to_string(),
        title: format!("Page {id}"),
        description: format!("About {id}"),
        items,
    }
}

// =========================================================================
// Stores
// =========================================================================

/// Static store over `pages` with no artificial delay. Panics on invalid pages.
pub fn store_with(pages: Vec<PageContent>) -> StaticStore {
    StaticStore::new(pages)
        .unwrap_or_else(|e| panic!("invalid test pages: {e}"))
        .with_delay(Duration::ZERO)
}

/// Write `page` as `<dir>/<id>.json`.
pub fn write_page(dir: &Path, page: &PageContent) {
    let json = serde_json::to_string_pretty(page).unwrap();
    fs::write(dir.join(format!("{}.json", page.id)), json).unwrap();
}

#[derive(Debug, Clone, Copy)]
pub enum Reply {
    /// Return a page with the requested id.
    Hit,
    Miss,
    Fail,
}

/// Store that answers each fetch with the next scripted [`Reply`] and records
/// the requested ids. Exhausted scripts answer `Miss`.
#[derive(Clone)]
pub struct ScriptedStore {
    replies: Arc<Mutex<Vec<Reply>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ScriptedStore {
    pub fn new(mut replies: Vec<Reply>) -> Self {
        replies.reverse();
        Self {
            replies: Arc::new(Mutex::new(replies)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentStore for ScriptedStore {
    async fn fetch_page_content(&self, page_id: &str) -> Result<Option<PageContent>, StoreError> {
        self.requests.lock().unwrap().push(page_id.to_string());
        let reply = self.replies.lock().unwrap().pop().unwrap_or(Reply::Miss);
        match reply {
            Reply::Hit => Ok(Some(page_with(page_id, vec![rich_item("intro", 1)]))),
            Reply::Miss => Ok(None),
            Reply::Fail => Err(StoreError::Unavailable("scripted failure".to_string())),
        }
    }

    async fn page_ids(&self) -> Result<Vec<String>, StoreError> {
        Ok(Vec::new())
    }
}

/// Store that lists every page of `inner` plus `broken`, and fails whenever
/// `broken` is fetched.
pub struct BrokenPageStore {
    pub inner: StaticStore,
    pub broken: String,
}

#[async_trait]
impl ContentStore for BrokenPageStore {
    async fn fetch_page_content(&self, page_id: &str) -> Result<Option<PageContent>, StoreError> {
        if page_id == self.broken {
            return Err(StoreError::Unavailable(format!("{page_id} offline")));
        }
        self.inner.fetch_page_content(page_id).await
    }

    async fn page_ids(&self) -> Result<Vec<String>, StoreError> {
        let mut ids = self.inner.page_ids().await?;
        ids.push(self.broken.clone());
        ids.sort();
        Ok(ids)
    }
}

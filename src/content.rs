//! Page content model.
//!
//! A page is an ordered list of heterogeneous [`ContentItem`]s. Every item
//! carries the same display fields (title, category, order, column span) plus
//! a [`ContentBody`] that decides how it renders:
//!
//! ```text
//! type = "image"    → Gallery<ImageEntry>   (slider + zoom modal)
//! type = "video"    → Gallery<VideoEntry>   (slider + fullscreen modal)
//! type = "pdf"      → PdfDocument           (card + viewer)
//! type = "content"  → RichText              (trusted markup, verbatim)
//! ```
//!
//! ## Wire Format
//!
//! Pages are stored as JSON, one object per page:
//!
//! ```json
//! {
//!   "id": "actualizacion-datos",
//!   "title": "Actualización de Datos",
//!   "description": "...",
//!   "items": [
//!     { "id": "galeria", "type": "image", "title": "...", "description": "...",
//!       "category": "Ubicaciones", "order": 2, "columnSpan": 8,
//!       "lastUpdated": "2024-12-25",
//!       "images": [ { "id": "a", "src": "...", "alt": "...", "title": "..." } ] }
//!   ]
//! }
//! ```
//!
//! `col` is accepted for `columnSpan` and `content` for `items`.
//!
//! ## Typed Invariants
//!
//! [`ColumnSpan`] only exists for 1..=12 and [`Gallery`] is never empty. Both
//! are checked during deserialization, so a malformed store entry fails to
//! load rather than rendering an empty card.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContentError {
    #[error("column span must be between 1 and 12, got {0}")]
    ColumnSpan(i64),
    #[error("gallery must contain at least one entry")]
    EmptyGallery,
    #[error("duplicate item id '{item}' in page '{page}'")]
    DuplicateItem { page: String, item: String },
}

/// Desired width of an item on a 12-column grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ColumnSpan(u8);

impl ColumnSpan {
    pub const FULL: ColumnSpan = ColumnSpan(12);

    pub fn new(span: u8) -> Result<Self, ContentError> {
        Self::try_from(i64::from(span))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for ColumnSpan {
    type Error = ContentError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=12).contains(&value) {
            Ok(ColumnSpan(value as u8))
        } else {
            Err(ContentError::ColumnSpan(value))
        }
    }
}

impl From<ColumnSpan> for u8 {
    fn from(span: ColumnSpan) -> u8 {
        span.0
    }
}

/// A non-empty, ordered sequence of gallery entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<T>", into = "Vec<T>")]
#[serde(bound(
    deserialize = "T: Deserialize<'de> + Clone",
    serialize = "T: Serialize + Clone"
))]
pub struct Gallery<T: Clone>(Vec<T>);

impl<T: Clone> Gallery<T> {
    pub fn new(entries: Vec<T>) -> Result<Self, ContentError> {
        Self::try_from(entries)
    }

    /// Number of entries; always at least 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Galleries are never empty; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn first(&self) -> &T {
        &self.0[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn is_multiple(&self) -> bool {
        self.0.len() > 1
    }
}

impl<T: Clone> TryFrom<Vec<T>> for Gallery<T> {
    type Error = ContentError;

    fn try_from(entries: Vec<T>) -> Result<Self, Self::Error> {
        if entries.is_empty() {
            Err(ContentError::EmptyGallery)
        } else {
            Ok(Gallery(entries))
        }
    }
}

impl<T: Clone> From<Gallery<T>> for Vec<T> {
    fn from(gallery: Gallery<T>) -> Vec<T> {
        gallery.0
    }
}

impl<'a, T: Clone> IntoIterator for &'a Gallery<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub title: String,
}

/// How a video source is played back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    /// Third-party player page loaded in an `<iframe>`.
    #[serde(alias = "iframe")]
    Embedded,
    /// Media file played by a `<video>` element.
    #[serde(alias = "video")]
    Native,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub id: String,
    pub src: String,
    #[serde(alias = "type")]
    pub kind: VideoKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfDocument {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Human-readable size label, e.g. `"2.5 MB"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Document kind shown on the card badge (`"Manual"`, `"Formulario"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_count: Option<u64>,
}

impl PdfDocument {
    pub fn badge(&self) -> &str {
        self.subtype.as_deref().unwrap_or("PDF")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupFormat {
    #[default]
    Html,
    Markdown,
}

/// Trusted markup emitted into the page without escaping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(rename = "content")]
    pub body: String,
    #[serde(default)]
    pub format: MarkupFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBody {
    Image { images: Gallery<ImageEntry> },
    Video { videos: Gallery<VideoEntry> },
    Pdf(PdfDocument),
    #[serde(rename = "content")]
    RichText(RichText),
}

/// Discriminant of [`ContentBody`], used for dispatch and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Image,
    Video,
    Pdf,
    RichText,
}

impl ContentKind {
    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Image => "image",
            ContentKind::Video => "video",
            ContentKind::Pdf => "pdf",
            ContentKind::RichText => "content",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Display position within the item's partition (PDF or non-PDF).
    pub order: i32,
    #[serde(alias = "col")]
    pub column_span: ColumnSpan,
    pub last_updated: String,
    #[serde(flatten)]
    pub body: ContentBody,
}

impl ContentItem {
    pub fn kind(&self) -> ContentKind {
        match self.body {
            ContentBody::Image { .. } => ContentKind::Image,
            ContentBody::Video { .. } => ContentKind::Video,
            ContentBody::Pdf(_) => ContentKind::Pdf,
            ContentBody::RichText(_) => ContentKind::RichText,
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.kind() == ContentKind::Pdf
    }

    /// Entry count for image and video galleries, `None` otherwise.
    pub fn gallery_len(&self) -> Option<usize> {
        match &self.body {
            ContentBody::Image { images } => Some(images.len()),
            ContentBody::Video { videos } => Some(videos.len()),
            ContentBody::Pdf(_) | ContentBody::RichText(_) => None,
        }
    }

    pub fn pdf(&self) -> Option<&PdfDocument> {
        match &self.body {
            ContentBody::Pdf(doc) => Some(doc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(alias = "content")]
    pub items: Vec<ContentItem>,
}

impl PageContent {
    /// Check the invariants serde cannot express: item ids are unique.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                return Err(ContentError::DuplicateItem {
                    page: self.id.clone(),
                    item: item.id.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn find_item(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn pdf_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_pdf()).count()
    }
}

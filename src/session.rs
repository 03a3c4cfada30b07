//! The page render context.
//!
//! A [`PageSession`] exists for exactly one loaded page. It owns the page
//! content, the slider table for its galleries, the search and category
//! filters, and the PDF currently open in the viewer. Navigating away drops
//! the session and everything in it.
//!
//! User input arrives as [`Interaction`]s. Gallery interactions are clamped,
//! never rejected; the only failures are interactions that name an item the
//! page does not have, or that ask a non-gallery item to behave like one.

use crate::content::{ContentItem, ContentKind, PageContent};
use crate::partition::{self, CategorySelector};
use crate::slider::{Point, SliderState, SliderStates};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("no item '{0}' on this page")]
    UnknownItem(String),
    #[error("item '{0}' has no gallery")]
    NotAGallery(String),
    #[error("item '{0}' is not a PDF document")]
    NotAPdf(String),
    #[error("unrecognised interaction '{0}'")]
    Parse(String),
}

/// A single user action on the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    Next { item: String },
    Prev { item: String },
    Select { item: String, index: usize },
    OpenModal { item: String, index: usize },
    CloseModal { item: String },
    ModalNext { item: String },
    ModalPrev { item: String },
    ZoomIn { item: String },
    ZoomOut { item: String },
    ResetZoom { item: String },
    DragStart { item: String, at: Point },
    DragMove { item: String, at: Point },
    DragEnd { item: String },
    TogglePlayback { item: String },
    Search(String),
    Category(String),
    OpenPdf { item: String },
    ClosePdf,
}

fn parse_point(raw: &str) -> Option<Point> {
    let (x, y) = raw.split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Parses the compact `action:item[:arg]` form used on the command line:
///
/// ```text
/// next:galeria            open:galeria:2        drag-start:galeria:10,20
/// search:manual           category:Formularios  close-pdf
/// ```
impl FromStr for Interaction {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SessionError::Parse(s.to_string());
        let (action, rest) = s.split_once(':').unwrap_or((s, ""));
        let mut args = rest.splitn(2, ':');
        let item = args.next().filter(|i| !i.is_empty()).map(str::to_string);
        let arg = args.next();

        let item_only = |build: fn(String) -> Interaction| item.clone().map(build).ok_or_else(err);
        let index = || arg.and_then(|a| a.parse::<usize>().ok()).ok_or_else(err);
        let point = || arg.and_then(parse_point).ok_or_else(err);

        match action {
            "next" => item_only(|item| Interaction::Next { item }),
            "prev" => item_only(|item| Interaction::Prev { item }),
            "close" => item_only(|item| Interaction::CloseModal { item }),
            "modal-next" => item_only(|item| Interaction::ModalNext { item }),
            "modal-prev" => item_only(|item| Interaction::ModalPrev { item }),
            "zoom-in" => item_only(|item| Interaction::ZoomIn { item }),
            "zoom-out" => item_only(|item| Interaction::ZoomOut { item }),
            "reset-zoom" => item_only(|item| Interaction::ResetZoom { item }),
            "drag-end" => item_only(|item| Interaction::DragEnd { item }),
            "play" => item_only(|item| Interaction::TogglePlayback { item }),
            "open-pdf" => item_only(|item| Interaction::OpenPdf { item }),
            "select" => Ok(Interaction::Select {
                item: item.clone().ok_or_else(err)?,
                index: index()?,
            }),
            "open" => Ok(Interaction::OpenModal {
                item: item.clone().ok_or_else(err)?,
                index: if arg.is_some() { index()? } else { 0 },
            }),
            "drag-start" => Ok(Interaction::DragStart {
                item: item.clone().ok_or_else(err)?,
                at: point()?,
            }),
            "drag-move" => Ok(Interaction::DragMove {
                item: item.clone().ok_or_else(err)?,
                at: point()?,
            }),
            "search" => Ok(Interaction::Search(rest.to_string())),
            "category" if !rest.is_empty() => Ok(Interaction::Category(rest.to_string())),
            "close-pdf" => Ok(Interaction::ClosePdf),
            _ => Err(err()),
        }
    }
}

/// What the page should display right now.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    /// Non-PDF items after the search filter, in display order.
    pub non_pdf: Vec<&'a ContentItem>,
    /// PDF items after the category and search filters, in display order.
    pub pdf: Vec<&'a ContentItem>,
    /// Filter bar categories, `"All"` first.
    pub categories: Vec<String>,
    /// The filter bar only exists when the page has at least one PDF.
    pub show_filter_bar: bool,
}

impl PageView<'_> {
    /// Both filtered lists are empty: render the "no results" message.
    pub fn is_empty(&self) -> bool {
        self.non_pdf.is_empty() && self.pdf.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct PageSession {
    page: PageContent,
    sliders: SliderStates,
    search: String,
    category: CategorySelector,
    open_pdf: Option<String>,
}

impl PageSession {
    pub fn new(page: PageContent) -> Self {
        Self {
            page,
            sliders: SliderStates::new(),
            search: String::new(),
            category: CategorySelector::All,
            open_pdf: None,
        }
    }

    pub fn page(&self) -> &PageContent {
        &self.page
    }

    pub fn sliders(&self) -> &SliderStates {
        &self.sliders
    }

    pub fn slider(&self, item_id: &str) -> SliderState {
        self.sliders.get(item_id)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &CategorySelector {
        &self.category
    }

    /// The PDF item currently shown in the viewer, if any.
    pub fn open_pdf(&self) -> Option<&ContentItem> {
        self.open_pdf
            .as_deref()
            .and_then(|id| self.page.find_item(id))
    }

    pub fn view(&self) -> PageView<'_> {
        let parts = partition::partition(&self.page.items);
        PageView {
            non_pdf: partition::filter_non_pdf(&parts.non_pdf, &self.search),
            pdf: partition::filter_pdf(&parts.pdf, &self.category, &self.search),
            categories: partition::pdf_categories(&parts.pdf),
            show_filter_bar: !parts.pdf.is_empty(),
        }
    }

    fn item(&self, id: &str) -> Result<&ContentItem, SessionError> {
        self.page
            .find_item(id)
            .ok_or_else(|| SessionError::UnknownItem(id.to_string()))
    }

    fn gallery(&self, id: &str) -> Result<(ContentKind, usize), SessionError> {
        let item = self.item(id)?;
        item.gallery_len()
            .map(|len| (item.kind(), len))
            .ok_or_else(|| SessionError::NotAGallery(id.to_string()))
    }

    pub fn apply(&mut self, interaction: Interaction) -> Result<(), SessionError> {
        match interaction {
            Interaction::Next { item } => {
                let (_, len) = self.gallery(&item)?;
                self.sliders.next(&item, len);
            }
            Interaction::Prev { item } => {
                let (_, len) = self.gallery(&item)?;
                self.sliders.prev(&item, len);
            }
            Interaction::Select { item, index } => {
                let (_, len) = self.gallery(&item)?;
                self.sliders.select(&item, index, len);
            }
            Interaction::OpenModal { item, index } => {
                let (_, len) = self.gallery(&item)?;
                self.sliders.open_modal(&item, index, len);
            }
            Interaction::CloseModal { item } => {
                self.gallery(&item)?;
                self.sliders.close_modal(&item);
            }
            Interaction::ModalNext { item } => {
                let (_, len) = self.gallery(&item)?;
                self.sliders.modal_next(&item, len);
            }
            Interaction::ModalPrev { item } => {
                let (_, len) = self.gallery(&item)?;
                self.sliders.modal_prev(&item, len);
            }
            // Zoom and pan only exist in the image modal; video galleries ignore them.
            Interaction::ZoomIn { item } => {
                if self.gallery(&item)?.0 == ContentKind::Image {
                    self.sliders.zoom_in(&item);
                }
            }
            Interaction::ZoomOut { item } => {
                if self.gallery(&item)?.0 == ContentKind::Image {
                    self.sliders.zoom_out(&item);
                }
            }
            Interaction::ResetZoom { item } => {
                if self.gallery(&item)?.0 == ContentKind::Image {
                    self.sliders.reset_zoom(&item);
                }
            }
            Interaction::DragStart { item, at } => {
                if self.gallery(&item)?.0 == ContentKind::Image {
                    self.sliders.drag_start(&item, at);
                }
            }
            Interaction::DragMove { item, at } => {
                if self.gallery(&item)?.0 == ContentKind::Image {
                    self.sliders.drag_move(&item, at);
                }
            }
            Interaction::DragEnd { item } => {
                if self.gallery(&item)?.0 == ContentKind::Image {
                    self.sliders.drag_end(&item);
                }
            }
            Interaction::TogglePlayback { item } => {
                if self.gallery(&item)?.0 == ContentKind::Video {
                    self.sliders.toggle_playback(&item);
                }
            }
            Interaction::Search(text) => self.search = text,
            Interaction::Category(name) => self.category = CategorySelector::from(name.as_str()),
            Interaction::OpenPdf { item } => {
                if !self.item(&item)?.is_pdf() {
                    return Err(SessionError::NotAPdf(item));
                }
                tracing::debug!(item = %item, "opening PDF viewer");
                self.open_pdf = Some(item);
            }
            Interaction::ClosePdf => self.open_pdf = None,
        }
        Ok(())
    }
}

//! HTML rendering for every page state.
//!
//! ## Views
//!
//! - **Home**: the list of pages the store serves
//! - **Loading**: placeholder while a page load is in flight
//! - **Page**: non-PDF grid, PDF filter bar, PDF grid, open modals and viewer
//! - **Not found**: no content for the route (fallback missing too)
//! - **Load failure**: the store could not be read
//!
//! Gallery controls are plain `<button>`s carrying a `data-action` attribute
//! in the same `action:item[:arg]` form the CLI accepts, so a rendered page
//! documents exactly which interaction each control performs.
//!
//! ## Escaping
//!
//! Uses [maud](https://maud.lambda.xyz/), which escapes every interpolated
//! value. The one exception is rich-text bodies: they are trusted markup and
//! go through [`PreEscaped`] untouched. Markdown bodies are converted with
//! pulldown-cmark first, which passes embedded raw HTML through as well.

use crate::config::{self, SiteConfig};
use crate::content::{
    ContentBody, ContentItem, Gallery, ImageEntry, MarkupFormat, PageContent, PdfDocument,
    RichText, VideoEntry, VideoKind,
};
use crate::layout::column_classes;
use crate::portal::PageState;
use crate::session::{PageSession, PageView};
use crate::slider::SliderState;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

const CSS_STATIC: &str = include_str!("../static/style.css");

/// A page entry in the header navigation and on the home page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLink {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl PageLink {
    pub fn from_page(page: &PageContent) -> Self {
        Self {
            id: page.id.clone(),
            title: page.title.clone(),
            description: page.description.clone(),
        }
    }

    pub fn href(&self) -> String {
        format!("/{}/", self.id)
    }
}

/// Everything a view needs besides the page itself.
#[derive(Debug, Clone)]
pub struct RenderContext {
    site_title: String,
    css: String,
    nav: Vec<PageLink>,
}

impl RenderContext {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            site_title: config.site.title.clone(),
            css: format!("{}\n\n{}", config::generate_theme_css(config), CSS_STATIC),
            nav: Vec::new(),
        }
    }

    pub fn with_nav(mut self, nav: Vec<PageLink>) -> Self {
        self.nav = nav;
        self
    }

    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    pub fn nav(&self) -> &[PageLink] {
        &self.nav
    }

    fn page_title(&self, title: &str) -> String {
        format!("{} | {}", title, self.site_title)
    }
}

/// Render whatever the portal is currently showing.
pub fn render_state(ctx: &RenderContext, state: &PageState) -> Markup {
    match state {
        PageState::Home => render_home(ctx),
        PageState::Loading { route_key } => render_loading(ctx, route_key),
        PageState::Ready(session) => render_page(ctx, session),
        PageState::NotFound { path } => render_not_found(ctx, Some(path)),
        PageState::Failed { route_key, reason } => render_load_failure(ctx, route_key, reason),
    }
}

// ============================================================================
// Document chrome
// ============================================================================

fn base_document(title: &str, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

fn site_header(ctx: &RenderContext, current: Option<&str>) -> Markup {
    html! {
        header.site-header {
            a.site-title href="/" { (ctx.site_title) }
            @if !ctx.nav.is_empty() {
                nav.site-nav {
                    ul {
                        @for link in &ctx.nav {
                            li {
                                a.current[current == Some(link.id.as_str())] href=(link.href()) {
                                    (link.title)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn back_home() -> Markup {
    html! {
        a.back-home href="/" { "← Back to home" }
    }
}

// ============================================================================
// Status views
// ============================================================================

pub fn render_home(ctx: &RenderContext) -> Markup {
    let content = html! {
        (site_header(ctx, None))
        main.home {
            h1 { (ctx.site_title) }
            @if ctx.nav.is_empty() {
                p.empty { "No pages are available yet." }
            } @else {
                ul.page-list {
                    @for link in &ctx.nav {
                        li {
                            a href=(link.href()) {
                                h2 { (link.title) }
                                p { (link.description) }
                            }
                        }
                    }
                }
            }
        }
    };
    base_document(&ctx.site_title, &ctx.css, Some("home-view"), content)
}

pub fn render_loading(ctx: &RenderContext, route_key: &str) -> Markup {
    let content = html! {
        (site_header(ctx, Some(route_key)))
        main.status-view aria-busy="true" {
            div.spinner {}
            p { "Loading content…" }
        }
    };
    base_document(&ctx.page_title("Loading"), &ctx.css, Some("loading-view"), content)
}

/// `path` is `None` for the static `404.html`, where the address is unknown.
pub fn render_not_found(ctx: &RenderContext, path: Option<&str>) -> Markup {
    let content = html! {
        (site_header(ctx, None))
        main.status-view {
            h1 { "Content not found" }
            @if let Some(path) = path {
                p { "There is no page at " code { (path) } "." }
            } @else {
                p { "The page you are looking for does not exist." }
            }
            (back_home())
        }
    };
    base_document(&ctx.page_title("Not found"), &ctx.css, Some("not-found-view"), content)
}

pub fn render_load_failure(ctx: &RenderContext, route_key: &str, reason: &str) -> Markup {
    let content = html! {
        (site_header(ctx, Some(route_key)))
        main.status-view {
            h1 { "Content could not be loaded" }
            p { "Something went wrong while loading this page. Please try again later." }
            p.error-detail { (reason) }
            (back_home())
        }
    };
    base_document(&ctx.page_title("Error"), &ctx.css, Some("failure-view"), content)
}

// ============================================================================
// Content page
// ============================================================================

pub fn render_page(ctx: &RenderContext, session: &PageSession) -> Markup {
    let page = session.page();
    let view = session.view();
    let open_pdf = session
        .open_pdf()
        .and_then(|item| item.pdf().map(|doc| (item, doc)));

    let content = html! {
        (site_header(ctx, Some(&page.id)))
        main.page {
            header.page-header {
                (back_home())
                h1 { (page.title) }
                p.page-description { (page.description) }
            }
            @if !view.non_pdf.is_empty() {
                section.content-grid {
                    @for item in &view.non_pdf {
                        (render_item(item, &session.slider(&item.id)))
                    }
                }
            }
            @if view.show_filter_bar {
                (render_filter_bar(session, &view))
            }
            @if !view.pdf.is_empty() {
                section.content-grid.pdf-grid {
                    @for item in &view.pdf {
                        (render_item(item, &session.slider(&item.id)))
                    }
                }
            }
            @if view.is_empty() {
                (render_no_results(session))
            }
        }
        @if let Some((item, doc)) = open_pdf {
            (render_pdf_viewer(item, doc))
        }
    };
    base_document(&ctx.page_title(&page.title), &ctx.css, Some("content-page"), content)
}

fn render_filter_bar(session: &PageSession, view: &PageView<'_>) -> Markup {
    let selected = session.category().label();
    html! {
        form.filter-bar role="search" {
            input.search-input type="search" name="search" placeholder="Search documents…"
                value=(session.search());
            div.category-filters {
                @for category in &view.categories {
                    button.category.active[category == selected] type="button"
                        data-action=(format!("category:{category}")) {
                        (category)
                    }
                }
            }
        }
    }
}

fn render_no_results(session: &PageSession) -> Markup {
    html! {
        div.no-results {
            h2 { "No results" }
            @if session.search().is_empty() {
                p { "Nothing matches the selected category." }
            } @else {
                p { "Nothing matches " q { (session.search()) } }
            }
        }
    }
}

/// One grid card. Every content kind shares the header and footer; the body
/// is chosen by the item's kind.
pub fn render_item(item: &ContentItem, slider: &SliderState) -> Markup {
    let classes = format!(
        "content-card {}",
        column_classes(item.column_span).to_class_string()
    );
    let body = match &item.body {
        ContentBody::Image { images } => render_image_gallery(item, images, slider),
        ContentBody::Video { videos } => render_video_gallery(item, videos, slider),
        ContentBody::Pdf(doc) => render_pdf_card(item, doc),
        ContentBody::RichText(text) => render_rich_text(text),
    };
    html! {
        article class=(classes) id=(item.id) data-kind=(item.kind().label()) {
            header.card-header {
                h2 { (item.title) }
                p.card-description { (item.description) }
            }
            (body)
            footer.card-meta {
                span.category { (item.category) }
                time datetime=(item.last_updated) { "Updated " (item.last_updated) }
            }
        }
    }
}

fn slider_controls(item_id: &str, len: usize, current: usize) -> Markup {
    html! {
        button.slider-prev type="button" aria-label="Previous"
            data-action=(format!("prev:{item_id}")) { "‹" }
        button.slider-next type="button" aria-label="Next"
            data-action=(format!("next:{item_id}")) { "›" }
        div.slider-dots {
            @for index in 0..len {
                button.dot.active[index == current] type="button"
                    aria-label=(format!("Go to slide {}", index + 1))
                    data-action=(format!("select:{item_id}:{index}")) {}
            }
        }
        span.slider-counter { (current + 1) " / " (len) }
    }
}

fn modal_stepper(item_id: &str, len: usize, current: usize) -> Markup {
    html! {
        button.modal-prev type="button" aria-label="Previous"
            data-action=(format!("modal-prev:{item_id}")) { "‹" }
        button.modal-next type="button" aria-label="Next"
            data-action=(format!("modal-next:{item_id}")) { "›" }
        span.modal-counter { (current + 1) " / " (len) }
    }
}

fn close_button(action: String) -> Markup {
    html! {
        button.modal-close type="button" aria-label="Close" data-action=(action) { "×" }
    }
}

// ----------------------------------------------------------------------------
// Images
// ----------------------------------------------------------------------------

fn render_image_gallery(
    item: &ContentItem,
    images: &Gallery<ImageEntry>,
    slider: &SliderState,
) -> Markup {
    let current = images.get(slider.current_index).unwrap_or(images.first());
    html! {
        div.slider {
            button.slide type="button" aria-label="Open image"
                data-action=(format!("open:{}:{}", item.id, slider.current_index)) {
                img src=(current.src) alt=(current.alt) loading="lazy";
            }
            @if images.is_multiple() {
                (slider_controls(&item.id, images.len(), slider.current_index))
            }
        }
        p.slide-caption { (current.title) }
        @if slider.is_modal_open {
            (render_image_modal(item, images, slider))
        }
    }
}

/// CSS transform for the zoomed modal image. The pan offset is expressed in
/// screen pixels, so it is divided by the scale before translating.
fn zoom_transform(slider: &SliderState) -> String {
    let zoom = slider.zoom_level;
    format!(
        "transform: scale({zoom}) translate({}px, {}px);",
        slider.pan_offset.x / zoom,
        slider.pan_offset.y / zoom
    )
}

fn render_image_modal(
    item: &ContentItem,
    images: &Gallery<ImageEntry>,
    slider: &SliderState,
) -> Markup {
    let image = images.get(slider.modal_index).unwrap_or(images.first());
    html! {
        div.modal.image-modal role="dialog" aria-modal="true" aria-label=(image.title) {
            div.modal-toolbar {
                span.modal-title { (image.title) }
                div.zoom-controls {
                    button type="button" aria-label="Zoom out" disabled[!slider.can_zoom_out()]
                        data-action=(format!("zoom-out:{}", item.id)) { "−" }
                    span.zoom-level { (slider.zoom_percent()) "%" }
                    button type="button" aria-label="Zoom in" disabled[!slider.can_zoom_in()]
                        data-action=(format!("zoom-in:{}", item.id)) { "+" }
                    button type="button" aria-label="Reset zoom"
                        data-action=(format!("reset-zoom:{}", item.id)) { "Reset" }
                }
                (close_button(format!("close:{}", item.id)))
            }
            div.modal-stage.pannable[slider.can_pan()] {
                img src=(image.src) alt=(image.alt) draggable="false" style=(zoom_transform(slider));
            }
            @if images.is_multiple() {
                (modal_stepper(&item.id, images.len(), slider.modal_index))
            }
            @if slider.can_pan() {
                p.drag-hint { "Drag to move the image" }
            }
        }
    }
}

// ----------------------------------------------------------------------------
// Videos
// ----------------------------------------------------------------------------

fn render_video(video: &VideoEntry, playing: bool) -> Markup {
    match video.kind {
        VideoKind::Embedded => html! {
            iframe.video-frame src=(video.src) title=(video.title)
                allow="accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture"
                allowfullscreen {}
        },
        VideoKind::Native => html! {
            video.video-frame src=(video.src) poster=[video.thumbnail.as_deref()]
                controls autoplay[playing] muted[playing] playsinline {}
        },
    }
}

fn render_video_gallery(
    item: &ContentItem,
    videos: &Gallery<VideoEntry>,
    slider: &SliderState,
) -> Markup {
    let current = videos.get(slider.current_index).unwrap_or(videos.first());
    html! {
        div.slider.video-slider {
            (render_video(current, slider.playing))
            @if videos.is_multiple() {
                (slider_controls(&item.id, videos.len(), slider.current_index))
            }
        }
        div.video-actions {
            button type="button" data-action=(format!("play:{}", item.id)) {
                @if slider.playing { "Pause" } @else { "Play" }
            }
            button type="button"
                data-action=(format!("open:{}:{}", item.id, slider.current_index)) {
                "Fullscreen"
            }
        }
        p.slide-caption { (current.title) }
        @if slider.is_modal_open {
            (render_video_modal(item, videos, slider))
        }
    }
}

fn render_video_modal(
    item: &ContentItem,
    videos: &Gallery<VideoEntry>,
    slider: &SliderState,
) -> Markup {
    let video = videos.get(slider.modal_index).unwrap_or(videos.first());
    html! {
        div.modal.video-modal role="dialog" aria-modal="true" aria-label=(video.title) {
            div.modal-toolbar {
                span.modal-title { (video.title) }
                (close_button(format!("close:{}", item.id)))
            }
            div.modal-stage {
                (render_video(video, slider.playing))
            }
            @if videos.is_multiple() {
                (modal_stepper(&item.id, videos.len(), slider.modal_index))
            }
        }
    }
}

// ----------------------------------------------------------------------------
// PDFs
// ----------------------------------------------------------------------------

fn render_pdf_card(item: &ContentItem, doc: &PdfDocument) -> Markup {
    html! {
        div.pdf-card {
            @if let Some(thumbnail) = &doc.thumbnail {
                img.pdf-thumbnail src=(thumbnail) alt=(item.title) loading="lazy";
            } @else {
                div.pdf-icon aria-hidden="true" { "PDF" }
            }
            span.pdf-badge { (doc.badge()) }
            ul.pdf-meta {
                @if let Some(size) = &doc.size {
                    li { (size) }
                }
                @if let Some(count) = doc.download_count {
                    li { (count) " downloads" }
                }
            }
            div.pdf-actions {
                button type="button" data-action=(format!("open-pdf:{}", item.id)) { "View" }
                a href=(doc.url) download=(format!("{}.pdf", item.title)) { "Download" }
            }
        }
    }
}

fn render_pdf_viewer(item: &ContentItem, doc: &PdfDocument) -> Markup {
    html! {
        div.modal.pdf-viewer role="dialog" aria-modal="true" aria-label=(item.title) {
            div.modal-toolbar {
                span.modal-title { (item.title) }
                a href=(doc.url) download=(format!("{}.pdf", item.title)) { "Download" }
                (close_button("close-pdf".to_string()))
            }
            iframe.pdf-frame src=(doc.url) title=(item.title) {}
        }
    }
}

// ----------------------------------------------------------------------------
// Rich text
// ----------------------------------------------------------------------------

/// Rich-text body as HTML. Markdown is converted; HTML is returned as is.
pub fn rich_text_html(text: &RichText) -> String {
    match text.format {
        MarkupFormat::Html => text.body.clone(),
        MarkupFormat::Markdown => {
            let parser = Parser::new(&text.body);
            let mut out = String::new();
            md_html::push_html(&mut out, parser);
            out
        }
    }
}

fn render_rich_text(text: &RichText) -> Markup {
    html! {
        div.rich-text {
            (PreEscaped(rich_text_html(text)))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn ctx() -> RenderContext {
        RenderContext::new(&SiteConfig::default())
    }

    fn session_with(items: Vec<ContentItem>) -> PageSession {
        PageSession::new(page_with("tramites", items))
    }

    fn page_html(session: &PageSession) -> String {
        render_page(&ctx(), session).into_string()
    }

    fn apply(session: &mut PageSession, action: &str) {
        session.apply(action.parse().unwrap()).unwrap();
    }

    #[test]
    fn base_document_includes_doctype_and_theme() {
        let html = render_home(&ctx()).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("--accent:"));
    }

    #[test]
    fn filter_bar_absent_without_pdfs() {
        let session = session_with(vec![rich_item("intro", 1), image_item("galeria", 2, 2)]);
        let html = page_html(&session);
        assert!(!html.contains("class=\"filter-bar\""));
        assert!(html.contains("id=\"galeria\""));
    }

    #[test]
    fn filter_bar_lists_pdf_categories() {
        let session = session_with(vec![
            rich_item("intro", 1),
            pdf_item("manual", 2, "Manuales", "Manual de Auditoría"),
            pdf_item("form", 3, "Formularios", "Formulario"),
        ]);
        let html = page_html(&session);
        assert!(html.contains("class=\"filter-bar\""));
        assert!(html.contains("data-action=\"category:All\""));
        assert!(html.contains("data-action=\"category:Manuales\""));
        assert!(html.contains("data-action=\"category:Formularios\""));
    }

    #[test]
    fn pdfs_render_after_other_content() {
        let session = session_with(vec![
            pdf_item("manual", 1, "Manuales", "Manual"),
            rich_item("intro", 5),
        ]);
        let html = page_html(&session);
        let intro = html.find("id=\"intro\"").unwrap();
        let manual = html.find("id=\"manual\"").unwrap();
        assert!(intro < manual);
    }

    #[test]
    fn column_span_maps_to_classes() {
        let session = session_with(vec![rich_item("intro", 1)]);
        assert!(page_html(&session).contains("col-span-12 md:col-span-6 lg:col-span-6"));
    }

    #[test]
    fn rich_text_is_verbatim_but_fields_are_escaped() {
        let mut item = rich_item("intro", 1);
        item.title = "<script>alert('xss')</script>".to_string();
        let html = page_html(&session_with(vec![item]));
        assert!(html.contains("<p>Body of intro</p>"));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn markdown_rich_text_is_converted() {
        let text = RichText {
            body: "Plazo de **diez días**".to_string(),
            format: MarkupFormat::Markdown,
        };
        assert_eq!(rich_text_html(&text), "<p>Plazo de <strong>diez días</strong></p>\n");
    }

    #[test]
    fn no_results_when_search_matches_nothing() {
        let mut session = session_with(vec![rich_item("intro", 1)]);
        assert!(!page_html(&session).contains("class=\"no-results\""));
        apply(&mut session, "search:zzz");
        let html = page_html(&session);
        assert!(html.contains("class=\"no-results\""));
        assert!(html.contains("<q>zzz</q>"));
    }

    #[test]
    fn slider_shows_current_slide_and_dots() {
        let mut session = session_with(vec![image_item("galeria", 1, 3)]);
        apply(&mut session, "next:galeria");
        let html = page_html(&session);
        assert!(html.contains("galeria/1.jpg"));
        assert!(html.contains("2 / 3"));
        assert!(html.contains("data-action=\"select:galeria:2\""));
    }

    #[test]
    fn single_image_has_no_slider_controls() {
        let html = page_html(&session_with(vec![image_item("foto", 1, 1)]));
        assert!(!html.contains("class=\"slider-dots\""));
        assert!(!html.contains("prev:foto"));
    }

    #[test]
    fn image_modal_reflects_zoom_and_pan() {
        let mut session = session_with(vec![image_item("galeria", 1, 3)]);
        apply(&mut session, "open:galeria:1");
        let html = page_html(&session);
        assert!(html.contains("class=\"modal image-modal\""));
        assert!(html.contains("<span class=\"zoom-level\">100%</span>"));
        assert!(!html.contains("class=\"drag-hint\""));

        apply(&mut session, "zoom-in:galeria");
        apply(&mut session, "zoom-in:galeria");
        apply(&mut session, "drag-start:galeria:0,0");
        apply(&mut session, "drag-move:galeria:30,-15");
        let html = page_html(&session);
        assert!(html.contains("<span class=\"zoom-level\">150%</span>"));
        assert!(html.contains("class=\"drag-hint\""));
        assert!(html.contains("transform: scale(1.5) translate(20px, -10px);"));
    }

    #[test]
    fn closed_modal_is_not_rendered() {
        let mut session = session_with(vec![image_item("galeria", 1, 2)]);
        apply(&mut session, "open:galeria");
        apply(&mut session, "close:galeria");
        assert!(!page_html(&session).contains("class=\"modal image-modal\""));
    }

    #[test]
    fn embedded_video_renders_iframe() {
        let html = page_html(&session_with(vec![video_item("videos", 1, 2)]));
        assert!(html.contains("<iframe class=\"video-frame\""));
        assert!(html.contains("video.example.org/embed/videos-0"));
        assert!(html.contains(">Pause<"));
    }

    #[test]
    fn native_video_autoplay_follows_playback() {
        let mut item = video_item("clip", 1, 1);
        if let ContentBody::Video { videos } = &mut item.body {
            let mut entries: Vec<VideoEntry> = videos.clone().into();
            entries[0].kind = VideoKind::Native;
            *videos = Gallery::new(entries).unwrap();
        }
        let mut session = session_with(vec![item]);
        assert!(page_html(&session).contains(" autoplay"));
        apply(&mut session, "play:clip");
        let html = page_html(&session);
        assert!(!html.contains(" autoplay"));
        assert!(html.contains(">Play<"));
    }

    #[test]
    fn pdf_viewer_opens_for_selected_document() {
        let mut session = session_with(vec![pdf_item("manual", 1, "Manuales", "Manual")]);
        assert!(!page_html(&session).contains("class=\"modal pdf-viewer\""));
        apply(&mut session, "open-pdf:manual");
        let html = page_html(&session);
        assert!(html.contains("class=\"modal pdf-viewer\""));
        assert!(html.contains("<iframe class=\"pdf-frame\" src=\"/docs/manual.pdf\""));
    }

    #[test]
    fn pdf_card_shows_badge_and_meta() {
        let html = page_html(&session_with(vec![pdf_item("manual", 1, "Manuales", "Manual")]));
        assert!(html.contains("<span class=\"pdf-badge\">PDF</span>"));
        assert!(html.contains("1.2 MB"));
        assert!(html.contains("10 downloads"));
    }

    #[test]
    fn not_found_and_failure_views_are_distinct() {
        let not_found = render_not_found(&ctx(), Some("/missing")).into_string();
        let failure = render_load_failure(&ctx(), "missing", "store offline").into_string();
        assert!(not_found.contains("Content not found"));
        assert!(failure.contains("Content could not be loaded"));
        assert!(failure.contains("store offline"));
        assert!(!failure.contains("Content not found"));
        for html in [&not_found, &failure] {
            assert!(html.contains("href=\"/\""));
            assert!(html.contains("Back to home"));
        }
    }

    #[test]
    fn render_state_dispatches_loading() {
        let state = PageState::Loading {
            route_key: "tramites".to_string(),
        };
        let html = render_state(&ctx(), &state).into_string();
        assert!(html.contains("Loading content"));
    }

    #[test]
    fn home_lists_pages_and_nav_marks_current() {
        let page = page_with("tramites", vec![]);
        let ctx = ctx().with_nav(vec![PageLink::from_page(&page)]);
        let home = render_home(&ctx).into_string();
        assert!(home.contains("href=\"/tramites/\""));
        assert!(home.contains("About tramites"));

        let html = render_page(&ctx, &PageSession::new(page)).into_string();
        assert!(html.contains("<a class=\"current\" href=\"/tramites/\">"));
    }
}

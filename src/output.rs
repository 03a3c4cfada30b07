//! CLI output formatting.
//!
//! Output is information-first: every page leads with its positional index
//! and title, with the page id and item details as indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Pages
//! 001 Actualización de Datos (10 items, 4 PDF)
//!     Id: actualizacion-datos
//!     001 [content] Proceso de Actualización
//!     002 [image] Galería de Instalaciones (3 images)
//!     003 [pdf] Manual de Usuario del Sistema
//!         Category: Documentación
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! Not found → 404.html
//! 001 Actualización de Datos → actualizacion-datos/index.html
//! Generated 4 pages in dist
//! ```
//!
//! ## List
//!
//! ```text
//! actualizacion-datos       Actualización de Datos
//! declaracion-patrimonial   Declaración Patrimonial
//! ```
//!
//! # Architecture
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::content::{ContentBody, ContentItem, PageContent};
use crate::partition;
use crate::site::BuildReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// `001 Title (3 items, 1 PDF)`
fn page_header(index: usize, page: &PageContent) -> String {
    let items = plural(page.items.len(), "item", "items");
    match page.pdf_count() {
        0 => format!("{} {} ({})", format_index(index), page.title, items),
        n => format!("{} {} ({}, {} PDF)", format_index(index), page.title, items, n),
    }
}

/// `002 [image] Galería (3 images)`
fn item_line(index: usize, item: &ContentItem) -> String {
    let detail = match &item.body {
        ContentBody::Image { images } if images.is_multiple() => {
            format!(" ({})", plural(images.len(), "image", "images"))
        }
        ContentBody::Video { videos } if videos.is_multiple() => {
            format!(" ({})", plural(videos.len(), "video", "videos"))
        }
        _ => String::new(),
    };
    format!(
        "{} [{}] {}{}",
        format_index(index),
        item.kind().label(),
        item.title,
        detail
    )
}

/// Inventory printed by `check`: every page with its items in display order.
pub fn format_page_inventory(pages: &[PageContent]) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (i, page) in pages.iter().enumerate() {
        lines.push(page_header(i + 1, page));
        lines.push(format!("{}Id: {}", indent(1), page.id));

        let parts = partition::partition(&page.items);
        let ordered = parts.non_pdf.iter().chain(parts.pdf.iter());
        for (n, item) in ordered.enumerate() {
            lines.push(format!("{}{}", indent(1), item_line(n + 1, item)));
            if item.is_pdf() {
                lines.push(format!("{}Category: {}", indent(2), item.category));
            }
        }
    }
    lines
}

pub fn print_page_inventory(pages: &[PageContent]) {
    for line in format_page_inventory(pages) {
        println!("{}", line);
    }
}

/// `id   title` rows, ids padded to a common width.
pub fn format_page_list(pages: &[PageContent]) -> Vec<String> {
    let width = pages.iter().map(|p| p.id.chars().count()).max().unwrap_or(0);
    pages
        .iter()
        .map(|page| format!("{:<width$}   {}", page.id, page.title))
        .collect()
}

pub fn print_page_list(pages: &[PageContent]) {
    for line in format_page_list(pages) {
        println!("{}", line);
    }
}

pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec![
        "Home \u{2192} index.html".to_string(),
        "Not found \u{2192} 404.html".to_string(),
    ];
    for (i, page) in report.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            page.title,
            page.path.display()
        ));
    }
    lines.push(format!(
        "Generated {} in {}",
        plural(report.pages.len(), "page", "pages"),
        report.output_dir.display()
    ));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::BuiltPage;
    use crate::test_helpers::*;
    use std::path::PathBuf;

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn inventory_lists_items_in_display_order() {
        let page = page_with(
            "tramites",
            vec![
                pdf_item("manual", 1, "Manuales", "Manual"),
                image_item("galeria", 3, 3),
                rich_item("intro", 2),
            ],
        );
        let lines = format_page_inventory(&[page]);
        assert_eq!(
            lines,
            vec![
                "Pages",
                "001 Page tramites (3 items, 1 PDF)",
                "    Id: tramites",
                "    001 [content] Text intro",
                "    002 [image] Gallery galeria (3 images)",
                "    003 [pdf] Manual",
                "        Category: Manuales",
            ]
        );
    }

    #[test]
    fn inventory_header_without_pdfs() {
        let page = page_with("solo", vec![video_item("clip", 1, 1)]);
        let lines = format_page_inventory(&[page]);
        assert_eq!(lines[1], "001 Page solo (1 item)");
        assert_eq!(lines[3], "    001 [video] Videos clip");
    }

    #[test]
    fn page_list_aligns_titles() {
        let pages = vec![page_with("a", vec![]), page_with("longer-id", vec![])];
        let lines = format_page_list(&pages);
        assert_eq!(lines[0], "a           Page a");
        assert_eq!(lines[1], "longer-id   Page longer-id");
    }

    #[test]
    fn build_output_lists_every_file() {
        let report = BuildReport {
            output_dir: PathBuf::from("dist"),
            pages: vec![BuiltPage {
                id: "tramites".to_string(),
                title: "Trámites".to_string(),
                path: PathBuf::from("tramites").join("index.html"),
                items: 2,
                pdfs: 0,
            }],
        };
        let lines = format_build_output(&report);
        assert_eq!(lines[0], "Home \u{2192} index.html");
        assert_eq!(lines[1], "Not found \u{2192} 404.html");
        assert!(lines[2].starts_with("001 Trámites \u{2192} tramites"));
        assert!(lines[2].ends_with("index.html"));
        assert_eq!(lines[3], "Generated 1 page in dist");
    }
}

//! Splitting, ordering and filtering of page items.
//!
//! A page renders its non-PDF items first and its PDF documents last, each
//! group ordered by the item's `order` field. Only the PDF group gets a
//! category filter; the search text applies to both.
//!
//! All functions are pure: the same inputs always yield the same ordered
//! output.

use crate::content::ContentItem;

/// Label of the category selector that matches every PDF.
pub const ALL_CATEGORIES: &str = "All";

/// Items split by kind, each side stable-sorted by `order`.
#[derive(Debug, Clone, PartialEq)]
pub struct Partitioned<'a> {
    pub non_pdf: Vec<&'a ContentItem>,
    pub pdf: Vec<&'a ContentItem>,
}

/// Which PDF category is selected in the filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelector {
    #[default]
    All,
    Named(String),
}

impl CategorySelector {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Named(name) => name == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategorySelector::All => ALL_CATEGORIES,
            CategorySelector::Named(name) => name,
        }
    }
}

impl From<&str> for CategorySelector {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategorySelector::All
        } else {
            CategorySelector::Named(value.to_string())
        }
    }
}

/// Split items into non-PDF and PDF groups, each sorted ascending by `order`.
///
/// The sort is stable, so items sharing an `order` keep their original
/// relative position.
pub fn partition(items: &[ContentItem]) -> Partitioned<'_> {
    let (mut pdf, mut non_pdf): (Vec<&ContentItem>, Vec<&ContentItem>) =
        items.iter().partition(|item| item.is_pdf());
    non_pdf.sort_by_key(|item| item.order);
    pdf.sort_by_key(|item| item.order);
    Partitioned { non_pdf, pdf }
}

/// Case-insensitive substring match on title or description.
///
/// An empty search matches everything.
fn matches_search(item: &ContentItem, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.title.to_lowercase().contains(needle) || item.description.to_lowercase().contains(needle)
}

/// Narrow PDF items by category and search text, preserving order.
pub fn filter_pdf<'a>(
    pdf: &[&'a ContentItem],
    category: &CategorySelector,
    search: &str,
) -> Vec<&'a ContentItem> {
    let needle = search.to_lowercase();
    pdf.iter()
        .copied()
        .filter(|item| category.matches(&item.category) && matches_search(item, &needle))
        .collect()
}

/// Narrow non-PDF items by search text only, preserving order.
pub fn filter_non_pdf<'a>(non_pdf: &[&'a ContentItem], search: &str) -> Vec<&'a ContentItem> {
    let needle = search.to_lowercase();
    non_pdf
        .iter()
        .copied()
        .filter(|item| matches_search(item, &needle))
        .collect()
}

/// Categories offered by the PDF filter bar: [`ALL_CATEGORIES`] followed by
/// each distinct PDF category in first-seen order.
pub fn pdf_categories(pdf: &[&ContentItem]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for item in pdf {
        if !categories.iter().any(|c| c == &item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn ids(items: &[&ContentItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    fn mixed_items() -> Vec<ContentItem> {
        vec![
            pdf_item("manual", 3, "Manuales", "Manual de Auditoría"),
            rich_item("intro", 2),
            image_item("galeria", 1, 3),
            pdf_item("formulario", 1, "Formularios", "Formulario Patrimonial"),
            video_item("videos", 2, 2),
            pdf_item("guia", 3, "Manuales", "Guía de Control Interno"),
        ]
    }

    #[test]
    fn partition_preserves_total_size() {
        let items = mixed_items();
        let parts = partition(&items);
        assert_eq!(parts.non_pdf.len() + parts.pdf.len(), items.len());
        assert!(parts.pdf.iter().all(|i| i.is_pdf()));
        assert!(parts.non_pdf.iter().all(|i| !i.is_pdf()));
    }

    #[test]
    fn partition_sorts_by_order_stably() {
        let items = mixed_items();
        let parts = partition(&items);
        // "intro" and "videos" share order 2; "manual" and "guia" share order 3
        assert_eq!(ids(&parts.non_pdf), ["galeria", "intro", "videos"]);
        assert_eq!(ids(&parts.pdf), ["formulario", "manual", "guia"]);
        for group in [&parts.non_pdf, &parts.pdf] {
            assert!(group.windows(2).all(|w| w[0].order <= w[1].order));
        }
    }

    #[test]
    fn partition_of_empty_list() {
        let parts = partition(&[]);
        assert!(parts.non_pdf.is_empty());
        assert!(parts.pdf.is_empty());
    }

    #[test]
    fn filter_pdf_all_and_empty_search_keeps_everything() {
        let items = mixed_items();
        let parts = partition(&items);
        let filtered = filter_pdf(&parts.pdf, &CategorySelector::All, "");
        assert_eq!(filtered, parts.pdf);
    }

    #[test]
    fn filter_pdf_search_is_case_insensitive() {
        let items = mixed_items();
        let parts = partition(&items);
        let filtered = filter_pdf(&parts.pdf, &CategorySelector::from(ALL_CATEGORIES), "manual");
        assert_eq!(ids(&filtered), ["manual"]);
    }

    #[test]
    fn filter_pdf_search_matches_description() {
        let mut items = mixed_items();
        items[0].description = "Incluye anexos TÉCNICOS".to_string();
        let parts = partition(&items);
        let filtered = filter_pdf(&parts.pdf, &CategorySelector::All, "técnicos");
        assert_eq!(ids(&filtered), ["manual"]);
    }

    #[test]
    fn filter_pdf_by_category() {
        let items = mixed_items();
        let parts = partition(&items);
        let filtered = filter_pdf(&parts.pdf, &CategorySelector::from("Manuales"), "");
        assert_eq!(ids(&filtered), ["manual", "guia"]);
    }

    #[test]
    fn filter_pdf_category_and_search_combine() {
        let items = mixed_items();
        let parts = partition(&items);
        let filtered = filter_pdf(&parts.pdf, &CategorySelector::from("Formularios"), "manual");
        assert!(filtered.is_empty());
    }

    #[test]
    fn filter_non_pdf_ignores_category() {
        let items = mixed_items();
        let parts = partition(&items);
        let filtered = filter_non_pdf(&parts.non_pdf, "");
        assert_eq!(filtered, parts.non_pdf);
    }

    #[test]
    fn filter_non_pdf_applies_search() {
        let items = mixed_items();
        let parts = partition(&items);
        let filtered = filter_non_pdf(&parts.non_pdf, "GALERIA");
        assert_eq!(ids(&filtered), ["galeria"]);
    }

    #[test]
    fn filters_are_pure() {
        let items = mixed_items();
        let parts = partition(&items);
        let selector = CategorySelector::from("Manuales");
        assert_eq!(
            filter_pdf(&parts.pdf, &selector, "guía"),
            filter_pdf(&parts.pdf, &selector, "guía")
        );
    }

    #[test]
    fn categories_start_with_all_in_first_seen_order() {
        let items = mixed_items();
        let parts = partition(&items);
        assert_eq!(
            pdf_categories(&parts.pdf),
            [ALL_CATEGORIES, "Formularios", "Manuales"]
        );
    }

    #[test]
    fn categories_without_pdfs_is_only_all() {
        assert_eq!(pdf_categories(&[]), [ALL_CATEGORIES]);
    }

    #[test]
    fn selector_from_all_label() {
        assert_eq!(CategorySelector::from("All"), CategorySelector::All);
        assert_eq!(CategorySelector::from("Manuales").label(), "Manuales");
    }
}

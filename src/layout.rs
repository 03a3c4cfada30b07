//! Responsive column sizing.
//!
//! Items declare a desired span on a 12-column grid. Narrow viewports cannot
//! honour small spans, so the span is bucketed per breakpoint:
//!
//! ```text
//! desired   mobile  tablet  desktop
//! 1–3       12      6       desired
//! 4–6       12      6       desired
//! 7–8       12      8       desired
//! 9–12      12      12      desired
//! ```
//!
//! All functions here are pure.

use crate::content::ColumnSpan;

const FULL: u8 = 12;
const HALF: u8 = 6;
const WIDE: u8 = 8;

/// Concrete spans for each breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnClasses {
    pub mobile: u8,
    pub tablet: u8,
    pub desktop: u8,
}

impl ColumnClasses {
    /// Grid utility classes, e.g. `col-span-12 md:col-span-6 lg:col-span-4`.
    pub fn to_class_string(&self) -> String {
        format!(
            "col-span-{} md:col-span-{} lg:col-span-{}",
            self.mobile, self.tablet, self.desktop
        )
    }
}

/// Map a desired span to its per-breakpoint spans.
///
/// ```
/// # use civic_portal::content::ColumnSpan;
/// # use civic_portal::layout::column_classes;
/// let classes = column_classes(ColumnSpan::new(8).unwrap());
/// assert_eq!((classes.mobile, classes.tablet, classes.desktop), (12, 8, 8));
/// ```
pub fn column_classes(span: ColumnSpan) -> ColumnClasses {
    let desired = span.get();
    let tablet = match desired {
        0..=6 => HALF,
        7..=8 => WIDE,
        _ => FULL,
    };
    ColumnClasses {
        mobile: FULL,
        tablet,
        desktop: desired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(span: u8) -> (u8, u8, u8) {
        let c = column_classes(ColumnSpan::new(span).unwrap());
        (c.mobile, c.tablet, c.desktop)
    }

    #[test]
    fn every_span_maps_to_its_bucket() {
        let expected = [
            (1, (12, 6, 1)),
            (2, (12, 6, 2)),
            (3, (12, 6, 3)),
            (4, (12, 6, 4)),
            (5, (12, 6, 5)),
            (6, (12, 6, 6)),
            (7, (12, 8, 7)),
            (8, (12, 8, 8)),
            (9, (12, 12, 9)),
            (10, (12, 12, 10)),
            (11, (12, 12, 11)),
            (12, (12, 12, 12)),
        ];
        for (span, want) in expected {
            assert_eq!(classes(span), want, "span {span}");
        }
    }

    #[test]
    fn mapping_is_deterministic() {
        for span in 1..=12 {
            assert_eq!(classes(span), classes(span));
        }
    }

    #[test]
    fn class_string_covers_all_breakpoints() {
        let c = column_classes(ColumnSpan::new(4).unwrap());
        assert_eq!(c.to_class_string(), "col-span-12 md:col-span-6 lg:col-span-4");
    }
}

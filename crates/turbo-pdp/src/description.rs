//! Description formatting.
//!
//! Turns the product's HTML description into display rows. Row backgrounds
//! follow two rules that are kept side by side:
//!
//! - a fixed table for the leading rows (0 highlighted, 1-2 plain, 3-7
//!   highlighted), with index parity after that, which decides `tint`;
//! - a stripe toggle that flips on every row still carrying `&nbsp;`, and
//!   stays flipped for the rows after it, recorded as `striped`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Encoded non-breaking space that doubles as the stripe marker.
pub const STRIPE_MARKER: &str = "&nbsp;";

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Row background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    /// Light blue (#F1FCFE).
    Highlight,
    /// White.
    Plain,
}

impl Tint {
    /// Even rows highlighted, odd rows plain.
    pub fn parity(index: usize) -> Self {
        if index % 2 == 0 {
            Tint::Highlight
        } else {
            Tint::Plain
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Tint::Highlight => "F1FCFE",
            Tint::Plain => "FFFFFF",
        }
    }
}

/// One formatted paragraph of the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayBlock {
    /// Paragraph text with markup and markers removed.
    pub text: String,
    /// Background picked by the positional table.
    pub tint: Tint,
    /// Whether this row carried the stripe marker.
    pub marker: bool,
    /// Stripe toggle state in effect for this row.
    pub striped: bool,
}

/// Background for a row position.
pub fn positional_tint(position: usize) -> Tint {
    match position {
        0 => Tint::Highlight,
        1 | 2 => Tint::Plain,
        3..=7 => Tint::Highlight,
        _ => Tint::parity(position),
    }
}

/// Strip markup and split the description into display rows.
pub fn format_description(html: &str) -> Vec<DisplayBlock> {
    let plain = TAG_PATTERN.replace_all(html, "");
    let mut striped = true;

    plain
        .split('\n')
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .enumerate()
        .map(|(position, paragraph)| {
            let marker = paragraph.contains(STRIPE_MARKER);
            if marker {
                striped = !striped;
            }
            let text = if marker {
                paragraph.replace(STRIPE_MARKER, "")
            } else {
                paragraph.to_string()
            };

            DisplayBlock {
                text,
                tint: positional_tint(position),
                marker,
                striped,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(blocks: &[DisplayBlock]) -> Vec<&str> {
        blocks.iter().map(|b| b.text.as_str()).collect()
    }

    #[test]
    fn test_marker_row_is_cleaned_and_flips_stripe() {
        let blocks = format_description("<p>A</p>\n<p>B&nbsp;</p>\n\n<p>C</p>");

        assert_eq!(texts(&blocks), vec!["A", "B", "C"]);
        assert_eq!(blocks[0].tint, Tint::Highlight);
        assert_eq!(blocks[1].tint, Tint::Plain);
        assert_eq!(blocks[2].tint, Tint::Plain);

        assert!(!blocks[0].marker);
        assert!(blocks[1].marker);
        assert!(blocks[0].striped);
        assert!(!blocks[1].striped);
        assert!(!blocks[2].striped);
    }

    #[test]
    fn test_second_marker_flips_back() {
        let blocks = format_description("a\n&nbsp;b\nc\nd&nbsp;\ne");
        let stripes: Vec<bool> = blocks.iter().map(|b| b.striped).collect();
        assert_eq!(stripes, vec![true, false, false, true, true]);
    }

    #[test]
    fn test_positional_table_then_parity() {
        let expected = [
            Tint::Highlight,
            Tint::Plain,
            Tint::Plain,
            Tint::Highlight,
            Tint::Highlight,
            Tint::Highlight,
            Tint::Highlight,
            Tint::Highlight,
            Tint::Highlight,
            Tint::Plain,
            Tint::Highlight,
        ];
        for (position, tint) in expected.iter().enumerate() {
            assert_eq!(positional_tint(position), *tint, "position {position}");
        }
    }

    #[test]
    fn test_empty_paragraphs_dropped_and_order_kept() {
        let html = "<div>\n  <h2>Title</h2>\n\n   \n<ul><li>one</li>\n<li>two</li></ul>\n</div>";
        assert_eq!(texts(&format_description(html)), vec!["Title", "one", "two"]);
    }

    #[test]
    fn test_tags_inside_a_line_are_removed() {
        let blocks = format_description("<p><strong>Bold</strong> and <em>plain</em></p>");
        assert_eq!(texts(&blocks), vec!["Bold and plain"]);
    }

    #[test]
    fn test_every_marker_occurrence_removed() {
        let blocks = format_description("x&nbsp;y&nbsp;z");
        assert_eq!(blocks[0].text, "xyz");
        assert!(!blocks[0].striped);
    }

    #[test]
    fn test_marker_only_row_is_kept_empty() {
        let blocks = format_description("first\n<p>&nbsp;</p>\nlast");
        assert_eq!(texts(&blocks), vec!["first", "", "last"]);
        assert!(blocks[1].marker);
    }

    #[test]
    fn test_empty_description() {
        assert!(format_description("").is_empty());
        assert!(format_description("<p></p>\n<br/>").is_empty());
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let html = "<p>A&nbsp;</p>\n<p>B</p>";
        assert_eq!(format_description(html), format_description(html));
    }
}

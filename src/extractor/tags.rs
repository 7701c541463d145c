//! Tag classification tables.
//!
//! Two fixed tables drive extraction: block tags, whose text starts a new
//! line, and skip tags, whose text is never emitted. Each is kept as an
//! array backing a `HashSet` for O(1) lookup through `is_block_tag` and
//! `is_skip_tag`. Lookups are ASCII case-insensitive.

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists (arrays for iteration) ===

/// Block-level tags: a text node directly inside one of these begins a new line.
///
/// `br` is void and never parents a text node, so it has no observable
/// effect; it stays in the table to keep the classification complete.
static BLOCK_TAGS: [&str; 22] = [
    "p", "div", "br", "section", "article", "header", "footer",
    "li", "ul", "ol", "table", "tr", "td", "th",
    "h1", "h2", "h3", "h4", "h5", "h6",
    "pre", "blockquote",
];

/// Tags whose direct text content is discarded: script, style, noscript
static SKIP_TAGS: [&str; 3] = ["script", "style", "noscript"];

// === Tag Sets (HashSets for O(1) lookup) ===

/// `BLOCK_TAGS` as a `HashSet`
static BLOCK_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    BLOCK_TAGS.into_iter().collect()
});

/// `SKIP_TAGS` as a `HashSet`
static SKIP_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    SKIP_TAGS.into_iter().collect()
});

// === Helper Functions ===

/// Lowercase `tag` only when it actually contains uppercase ASCII.
fn fold_case(tag: &str) -> Cow<'_, str> {
    if tag.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(tag.to_ascii_lowercase())
    } else {
        Cow::Borrowed(tag)
    }
}

/// Check if tag is block-level
#[inline]
#[must_use]
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAG_SET.contains(fold_case(tag).as_ref())
}

/// Check if tag's text must be skipped
#[inline]
#[must_use]
pub fn is_skip_tag(tag: &str) -> bool {
    SKIP_TAG_SET.contains(fold_case(tag).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_tags() {
        for tag in BLOCK_TAGS {
            assert!(is_block_tag(tag), "{tag} should be block");
        }
        assert_eq!(BLOCK_TAG_SET.len(), BLOCK_TAGS.len());
    }

    #[test]
    fn test_headings_are_block() {
        for level in 1..=6 {
            assert!(is_block_tag(&format!("h{level}")));
        }
        assert!(!is_block_tag("h7"));
    }

    #[test]
    fn test_inline_tags_are_not_block() {
        for tag in ["span", "a", "em", "b", "strong", "code", "body", "html", "main", "nav"] {
            assert!(!is_block_tag(tag), "{tag} should be inline");
        }
    }

    #[test]
    fn test_skip_tags() {
        assert!(is_skip_tag("script"));
        assert!(is_skip_tag("style"));
        assert!(is_skip_tag("noscript"));
        assert!(!is_skip_tag("template"));
        assert!(!is_skip_tag("p"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_block_tag("DIV"));
        assert!(is_block_tag("Div"));
        assert!(is_block_tag("BlockQuote"));
        assert!(is_skip_tag("SCRIPT"));
        assert!(is_skip_tag("NoScript"));
    }

    #[test]
    fn test_tables_disjoint() {
        assert!(BLOCK_TAG_SET.is_disjoint(&SKIP_TAG_SET));
    }

    #[test]
    fn test_fold_case_borrows_lowercase() {
        assert!(matches!(fold_case("div"), Cow::Borrowed(_)));
        assert!(matches!(fold_case("DIV"), Cow::Owned(_)));
    }
}

//! Whitespace handling for text node content.
//!
//! Two different whitespace classes are in play:
//!
//! - selection uses the XML blank set (space, tab, LF, CR): a node is kept
//!   when it has at least one character outside it;
//! - collapsing additionally treats form feed as whitespace.
//!
//! Collapsing writes a single space for a whitespace run only when the run
//! is followed by a non-whitespace character. A leading run therefore
//! becomes one leading space, and a trailing run disappears.

/// XML blank characters, as used by node selection.
#[inline]
#[must_use]
pub fn is_xml_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Whitespace characters collapsed on output.
#[inline]
#[must_use]
pub fn is_collapsible_space(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t' | '\r' | '\x0C')
}

/// True when `text` contains anything besides XML blanks.
#[inline]
#[must_use]
pub fn has_content(text: &str) -> bool {
    text.chars().any(|c| !is_xml_blank(c))
}

/// Append `text` to `out` with each whitespace run collapsed.
pub fn push_collapsed(out: &mut String, text: &str) {
    let mut in_space = false;
    for c in text.chars() {
        if is_collapsible_space(c) {
            in_space = true;
        } else {
            if in_space {
                out.push(' ');
                in_space = false;
            }
            out.push(c);
        }
    }
}

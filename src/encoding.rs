//! Character encoding detection and transcoding.
//!
//! Fetched pages arrive as bytes. Before parsing they are decoded to UTF-8
//! using, in order of precedence:
//!
//! 1. a byte order mark;
//! 2. the charset the server declared in its `Content-Type` header;
//! 3. `<meta charset="...">` in the first 1024 bytes;
//! 4. `<meta http-equiv="Content-Type" content="...; charset=...">`;
//! 5. UTF-8.
//!
//! Labels that resolve to the replacement encoding (`iso-2022-kr`,
//! `hz-gb-2312`, ...) are ignored and detection moves on. A UTF-16 label
//! found in `<meta>` is read as UTF-8.
//!
//! Undecodable sequences become U+FFFD rather than errors.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Bytes of the document head examined for `<meta>` declarations.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `charset=...` inside an HTTP `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Charset label from an HTTP `Content-Type` header value, if any.
///
/// ```
/// use pagetext::encoding::charset_from_content_type;
///
/// assert_eq!(
///     charset_from_content_type("text/html; charset=ISO-8859-1").as_deref(),
///     Some("ISO-8859-1")
/// );
/// assert_eq!(charset_from_content_type("text/html"), None);
/// ```
#[must_use]
pub fn charset_from_content_type(value: &str) -> Option<String> {
    HEADER_CHARSET_RE
        .captures(value)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Detect character encoding from document bytes and an optional
/// transport-level charset label.
#[must_use]
pub fn detect_encoding(html: &[u8], transport_charset: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    if let Some(encoding) = transport_charset.and_then(encoding_for_label) {
        return encoding;
    }

    let head = &html[..html.len().min(SNIFF_LEN)];
    let head_str = String::from_utf8_lossy(head);

    extract_charset(&head_str)
        .and_then(|label| meta_encoding(&label))
        .or_else(|| extract_content_type_charset(&head_str).and_then(|label| meta_encoding(&label)))
        .unwrap_or(UTF_8)
}

/// Resolve a charset label, ignoring labels that map to the replacement
/// encoding so detection falls through to the next source.
fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label_no_replacement(label.as_bytes())
}

/// Resolve a label found in `<meta>`.
///
/// A document whose ASCII `<meta>` could be read is not UTF-16, so a
/// declared UTF-16 means UTF-8.
fn meta_encoding(label: &str) -> Option<&'static Encoding> {
    encoding_for_label(label).map(|encoding| {
        if encoding == UTF_16LE || encoding == UTF_16BE {
            UTF_8
        } else {
            encoding
        }
    })
}

/// Extract charset from `<meta charset="...">` tag.
fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract charset from `<meta http-equiv="Content-Type" content="...; charset=...">` tag.
fn extract_content_type_charset(html: &str) -> Option<String> {
    CONTENT_TYPE_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode document bytes to a UTF-8 string.
///
/// # Examples
///
/// ```
/// use pagetext::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(transcode_to_utf8(html, None).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8], transport_charset: Option<&str>) -> String {
    let encoding = detect_encoding(html, transport_charset);
    debug!(encoding = encoding.name(), bytes = html.len(), "decoding document");

    // `decode` strips a matching BOM and replaces malformed sequences.
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}

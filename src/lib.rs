//! # pagetext
//!
//! Fetch a web page and turn it into plain text that keeps the line
//! structure implied by block-level markup.
//!
//! Extraction walks every text node of the parsed document in document
//! order. Text inside `script`, `style` and `noscript` is dropped. Text
//! whose direct parent is a block element (`p`, `div`, headings, list and
//! table parts, ...) starts a new line when that element is not the one
//! that started the current line. Whitespace runs collapse to one space.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagetext::extract_text;
//!
//! let html = "<html><body><p>Hello   world</p><p>Second</p></body></html>";
//! assert_eq!(extract_text(html), "\nHello world\nSecond\n");
//! ```
//!
//! Fetching is separate:
//!
//! ```rust,no_run
//! use pagetext::{fetch_and_extract, Options};
//!
//! let text = fetch_and_extract("https://example.com/", &Options::default())?;
//! print!("{text}");
//! # Ok::<(), pagetext::Error>(())
//! ```

mod error;
mod options;

/// Tree Builder adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Plain-text extraction (tag tables, whitespace, state, pipeline).
pub mod extractor;

/// Page retrieval over HTTP(S) and `file://`.
pub mod fetch;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::{Fetcher, Page};
pub use options::{Options, DEFAULT_MAX_REDIRECTS, DEFAULT_USER_AGENT};

use tracing::instrument;

/// Extracts the plain text of an HTML document.
///
/// Never fails; a document without text yields `"\n"`.
#[must_use]
pub fn extract_text(html: &str) -> String {
    let doc = dom::parse(html);
    extractor::extract_content(&doc)
}

/// Extracts the plain text of HTML bytes, detecting the encoding from a
/// BOM or `<meta>` declaration.
///
/// # Example
///
/// ```rust
/// use pagetext::extract_text_from_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// assert_eq!(extract_text_from_bytes(html), "\nCaf\u{e9}\n");
/// ```
#[must_use]
pub fn extract_text_from_bytes(html: &[u8]) -> String {
    extract_text(&encoding::transcode_to_utf8(html, None))
}

/// Extracts the plain text of a fetched page, honouring its declared charset.
#[must_use]
pub fn extract_page(page: &Page) -> String {
    let charset = page.charset();
    extract_text(&encoding::transcode_to_utf8(&page.body, charset.as_deref()))
}

/// Fetches `url` with `fetcher` and extracts its text.
#[instrument(skip(fetcher))]
pub fn fetch_and_extract_with<F: Fetcher>(fetcher: &F, url: &str) -> Result<String> {
    let url = fetch::parse_url(url)?;
    let page = fetcher.fetch(&url)?;
    Ok(extract_page(&page))
}

/// Fetches `url` and extracts its text.
///
/// Supports `http`, `https` and `file` URLs.
pub fn fetch_and_extract(url: &str, options: &Options) -> Result<String> {
    let fetcher = fetch::UrlFetcher::new(options)?;
    fetch_and_extract_with(&fetcher, url)
}

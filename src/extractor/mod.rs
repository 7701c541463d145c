//! Plain-text extraction.
//!
//! # Module Structure
//!
//! - `tags`: Block and skip tag tables with case-insensitive lookup
//! - `normalize`: Whitespace selection predicate and run collapsing
//! - `state`: Per-call accumulator (last block entered, output buffer)
//! - `pipeline`: The fold over text nodes in document order
//!
//! # Usage
//!
//! ```rust
//! use pagetext::{dom, extractor};
//!
//! let doc = dom::parse("<p>Hello   world</p><p>Second</p>");
//! let text = extractor::extract_content(&doc);
//! assert_eq!(text, "\nHello world\nSecond\n");
//! ```

pub mod normalize;
pub mod pipeline;
pub mod state;
pub mod tags;

pub use pipeline::{extract_content, selected_text_nodes};
pub use state::ExtractionState;

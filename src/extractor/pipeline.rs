//! Text extraction pipeline.
//!
//! Walks the selected text nodes in document order and folds them into an
//! [`ExtractionState`]:
//!
//! 1. text whose direct parent is a skip tag is dropped;
//! 2. text whose direct parent is a block tag opens a new line, unless that
//!    same element already opened the current one;
//! 3. content is appended with whitespace runs collapsed.
//!
//! The output always ends with one final newline.

use dom_query::{Document, NodeRef};
use tracing::{debug, trace};

use crate::dom;

use super::normalize::has_content;
use super::state::ExtractionState;
use super::tags::{is_block_tag, is_skip_tag};

/// Text nodes that carry something besides XML blanks, in document order.
pub fn selected_text_nodes(doc: &Document) -> impl Iterator<Item = NodeRef<'_>> + Clone {
    dom::text_nodes(doc).filter(|node| has_content(&node.text()))
}

/// Feed one selected text node into `state`.
///
/// Only the direct parent is classified; further ancestors are irrelevant.
pub fn handle_text_node(state: &mut ExtractionState, node: &NodeRef) {
    let text = node.text();

    if let Some(parent) = dom::parent_element(node) {
        if let Some(tag) = dom::tag_name(&parent) {
            if is_skip_tag(&tag) {
                trace!(tag = %tag, "skipping text");
                return;
            }
            if is_block_tag(&tag) && state.enter_block(parent.id) {
                trace!(tag = %tag, "entered block");
            }
        }
    }

    state.push_text(&text);
}

/// Extract the plain text of a parsed document.
///
/// Never fails: a document without qualifying text yields `"\n"`.
#[must_use]
pub fn extract_content(doc: &Document) -> String {
    let mut nodes = 0usize;
    let state = selected_text_nodes(doc).fold(ExtractionState::new(), |mut state, node| {
        nodes += 1;
        handle_text_node(&mut state, &node);
        state
    });
    let text = state.finish();
    debug!(text_nodes = nodes, chars = text.len(), "extracted text");
    text
}

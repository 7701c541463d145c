//! Tree Builder adapter.
//!
//! Wraps `dom_query` (html5ever underneath) so the rest of the crate sees a
//! lenient parser plus a document-order walk over text nodes. html5ever
//! repairs unclosed tags, bad nesting and broken attributes on its own, so
//! parsing never fails.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Tag name of an element node, as the parser reports it.
///
/// Returns `None` for text, comment and document nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<StrTendril> {
    if node.is_element() {
        node.node_name()
    } else {
        None
    }
}

/// Parent element of `node`, or `None` when the parent is the document
/// itself (or there is no parent).
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(NodeRef::is_element)
}

/// All text nodes of `doc` in document (depth-first, pre-order) order.
///
/// The walk is lazy and the returned iterator is `Clone`, so a caller can
/// restart it without re-walking from scratch.
#[must_use]
pub fn text_nodes(doc: &Document) -> TextNodes<'_> {
    TextNodes {
        stack: vec![doc.root()],
    }
}

/// Iterator returned by [`text_nodes`].
#[derive(Clone)]
pub struct TextNodes<'a> {
    stack: Vec<NodeRef<'a>>,
}

impl<'a> Iterator for TextNodes<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if node.is_text() {
                return Some(node);
            }
            // Reverse so the first child is popped first.
            self.stack.extend(node.children().into_iter().rev());
        }
        None
    }
}

//! Extraction state tracking.
//!
//! `ExtractionState` is the accumulator threaded through one extraction
//! call: the identity of the last block element that opened a line, and the
//! append-only output buffer. Nothing is shared between calls.

use dom_query::NodeId;

use super::normalize::push_collapsed;

/// Per-call extraction accumulator.
#[derive(Debug, Default)]
pub struct ExtractionState {
    /// Block element that most recently triggered a newline.
    last_block: Option<NodeId>,

    /// Text emitted so far.
    output: String,
}

impl ExtractionState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the block element `block`.
    ///
    /// Emits a newline and records `block` unless it is the same element
    /// (by identity) as the last one entered. Returns whether a newline was
    /// written.
    pub fn enter_block(&mut self, block: NodeId) -> bool {
        if self.last_block == Some(block) {
            return false;
        }
        self.output.push('\n');
        self.last_block = Some(block);
        true
    }

    /// Append text content with whitespace runs collapsed.
    pub fn push_text(&mut self, text: &str) {
        push_collapsed(&mut self.output, text);
    }

    #[cfg(test)]
    fn last_block(&self) -> Option<NodeId> {
        self.last_block
    }

    #[cfg(test)]
    fn output(&self) -> &str {
        &self.output
    }

    /// Terminate the output with its final newline and return it.
    #[must_use]
    pub fn finish(mut self) -> String {
        self.output.push('\n');
        self.output
    }
}

//! Human-readable and structured rendering of error chains.
//!
//! Two representations are derived from the same chain walk:
//!
//! - **Trace** lines, deepest cause first:
//!
//!   ```text
//!   Caused by: mysql open error
//!   initialization error: database access error
//!       at src/db.rs:42 (open_pool)
//!   unexpected error: nested error message
//!       at src/main.rs:10 (main)
//!   ```
//!
//! - A [`Document`] holding the outermost node's type and message, the
//!   one-line rendering of its cause, metadata merged across the chain and
//!   the trace lines. With the `serde` feature it serializes as
//!
//!   ```json
//!   {
//!     "type": "unexpected error",
//!     "msg": "nested error message",
//!     "cause": "initialization error: database access error (mysql open error)",
//!     "metadata": { "request_id": "r-1" },
//!     "stack_trace": ["Caused by: mysql open error", "..."]
//!   }
//!   ```
//!
//!   `cause`, `metadata` and `stack_trace` are omitted when empty.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::chain::Link;
use crate::types::{ErrorNode, Frame, Metadata, StackTrace, Type};

/// Structured rendering of an [`ErrorNode`] chain.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: Type,
    pub msg: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub cause: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Metadata::is_empty"))]
    pub metadata: Metadata,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "StackTrace::is_empty"))]
    pub stack_trace: StackTrace,
}

pub(crate) fn trace_lines(node: &ErrorNode) -> Vec<String> {
    let nodes: Vec<&ErrorNode> = node.chain().filter_map(Link::node).collect();
    let capacity = nodes.iter().map(|n| n.frames.len() + 1).sum::<usize>() + 1;
    let mut lines = Vec::with_capacity(capacity);

    if let Some(foreign) = node.unwrap_chain() {
        lines.push(format!("Caused by: {foreign}"));
    }
    for n in nodes.iter().rev() {
        lines.push(n.header());
        lines.extend(n.frames.iter().map(Frame::trace_line));
    }
    lines
}

pub(crate) fn document(node: &ErrorNode) -> Document {
    Document {
        kind: node.kind.clone(),
        msg: node.message.clone(),
        cause: node.cause.as_ref().map(|c| c.to_string()),
        metadata: node.merged_metadata(),
        stack_trace: node.stack_trace(),
    }
}

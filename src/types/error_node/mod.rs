//! The chained error value.
//!
//! An [`ErrorNode`] is one link of a causal chain. It records its
//! classification, a message, the call site it was built at and, optionally,
//! the error it wraps. The wrapped cause may be another `ErrorNode` or any
//! foreign `std::error::Error`.
//!
//! Everything except [`Metadata`] is fixed at construction.

use std::error::Error;

use crate::capture;
use crate::chain::{Chain, Link};
use crate::render::{self, Document};
use crate::types::{Frames, MetaValue, Metadata, StackTrace, Type};

mod traits;

/// Boxed, thread-safe error used as a wrapped cause.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// One link of a classified error chain.
///
/// Built through a [`Factory`](crate::Factory). `Display` renders the whole
/// chain on one line (`"<type>: <message> (<cause>)"`); the alternate form
/// `{:#}` renders the multi-line [`StackTrace`].
///
/// # Examples
///
/// ```
/// use error_trail::{define, Factory};
///
/// static DB_ERROR: Factory = define("database error");
///
/// let io = std::io::Error::other("connection refused");
/// let err = DB_ERROR.wrap(io, "cannot open pool").with_metadata("host", "db-01");
///
/// assert_eq!(err.to_string(), "database error: cannot open pool (connection refused)");
/// assert_eq!(err.unwrap_chain().map(|e| e.to_string()), Some("connection refused".into()));
/// ```
#[must_use]
#[derive(Debug)]
pub struct ErrorNode {
    pub(crate) kind: Type,
    pub(crate) message: String,
    pub(crate) cause: Option<BoxError>,
    pub(crate) metadata: Metadata,
    pub(crate) frames: Frames,
}

impl ErrorNode {
    /// Builds a node and captures the stack of whoever called into the crate.
    pub(crate) fn build(kind: Type, cause: Option<BoxError>, message: String) -> Self {
        Self { kind, message, cause, metadata: Metadata::new(), frames: capture::capture(0) }
    }

    /// Assembles a node from explicit parts without capturing the stack.
    #[inline]
    pub fn from_parts(
        kind: impl Into<Type>,
        message: impl Into<String>,
        cause: Option<BoxError>,
        frames: Frames,
    ) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            cause,
            metadata: Metadata::new(),
            frames,
        }
    }

    /// Own classification. Wrapped causes never change it.
    #[inline]
    pub fn kind(&self) -> &Type {
        &self.kind
    }

    /// Returns `true` if this node carries `kind`.
    #[inline]
    pub fn is_kind(&self, kind: &Type) -> bool {
        self.kind == *kind
    }

    /// The message given at construction, without the cause.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The directly wrapped error, one level down.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|e| e as &(dyn Error + 'static))
    }

    /// Consumes the node, returning the directly wrapped error.
    #[inline]
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }

    /// Frames captured at construction, innermost call first.
    #[inline]
    pub fn frames(&self) -> &Frames {
        &self.frames
    }

    /// Metadata attached to this node only.
    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Attaches `key = value`, overwriting an existing entry for `key`.
    #[inline]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.metadata.insert(key, value);
        self
    }

    /// In-place form of [`with_metadata`](Self::with_metadata).
    #[inline]
    pub fn add_metadata(
        &mut self,
        key: impl Into<String>,
        value: impl Into<MetaValue>,
    ) -> &mut Self {
        self.metadata.insert(key, value);
        self
    }

    /// Metadata of every node in the chain, merged from the outermost node
    /// inward. On key conflicts the inner node's value wins.
    pub fn merged_metadata(&self) -> Metadata {
        let mut merged = Metadata::new();
        for node in self.chain().filter_map(Link::node) {
            merged.merge(&node.metadata);
        }
        merged
    }

    /// Innermost foreign cause.
    ///
    /// Unlike [`Error::source`], which steps down a single level, this
    /// descends through every wrapped `ErrorNode` and returns the first
    /// error that was not produced by this crate. Returns `None` when the
    /// chain bottoms out in a root `ErrorNode`.
    pub fn unwrap_chain(&self) -> Option<&(dyn Error + 'static)> {
        self.chain().find_map(Link::foreign)
    }

    /// Innermost `ErrorNode` of the chain; `self` for a root or a node
    /// wrapping a foreign error directly.
    pub fn root_node(&self) -> &ErrorNode {
        self.chain().filter_map(Link::node).last().unwrap_or(self)
    }

    /// Iterates the chain from this node inward, ending at the first foreign
    /// error.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// `"<type>: <message>"` without the cause.
    #[inline]
    pub fn header(&self) -> String {
        format!("{}: {}", self.kind, self.message)
    }

    /// Renders the chain as trace lines, deepest cause first.
    pub fn stack_trace(&self) -> StackTrace {
        StackTrace::from_lines(render::trace_lines(self))
    }

    /// Structured rendering of the chain.
    pub fn document(&self) -> Document {
        render::document(self)
    }
}

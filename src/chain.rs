//! Recognition and traversal of mixed error chains.
//!
//! A chain may interleave [`ErrorNode`]s with foreign errors. Recognition is
//! a type check (`downcast_ref`), never a match on the rendered message.
//!
//! # Examples
//!
//! ```
//! use error_trail::{as_error, unwrap_chain, INITIALIZATION_ERROR, UNEXPECTED_ERROR};
//! use std::error::Error;
//!
//! let raw = std::io::Error::other("mysql open error");
//! let inner = INITIALIZATION_ERROR.wrap(raw, "database access error");
//! let outer = UNEXPECTED_ERROR.wrap(inner, "nested error message");
//!
//! let root = unwrap_chain(Some(&outer)).map(|e| e.to_string());
//! assert_eq!(root.as_deref(), Some("mysql open error"));
//!
//! let foreign = std::io::Error::other("plain");
//! assert!(as_error(Some(&foreign)).is_none());
//! assert!(as_error(None).is_none());
//! ```

use std::error::Error;

use crate::types::ErrorNode;

/// Returns `err` as an [`ErrorNode`] if it was produced by this crate.
///
/// `None` and foreign errors give `None`.
#[inline]
pub fn as_error<'a>(err: Option<&'a (dyn Error + 'static)>) -> Option<&'a ErrorNode> {
    err.and_then(recognize)
}

/// Innermost foreign cause of `err`.
///
/// For an [`ErrorNode`] this is [`ErrorNode::unwrap_chain`]. For a foreign
/// error it is a plain single-level [`Error::source`].
#[inline]
pub fn unwrap_chain<'a>(
    err: Option<&'a (dyn Error + 'static)>,
) -> Option<&'a (dyn Error + 'static)> {
    let err = err?;
    match recognize(err) {
        Some(node) => node.unwrap_chain(),
        None => err.source(),
    }
}

#[inline]
pub(crate) fn recognize<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a ErrorNode> {
    err.downcast_ref::<ErrorNode>()
}

/// One element of a chain walk.
#[derive(Debug, Clone, Copy)]
pub enum Link<'a> {
    /// An error produced by this crate.
    Node(&'a ErrorNode),
    /// The first foreign error, which ends the walk.
    Foreign(&'a (dyn Error + 'static)),
}

impl<'a> Link<'a> {
    #[inline]
    fn classify(err: &'a (dyn Error + 'static)) -> Self {
        match recognize(err) {
            Some(node) => Link::Node(node),
            None => Link::Foreign(err),
        }
    }

    /// The node, if this link is one.
    #[inline]
    pub fn node(self) -> Option<&'a ErrorNode> {
        match self {
            Link::Node(node) => Some(node),
            Link::Foreign(_) => None,
        }
    }

    /// The foreign error, if this link is the end of the walk.
    #[inline]
    pub fn foreign(self) -> Option<&'a (dyn Error + 'static)> {
        match self {
            Link::Node(_) => None,
            Link::Foreign(err) => Some(err),
        }
    }
}

/// Iterator over a chain, outermost link first.
///
/// Created by [`ErrorNode::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<Link<'a>>,
}

impl<'a> Chain<'a> {
    #[inline]
    pub(crate) fn new(start: &'a ErrorNode) -> Self {
        Self { next: Some(Link::Node(start)) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = Link<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if let Link::Node(node) = current {
            self.next = node.cause().map(Link::classify);
        }
        Some(current)
    }
}

impl core::iter::FusedIterator for Chain<'_> {}

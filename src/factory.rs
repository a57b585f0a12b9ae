//! Named error classifications.
//!
//! A [`Factory`] is bound to one [`Type`] and manufactures [`ErrorNode`]s of
//! that classification. Factories are `const`-constructible, so the usual
//! pattern is one `static` per error category, reused for the life of the
//! process.
//!
//! # Examples
//!
//! ```
//! use error_trail::{define, Factory};
//!
//! static FILE_ACCESS_ERROR: Factory = define("file i/o error");
//! static NETWORK_ERROR: Factory = define("network i/o error");
//!
//! fn read_dir(path: &str) -> Result<Vec<std::fs::DirEntry>, error_trail::ErrorNode> {
//!     match std::fs::read_dir(path) {
//!         Ok(entries) => Ok(entries.filter_map(Result::ok).collect()),
//!         Err(err) => Err(FILE_ACCESS_ERROR
//!             .wrap(err, "failed to read directory")
//!             .with_metadata("path", path)),
//!     }
//! }
//!
//! let err = read_dir("/definitely/not/here").unwrap_err();
//! assert!(FILE_ACCESS_ERROR.is(Some(&err)));
//! assert!(!NETWORK_ERROR.is(Some(&err)));
//! ```

use std::error::Error;

use crate::chain::as_error;
use crate::types::{ErrorNode, Type};

/// Input validation failed.
pub static VALIDATION_ERROR: Factory = define("invalid parameter");
/// A caller passed an argument outside the accepted domain.
pub static ILLEGAL_ARGUMENT_ERROR: Factory = define("illegal argument");
/// A component could not be set up.
pub static INITIALIZATION_ERROR: Factory = define("initialization error");
/// The operation needs an authenticated principal.
pub static AUTHENTICATION_REQUIRED_ERROR: Factory = define("authentication required");
/// Fallback classification for anything not covered by a dedicated type.
pub static UNEXPECTED_ERROR: Factory = define("unexpected error");

/// Returns a factory bound to `Type(name)`.
#[inline]
pub const fn define(name: &'static str) -> Factory {
    Factory { kind: Type::from_static(name) }
}

/// Manufacturer of [`ErrorNode`]s of one classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Factory {
    kind: Type,
}

impl Factory {
    /// Factory for a classification known only at runtime.
    #[inline]
    pub fn named(name: impl Into<String>) -> Self {
        Self { kind: Type::from(name.into()) }
    }

    /// The bound classification.
    #[inline]
    pub fn kind(&self) -> &Type {
        &self.kind
    }

    /// Builds a root error; its first frame is the caller of this method.
    #[allow(clippy::new_ret_no_self)]
    pub fn new(&self, message: impl Into<String>) -> ErrorNode {
        ErrorNode::build(self.kind.clone(), None, message.into())
    }

    /// Builds an error wrapping `cause`, which may be foreign or another
    /// [`ErrorNode`].
    pub fn wrap<E>(&self, cause: E, message: impl Into<String>) -> ErrorNode
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        ErrorNode::build(self.kind.clone(), Some(cause.into()), message.into())
    }

    /// Returns `true` iff `err` is an [`ErrorNode`] of this classification.
    ///
    /// `None` and foreign errors give `false`. Only the outermost node is
    /// inspected; causes further down the chain do not count.
    #[inline]
    pub fn is(&self, err: Option<&(dyn Error + 'static)>) -> bool {
        as_error(err).is_some_and(|node| node.is_kind(&self.kind))
    }
}

//! Typed, classified error chains.
//!
//! A [`Factory`] names an error category. It builds [`ErrorNode`]s that
//! remember where they were created, optionally wrap a lower-level cause
//! (another `ErrorNode` or any foreign error), and carry free-form
//! [`Metadata`]. A chain renders two ways: a one-line `Display`, and a
//! cause-first [`StackTrace`] that also feeds the structured [`Document`]
//! (serializable with the `serde` feature).
//!
//! # Examples
//!
//! ## Defining and raising classified errors
//!
//! ```
//! use error_trail::{define, Factory, VALIDATION_ERROR};
//!
//! static STORAGE_ERROR: Factory = define("storage error");
//!
//! let err = VALIDATION_ERROR.new("user name is a required field");
//! assert_eq!(err.to_string(), "invalid parameter: user name is a required field");
//! assert!(VALIDATION_ERROR.is(Some(&err)));
//! assert!(!STORAGE_ERROR.is(Some(&err)));
//! ```
//!
//! ## Wrapping causes
//!
//! ```
//! use error_trail::{INITIALIZATION_ERROR, UNEXPECTED_ERROR};
//!
//! let raw = std::io::Error::other("mysql open error");
//! let err = UNEXPECTED_ERROR.wrap(
//!     INITIALIZATION_ERROR.wrap(raw, "database access error"),
//!     "nested error message",
//! );
//!
//! assert_eq!(
//!     err.to_string(),
//!     "unexpected error: nested error message \
//!      (initialization error: database access error (mysql open error))"
//! );
//!
//! let trace = err.stack_trace();
//! assert_eq!(trace[0], "Caused by: mysql open error");
//! assert_eq!(trace[1], "initialization error: database access error");
//! ```
//!
//! ## Structured output
//!
//! ```
//! use error_trail::VALIDATION_ERROR;
//!
//! let err = VALIDATION_ERROR.new("bad input").with_metadata("request_id", "r-1");
//! let doc = err.document();
//! assert_eq!(doc.msg, "bad input");
//! assert!(doc.cause.is_none());
//! ```

/// Call-stack capture and its configuration
pub mod capture;
/// Recognition and traversal of mixed error chains
pub mod chain;
/// Named classifications that manufacture errors
pub mod factory;
/// Format-style construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Trace and structured rendering
pub mod render;
/// Extension traits for `Result` and `Option`
pub mod traits;
/// ErrorNode and its building blocks
pub mod types;

pub use capture::{capture, configure, CaptureConfig};
pub use chain::{as_error, unwrap_chain, Chain, Link};
pub use factory::{
    define, Factory, AUTHENTICATION_REQUIRED_ERROR, ILLEGAL_ARGUMENT_ERROR, INITIALIZATION_ERROR,
    UNEXPECTED_ERROR, VALIDATION_ERROR,
};
pub use render::Document;
pub use traits::{OptionExt, ResultExt};
pub use types::{BoxError, ErrorNode, Frame, Frames, MetaValue, Metadata, StackTrace, Type};

//! Error types and their building blocks.
//!
//! # Examples
//!
//! ```
//! use error_trail::{define, Factory, MetaValue};
//!
//! static VALIDATION: Factory = define("validation error");
//!
//! let err = VALIDATION.new("bad input").with_metadata("field", "email");
//!
//! assert_eq!(err.kind().as_str(), "validation error");
//! assert_eq!(err.metadata().get("field"), Some(&MetaValue::from("email")));
//! assert_eq!(err.stack_trace()[0], "validation error: bad input");
//! ```

pub mod error_node;
pub mod frame;
pub mod kind;
pub mod metadata;
pub mod stack_trace;

pub use error_node::{BoxError, ErrorNode};
pub use frame::{Frame, Frames};
pub use kind::Type;
pub use metadata::{MetaValue, Metadata};
pub use stack_trace::StackTrace;

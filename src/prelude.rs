//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trail::prelude::*;
//!
//! static CONFIG_ERROR: Factory = define("configuration error");
//!
//! fn load() -> Result<String, ErrorNode> {
//!     std::fs::read_to_string("config.toml").wrap_err(&CONFIG_ERROR, "loading configuration")
//! }
//!
//! let err = load().unwrap_err();
//! assert!(CONFIG_ERROR.is(Some(&err)));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`new_err!`], [`wrap_err!`]
//! - **Types**: [`ErrorNode`], [`Factory`], [`Type`], [`MetaValue`]
//! - **Functions**: [`define`], [`as_error`], [`unwrap_chain`]
//! - **Traits**: [`ResultExt`], [`OptionExt`]

// Macros
pub use crate::{new_err, wrap_err};

// Core types
pub use crate::factory::{define, Factory};
pub use crate::types::{ErrorNode, MetaValue, Type};

// Traversal
pub use crate::chain::{as_error, unwrap_chain};

// Traits
pub use crate::traits::{OptionExt, ResultExt};
#[cfg(feature = "tracing")]
pub use crate::traits::TraceResultExt;

//! Extension traits for building classified errors from `Result` and
//! `Option` values.
//!
//! - [`ResultExt`]: wrap an `Err` into an [`ErrorNode`](crate::ErrorNode)
//! - [`OptionExt`]: turn `None` into a root [`ErrorNode`](crate::ErrorNode)
//!
//! With the `tracing` feature, [`TraceResultExt`] hands failures to the
//! `tracing` ecosystem.

pub mod result_ext;
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use result_ext::{OptionExt, ResultExt};
#[cfg(feature = "tracing")]
pub use tracing_ext::{log_error, TraceResultExt};

//! Tracing integration.
//!
//! The core never logs. These helpers hand an [`ErrorNode`] to the
//! `tracing` ecosystem as one event carrying the one-line message, the
//! classification, merged metadata and the full trace.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Level;

use crate::types::ErrorNode;

/// Extension trait for `Result<T, ErrorNode>` that records failures as
/// tracing events and passes the result through untouched.
///
/// # Example
///
/// ```rust,ignore
/// use error_trail::traits::{ResultExt, TraceResultExt};
///
/// let config = std::fs::read_to_string("config.toml")
///     .wrap_err(&INITIALIZATION_ERROR, "loading configuration")
///     .log_err()?;
/// ```
pub trait TraceResultExt<T>: Sized {
    /// Records an `Err` at `ERROR` level.
    fn log_err(self) -> Self {
        self.log_err_at(Level::ERROR)
    }

    /// Records an `Err` at the given level.
    fn log_err_at(self, level: Level) -> Self;
}

impl<T> TraceResultExt<T> for Result<T, ErrorNode> {
    fn log_err_at(self, level: Level) -> Self {
        if let Err(err) = &self {
            log_error_at(err, level);
        }
        self
    }
}

/// Records `err` at `ERROR` level.
pub fn log_error(err: &ErrorNode) {
    log_error_at(err, Level::ERROR);
}

fn log_error_at(err: &ErrorNode, level: Level) {
    let kind = err.kind();
    let metadata = err.merged_metadata();
    let trace = err.stack_trace();

    // Event levels must be constants.
    match level {
        Level::ERROR => {
            tracing::error!(error.kind = %kind, metadata = %metadata, stack_trace = %trace, "{err}")
        },
        Level::WARN => {
            tracing::warn!(error.kind = %kind, metadata = %metadata, stack_trace = %trace, "{err}")
        },
        Level::INFO => {
            tracing::info!(error.kind = %kind, metadata = %metadata, stack_trace = %trace, "{err}")
        },
        Level::DEBUG => {
            tracing::debug!(error.kind = %kind, metadata = %metadata, stack_trace = %trace, "{err}")
        },
        _ => {
            tracing::trace!(error.kind = %kind, metadata = %metadata, stack_trace = %trace, "{err}")
        },
    }
}

//! Format-style shorthands for building classified errors.
//!
//! - [`macro@crate::new_err`] - builds a root error from a format string.
//! - [`macro@crate::wrap_err`] - wraps a cause with a formatted message.
//!
//! Both expand to plain [`Factory`](crate::Factory) calls at the invocation
//! site, so the captured frames start where the macro is used.
//!
//! # Examples
//!
//! ```
//! use error_trail::{new_err, wrap_err, ILLEGAL_ARGUMENT_ERROR, UNEXPECTED_ERROR};
//!
//! let code = "X-1";
//! let err = new_err!(ILLEGAL_ARGUMENT_ERROR, "illegal code {}", code);
//! assert_eq!(err.to_string(), "illegal argument: illegal code X-1");
//!
//! let wrapped = wrap_err!(UNEXPECTED_ERROR, err, "request {} failed", 7);
//! assert_eq!(
//!     wrapped.to_string(),
//!     "unexpected error: request 7 failed (illegal argument: illegal code X-1)"
//! );
//! ```

/// Builds a root [`ErrorNode`](crate::ErrorNode) with a formatted message.
///
/// # Arguments
///
/// * `$factory` - A [`Factory`](crate::Factory) value or reference
/// * remaining - `format!` arguments
#[macro_export]
macro_rules! new_err {
    ($factory:expr, $($arg:tt)+) => {
        $factory.new(::std::format!($($arg)+))
    };
}

/// Wraps a cause into an [`ErrorNode`](crate::ErrorNode) with a formatted
/// message.
///
/// # Arguments
///
/// * `$factory` - A [`Factory`](crate::Factory) value or reference
/// * `$cause` - Any error convertible into a boxed `std::error::Error`
/// * remaining - `format!` arguments
#[macro_export]
macro_rules! wrap_err {
    ($factory:expr, $cause:expr, $($arg:tt)+) => {
        $factory.wrap($cause, ::std::format!($($arg)+))
    };
}

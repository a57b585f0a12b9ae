//! Extension traits for classifying failures without `.map_err()` chains.
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::ResultExt;
//! use error_trail::{ErrorNode, INITIALIZATION_ERROR};
//!
//! fn load_config() -> Result<String, ErrorNode> {
//!     std::fs::read_to_string("config.toml")
//!         .wrap_err(&INITIALIZATION_ERROR, "loading configuration file")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(INITIALIZATION_ERROR.is(Some(&err)));
//! ```

use std::error::Error;

use crate::factory::Factory;
use crate::types::ErrorNode;

/// Wraps the error of a `Result` into an [`ErrorNode`] of a given
/// classification.
///
/// The captured frames start at the code calling these methods.
pub trait ResultExt<T, E> {
    /// Wraps the error with a fixed message.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::traits::ResultExt;
    /// use error_trail::UNEXPECTED_ERROR;
    ///
    /// let result: Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));
    /// let err = result.wrap_err(&UNEXPECTED_ERROR, "saving snapshot").unwrap_err();
    /// assert_eq!(err.to_string(), "unexpected error: saving snapshot (disk full)");
    /// ```
    fn wrap_err(self, factory: &Factory, message: impl Into<String>) -> Result<T, ErrorNode>;

    /// Wraps the error with a lazily built message.
    ///
    /// The closure only runs when the `Result` is an `Err`.
    fn wrap_err_with<F, M>(self, factory: &Factory, f: F) -> Result<T, ErrorNode>
    where
        F: FnOnce() -> M,
        M: Into<String>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn wrap_err(self, factory: &Factory, message: impl Into<String>) -> Result<T, ErrorNode> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(factory.wrap(err, message)),
        }
    }

    #[inline]
    fn wrap_err_with<F, M>(self, factory: &Factory, f: F) -> Result<T, ErrorNode>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(factory.wrap(err, f())),
        }
    }
}

/// Turns a missing value into a root [`ErrorNode`].
pub trait OptionExt<T> {
    /// # Examples
    ///
    /// ```
    /// use error_trail::traits::OptionExt;
    /// use error_trail::VALIDATION_ERROR;
    ///
    /// let name: Option<&str> = None;
    /// let err = name.ok_or_new(&VALIDATION_ERROR, "user name is a required field").unwrap_err();
    /// assert_eq!(err.to_string(), "invalid parameter: user name is a required field");
    /// ```
    fn ok_or_new(self, factory: &Factory, message: impl Into<String>) -> Result<T, ErrorNode>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn ok_or_new(self, factory: &Factory, message: impl Into<String>) -> Result<T, ErrorNode> {
        match self {
            Some(value) => Ok(value),
            None => Err(factory.new(message)),
        }
    }
}

//! Error types for rollbook.
//!
//! A single `thiserror`-derived enum covers the whole workspace.  The
//! `ensure!` and `fail!` convenience macros defined here are the standard
//! way member crates check caller contracts.

use thiserror::Error;

/// The top-level error type used throughout rollbook.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Spreadsheet export failed.
    #[error("export error: {0}")]
    Export(String),
}

/// Shorthand `Result` type used throughout rollbook.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use rb_core::{ensure, errors::Error};
/// fn named(name: &str) -> rb_core::errors::Result<&str> {
///     ensure!(!name.trim().is_empty(), "name must not be blank");
///     Ok(name)
/// }
/// assert!(named("Ana Reyes").is_ok());
/// assert!(named("   ").is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use rb_core::{fail, errors::Error};
/// fn always_err() -> rb_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

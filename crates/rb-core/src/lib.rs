//! # rb-core
//!
//! Error types and shared macros for rollbook.
//!
//! Every member crate reports failures through the [`Error`] enum defined
//! here and checks caller contracts with the `ensure!` / `fail!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

pub use errors::{Error, Result};

//! # rollbook
//!
//! Classroom attendance tracking: term calendars, holiday and no-class
//! schedules, per-section absence ledgers, attendance statistics, and a
//! styled `.xlsx` export of the whole register.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `rb-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! rollbook = "0.1"
//! ```
//!
//! ```rust
//! use rollbook::attendance::{Register, SectionId};
//! use rollbook::time::{Date, Term};
//!
//! let term = Term::spanning(
//!     Date::from_ymd(2024, 11, 4)?,
//!     Date::from_ymd(2024, 11, 8)?,
//! )?;
//! let mut register = Register::new(SectionId::new("101"), term);
//! let ana = register.roster_mut().add("Ana Reyes")?;
//!
//! register.toggle(ana, Date::from_ymd(2024, 11, 4)?);
//!
//! let stat = register.student_stat(ana);
//! assert_eq!(stat.total_absent, 1);
//! assert_eq!(stat.total_present, 4);
//! # Ok::<(), rollbook::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core error definitions and result alias.
pub use rb_core as core;

/// Date, term, and month partitioning types.
pub use rb_time as time;

/// Rosters, holiday and no-class schedules, ledgers, and statistics.
pub use rb_attendance as attendance;

/// Styled workbook export.
pub use rb_export as export;

//! # rb-time
//!
//! Date, weekday, term, and month-partitioning types for rollbook.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` — a calendar day.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// Month grouping and date pairing.
pub mod partition;

/// `Term` — the ordered date range under management.
pub mod term;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use month::Month;
pub use partition::{group_by_month, DatePair, MonthGroup};
pub use term::Term;
pub use weekday::Weekday;

//! # rb-attendance
//!
//! Sections, holidays, no-class rules, rosters, the absence ledger, and
//! attendance stats — everything a register needs between the calendar
//! layer below and the export layer above.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Day classification (`DayStatus`, `classify`).
pub mod day_status;

/// User-managed holidays.
pub mod holiday;

/// The absence ledger.
pub mod ledger;

/// `Register` — one section's in-session state.
pub mod register;

/// Students and the roster.
pub mod roster;

/// No-class rules.
pub mod schedule;

/// Section identifiers and the year-level directory.
pub mod section;

/// Per-student totals.
pub mod stats;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use day_status::{classify, DayStatus};
pub use holiday::{Holiday, HolidayId, HolidayList};
pub use ledger::AttendanceLedger;
pub use register::Register;
pub use roster::{Roster, Student, StudentId};
pub use schedule::{NoClassRule, SectionSchedule};
pub use section::{SectionDirectory, SectionId};
pub use stats::{roster_stats, school_day_count, student_stat, StudentStat};

//! Day classification shared by toggling, stats, and export.
//!
//! Every consumer of a date cell asks the same question: can attendance be
//! recorded here, and if not, why?  [`classify`] is the one answer; nothing
//! else in the workspace decides blocked-ness on its own.

use crate::holiday::HolidayList;
use crate::schedule::SectionSchedule;
use crate::section::SectionId;
use rb_time::Date;

/// What a calendar day is, from one section's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayStatus {
    /// A regular school day; attendance can be recorded.
    SchoolDay,
    /// Saturday or Sunday.
    Weekend,
    /// A holiday, carrying its display name.
    Holiday(String),
    /// Classes suspended for this section, carrying the reason.
    NoClass(String),
}

impl DayStatus {
    /// Return `true` if attendance cannot be recorded on this day.
    pub fn is_blocked(&self) -> bool {
        !matches!(self, DayStatus::SchoolDay)
    }

    /// Return the display label for a blocked day, `None` for a school day.
    pub fn label(&self) -> Option<&str> {
        match self {
            DayStatus::SchoolDay => None,
            DayStatus::Weekend => Some("Weekend"),
            DayStatus::Holiday(name) => Some(name),
            DayStatus::NoClass(reason) => Some(reason),
        }
    }
}

/// Classify `date` for `section`.
///
/// Precedence when several apply: holiday, then no-class, then weekend.  A
/// Saturday holiday therefore reports the holiday's name, and the day is
/// blocked either way.
pub fn classify(
    date: Date,
    holidays: &HolidayList,
    schedule: &SectionSchedule,
    section: &SectionId,
) -> DayStatus {
    if let Some(holiday) = holidays.check(date) {
        return DayStatus::Holiday(holiday.name.clone());
    }
    if let Some(reason) = schedule.check(date, section) {
        return DayStatus::NoClass(reason.to_owned());
    }
    if date.is_weekend() {
        return DayStatus::Weekend;
    }
    DayStatus::SchoolDay
}

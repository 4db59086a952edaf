//! `Register` — one section's complete in-session attendance state.
//!
//! The register owns the section id, the term, the roster, the holiday and
//! no-class tables, and the ledger, and is the only place ledger mutation
//! goes through a blocked-day check.  Loading saved state happens through
//! the `with_*` builders; live edits go through the `_mut` accessors and
//! [`Register::toggle`].

use crate::day_status::{classify, DayStatus};
use crate::holiday::HolidayList;
use crate::ledger::AttendanceLedger;
use crate::roster::{Roster, StudentId};
use crate::schedule::SectionSchedule;
use crate::section::SectionId;
use crate::stats::{self, StudentStat};
use rb_time::{Date, Term};

/// One section's attendance state for one term.
#[derive(Debug, Clone)]
pub struct Register {
    section: SectionId,
    term: Term,
    roster: Roster,
    holidays: HolidayList,
    schedule: SectionSchedule,
    ledger: AttendanceLedger,
}

impl Register {
    /// Create an empty register for a section and term.
    pub fn new(section: SectionId, term: Term) -> Self {
        Self {
            section,
            term,
            roster: Roster::new(),
            holidays: HolidayList::new(),
            schedule: SectionSchedule::new(),
            ledger: AttendanceLedger::new(),
        }
    }

    // ── Loading ───────────────────────────────────────────────────────────────

    /// Replace the roster (for loading saved state).
    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    /// Replace the holiday list (for loading saved state).
    pub fn with_holidays(mut self, holidays: HolidayList) -> Self {
        self.holidays = holidays;
        self
    }

    /// Replace the no-class schedule (injected configuration).
    pub fn with_schedule(mut self, schedule: SectionSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Replace the ledger (for loading saved state).
    ///
    /// Entries on blocked or out-of-term dates are tolerated; they stay
    /// inert because every reader re-checks the day classification.
    pub fn with_ledger(mut self, ledger: AttendanceLedger) -> Self {
        self.ledger = ledger;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The section this register belongs to.
    pub fn section(&self) -> &SectionId {
        &self.section
    }

    /// The term under management.
    pub fn term(&self) -> &Term {
        &self.term
    }

    /// The roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Mutable roster access for enrollment edits.
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// The holiday list.
    pub fn holidays(&self) -> &HolidayList {
        &self.holidays
    }

    /// Mutable holiday access.
    pub fn holidays_mut(&mut self) -> &mut HolidayList {
        &mut self.holidays
    }

    /// The no-class schedule.
    pub fn schedule(&self) -> &SectionSchedule {
        &self.schedule
    }

    /// Mutable schedule access.
    pub fn schedule_mut(&mut self) -> &mut SectionSchedule {
        &mut self.schedule
    }

    /// The ledger (read-only; mutate through [`Register::toggle`]).
    pub fn ledger(&self) -> &AttendanceLedger {
        &self.ledger
    }

    // ── Day classification ────────────────────────────────────────────────────

    /// Classify a date for this register's section.
    pub fn day_status(&self, date: Date) -> DayStatus {
        classify(date, &self.holidays, &self.schedule, &self.section)
    }

    /// Return `true` if attendance cannot be recorded on `date`.
    pub fn is_blocked(&self, date: Date) -> bool {
        self.day_status(date).is_blocked()
    }

    // ── Attendance ────────────────────────────────────────────────────────────

    /// Flip a student's absence flag on `date`.
    ///
    /// Returns `true` if the ledger changed.  The toggle is silently
    /// ignored, with no error and no ledger change, when the date is
    /// blocked, outside the term, or the student is not on the roster.
    pub fn toggle(&mut self, student: StudentId, date: Date) -> bool {
        if !self.roster.contains(student) {
            log::debug!("toggle ignored: student {student} is not on the roster");
            return false;
        }
        if !self.term.contains(date) {
            log::debug!("toggle ignored: {date} is outside the term");
            return false;
        }
        let status = self.day_status(date);
        if status.is_blocked() {
            log::debug!(
                "toggle ignored: {date} is blocked ({})",
                status.label().unwrap_or_default()
            );
            return false;
        }
        self.ledger.toggle(date, student);
        true
    }

    /// Return `true` if `student` is recorded absent on `date`.
    pub fn is_absent(&self, date: Date, student: StudentId) -> bool {
        self.ledger.is_absent(date, student)
    }

    // ── Derived totals ────────────────────────────────────────────────────────

    /// Recompute totals for every student, in enrollment order.
    pub fn stats(&self) -> Vec<StudentStat> {
        stats::roster_stats(
            &self.roster,
            self.term.dates(),
            |d| self.is_blocked(d),
            &self.ledger,
        )
    }

    /// Recompute one student's totals.
    pub fn student_stat(&self, student: StudentId) -> StudentStat {
        stats::student_stat(
            student,
            self.term.dates(),
            |d| self.is_blocked(d),
            &self.ledger,
        )
    }

    /// Number of school days (non-blocked dates) in the term.
    pub fn total_school_days(&self) -> usize {
        stats::school_day_count(self.term.dates(), |d| self.is_blocked(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn register() -> Register {
        let term = Term::spanning(date(2024, 11, 4), date(2024, 11, 8)).unwrap();
        Register::new(SectionId::from("101"), term)
    }

    #[test]
    fn toggle_records_and_clears() {
        let mut reg = register();
        let id = reg.roster_mut().add("Ana Reyes").unwrap();
        let d = date(2024, 11, 5);

        assert!(reg.toggle(id, d));
        assert!(reg.is_absent(d, id));
        assert!(reg.toggle(id, d));
        assert!(!reg.is_absent(d, id));
    }

    #[test]
    fn toggle_ignores_unknown_student() {
        let mut reg = register();
        assert!(!reg.toggle(StudentId::from_raw(42), date(2024, 11, 5)));
        assert!(reg.ledger().is_empty());
    }

    #[test]
    fn toggle_ignores_out_of_term_date() {
        let mut reg = register();
        let id = reg.roster_mut().add("Ana Reyes").unwrap();
        assert!(!reg.toggle(id, date(2024, 12, 2)));
        assert!(reg.ledger().is_empty());
    }

    #[test]
    fn toggle_ignores_holiday() {
        let mut reg = register();
        let id = reg.roster_mut().add("Ana Reyes").unwrap();
        let d = date(2024, 11, 5);
        reg.holidays_mut().add(d, "Special holiday");

        assert!(!reg.toggle(id, d));
        assert!(reg.ledger().is_empty());
    }

    #[test]
    fn school_day_count_skips_weekend() {
        let term = Term::spanning(date(2024, 11, 4), date(2024, 11, 10)).unwrap();
        let reg = Register::new(SectionId::from("101"), term);
        assert_eq!(reg.total_school_days(), 5);
    }
}

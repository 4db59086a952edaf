//! The absence ledger.
//!
//! An ordered map from date to per-student absence flags.  Missing entries
//! mean present, and toggling a student back to present drops the entry
//! instead of storing `false`, so two toggles restore the ledger exactly.
//!
//! The ledger itself is date-agnostic: it will happily hold entries for
//! blocked or out-of-term dates (for instance after a holiday is added over
//! recorded data).  Such entries are inert — every reader re-checks
//! blocked-ness and roster membership at read time.

use crate::roster::StudentId;
use rb_time::Date;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recorded absences, keyed by date and student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendanceLedger {
    entries: BTreeMap<Date, BTreeMap<StudentId, bool>>,
}

impl AttendanceLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `true` if `student` is recorded absent on `date`.
    pub fn is_absent(&self, date: Date, student: StudentId) -> bool {
        self.entries
            .get(&date)
            .and_then(|day| day.get(&student))
            .copied()
            .unwrap_or(false)
    }

    /// Flip the absence flag for `(date, student)`.
    ///
    /// Returns the new state (`true` = absent).  Toggling back to present
    /// removes the entry; an empty day is dropped entirely.
    pub fn toggle(&mut self, date: Date, student: StudentId) -> bool {
        let now_absent = !self.is_absent(date, student);
        self.set_absent(date, student, now_absent);
        now_absent
    }

    /// Set the absence flag explicitly.
    ///
    /// `false` removes the entry rather than storing it.
    pub fn set_absent(&mut self, date: Date, student: StudentId, absent: bool) {
        if absent {
            self.entries.entry(date).or_default().insert(student, true);
        } else if let Some(day) = self.entries.get_mut(&date) {
            day.remove(&student);
            if day.is_empty() {
                self.entries.remove(&date);
            }
        }
    }

    /// Total number of recorded absences across all dates.
    pub fn absence_count(&self) -> usize {
        self.entries
            .values()
            .map(|day| day.values().filter(|&&a| a).count())
            .sum()
    }

    /// Return `true` if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

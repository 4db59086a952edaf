//! Per-student attendance totals.
//!
//! Stats are derived data, recomputed from the term, the ledger, and the
//! day classification on every call.  Nothing here caches: editing a
//! holiday or a no-class rule changes the next computation and nothing
//! else.  Blocked days are skipped outright, so a stale ledger entry on a
//! date that later became blocked can never leak into a total.

use crate::ledger::AttendanceLedger;
use crate::roster::{Roster, StudentId};
use rb_time::Date;

/// Present/absent totals for one student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentStat {
    /// The student the totals belong to.
    pub student_id: StudentId,
    /// School days without a recorded absence.
    pub total_present: u32,
    /// School days with a recorded absence.
    pub total_absent: u32,
}

/// Compute one student's totals over `dates`.
///
/// `is_blocked` is the day classification; blocked dates contribute to
/// neither total, so `total_present + total_absent` equals the number of
/// non-blocked dates.
pub fn student_stat(
    student: StudentId,
    dates: &[Date],
    is_blocked: impl Fn(Date) -> bool,
    ledger: &AttendanceLedger,
) -> StudentStat {
    let mut stat = StudentStat {
        student_id: student,
        total_present: 0,
        total_absent: 0,
    };
    for &date in dates {
        if is_blocked(date) {
            continue;
        }
        if ledger.is_absent(date, student) {
            stat.total_absent += 1;
        } else {
            stat.total_present += 1;
        }
    }
    stat
}

/// Compute totals for every student on the roster, in enrollment order.
pub fn roster_stats(
    roster: &Roster,
    dates: &[Date],
    is_blocked: impl Fn(Date) -> bool,
    ledger: &AttendanceLedger,
) -> Vec<StudentStat> {
    roster
        .iter()
        .map(|s| student_stat(s.id, dates, &is_blocked, ledger))
        .collect()
}

/// Count the school days in `dates`, skipping blocked ones.
pub fn school_day_count(dates: &[Date], is_blocked: impl Fn(Date) -> bool) -> usize {
    dates.iter().filter(|&&d| !is_blocked(d)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn student(n: u32) -> StudentId {
        StudentId::from_raw(n)
    }

    #[test]
    fn totals_partition_the_school_days() {
        let dates = [
            date(2024, 11, 4),
            date(2024, 11, 5),
            date(2024, 11, 9), // blocked below
            date(2024, 11, 11),
        ];
        let blocked = |d: Date| d == date(2024, 11, 9);

        let mut ledger = AttendanceLedger::new();
        ledger.toggle(date(2024, 11, 4), student(1));

        let stat = student_stat(student(1), &dates, blocked, &ledger);
        assert_eq!(stat.total_present, 2);
        assert_eq!(stat.total_absent, 1);
        assert_eq!(
            (stat.total_present + stat.total_absent) as usize,
            school_day_count(&dates, blocked)
        );
    }

    #[test]
    fn blocked_entries_do_not_count() {
        // An absence recorded on a date that is now blocked stays inert.
        let dates = [date(2024, 11, 4), date(2024, 11, 5)];
        let blocked = |d: Date| d == date(2024, 11, 5);

        let mut ledger = AttendanceLedger::new();
        ledger.set_absent(date(2024, 11, 5), student(1), true);

        let stat = student_stat(student(1), &dates, blocked, &ledger);
        assert_eq!(stat.total_present, 1);
        assert_eq!(stat.total_absent, 0);
    }

    #[test]
    fn empty_dates_give_zero_totals() {
        let ledger = AttendanceLedger::new();
        let stat = student_stat(student(1), &[], |_| false, &ledger);
        assert_eq!(stat.total_present, 0);
        assert_eq!(stat.total_absent, 0);
        assert_eq!(school_day_count(&[], |_| false), 0);
    }

    #[test]
    fn roster_stats_follow_enrollment_order() {
        let mut roster = Roster::new();
        let a = roster.add("Ana Reyes").unwrap();
        let b = roster.add("Ben Santos").unwrap();

        let dates = [date(2024, 11, 4), date(2024, 11, 5)];
        let mut ledger = AttendanceLedger::new();
        ledger.toggle(date(2024, 11, 4), b);

        let stats = roster_stats(&roster, &dates, |_| false, &ledger);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].student_id, a);
        assert_eq!(stats[0].total_present, 2);
        assert_eq!(stats[1].student_id, b);
        assert_eq!(stats[1].total_absent, 1);
    }
}

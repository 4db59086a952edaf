//! Month grouping and pairing of term dates.
//!
//! The attendance grid and the spreadsheet export both lay dates out as one
//! header band per calendar month and one column per two consecutive dates.
//! This module derives that structure: [`group_by_month`] splits a date list
//! into [`MonthGroup`]s, and each group chunks into [`DatePair`]s.
//!
//! Groups are keyed by (year, month), so a term running November through
//! January keeps the two years' months apart even when names repeat.

use crate::date::Date;
use crate::month::Month;
use rb_core::errors::Result;

/// All dates of one calendar month within a term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup {
    year: u16,
    month: Month,
    dates: Vec<Date>,
}

impl MonthGroup {
    /// Return the year this group belongs to.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the month this group belongs to.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Return the display label (the month's full name).
    pub fn label(&self) -> &'static str {
        self.month.long_name()
    }

    /// Return the group's dates in input order.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of dates in the group.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if the group has no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Chunk the group's dates into windows of `size`.
    ///
    /// The last window may be short; it is never padded.  `size` must be
    /// positive.
    pub fn chunked(&self, size: usize) -> Result<Vec<&[Date]>> {
        rb_core::ensure!(size > 0, "chunk size must be positive");
        Ok(self.dates.chunks(size).collect())
    }

    /// Chunk the group's dates into two-date display columns.
    ///
    /// With an odd date count the final pair's second slot stays empty.
    pub fn pairs(&self) -> Vec<DatePair> {
        self.dates
            .chunks(2)
            .map(|c| DatePair {
                first: c[0],
                second: c.get(1).copied(),
            })
            .collect()
    }
}

/// A two-slot display column: one or two consecutive dates of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePair {
    /// The column's first date.
    pub first: Date,
    /// The column's second date; `None` when the month ran out of dates.
    pub second: Option<Date>,
}

/// Partition `dates` into per-month groups.
///
/// Groups appear in order of first appearance and keep their dates in input
/// order.  Every input date lands in exactly one group.
pub fn group_by_month(dates: &[Date]) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    for &date in dates {
        let key = (date.year(), date.month_of_year());
        match groups.iter_mut().find(|g| (g.year, g.month) == key) {
            Some(group) => group.dates.push(date),
            None => groups.push(MonthGroup {
                year: key.0,
                month: key.1,
                dates: vec![date],
            }),
        }
    }
    groups
}

//! `Term` — the ordered set of calendar dates a section is tracked over.
//!
//! A term holds every calendar day in scope, weekends and holidays included;
//! whether a given day is an actual school day is decided elsewhere, per
//! date, never baked into the term.

use crate::date::Date;
use rb_core::errors::Result;

/// An ordered, duplicate-free sequence of calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Term {
    dates: Vec<Date>,
}

impl Term {
    /// Build a term from an explicit list of dates.
    ///
    /// The list must be strictly ascending (no duplicates).
    pub fn from_dates(dates: Vec<Date>) -> Result<Self> {
        for w in dates.windows(2) {
            rb_core::ensure!(
                w[0] < w[1],
                "term dates must be strictly ascending: {} then {}",
                w[0],
                w[1]
            );
        }
        Ok(Self { dates })
    }

    /// Build a term spanning every calendar day from `first` to `last`,
    /// both inclusive.
    pub fn spanning(first: Date, last: Date) -> Result<Self> {
        rb_core::ensure!(
            first <= last,
            "term start {first} is after term end {last}"
        );
        let mut dates = Vec::new();
        let mut d = first;
        while d < last {
            dates.push(d);
            d = d.next_day()?;
        }
        dates.push(last);
        Ok(Self { dates })
    }

    /// An empty term.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Return all dates in the term.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if the term has no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Return the first date, if any.
    pub fn first(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// Return the last date, if any.
    pub fn last(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// Return `true` if `date` is part of the term.
    pub fn contains(&self, date: Date) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    /// Iterate over the dates in order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.dates.iter().copied()
    }
}

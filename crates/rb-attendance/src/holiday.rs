//! User-managed holidays.
//!
//! Holidays are plain records added and removed at run time, not a built-in
//! national calendar.  Resolution is a linear scan: the first holiday whose
//! date matches wins, and a date with no match is simply not a holiday.

use rb_time::Date;
use serde::{Deserialize, Serialize};

/// Identifier of a holiday record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayId(u32);

impl HolidayId {
    /// Return the raw id value.
    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// A single holiday record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Unique record id.
    pub id: HolidayId,
    /// The calendar day the holiday falls on.
    pub date: Date,
    /// Display name; an absent name deserializes to the empty string.
    #[serde(default)]
    pub name: String,
}

/// The holidays in effect for a register.
///
/// Serializes as a plain array of [`Holiday`] records; the id counter is
/// re-derived on load so ids stay unique within a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Holiday>", into = "Vec<Holiday>")]
pub struct HolidayList {
    holidays: Vec<Holiday>,
    next_id: u32,
}

impl HolidayList {
    /// An empty holiday list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a holiday, returning its freshly assigned id.
    ///
    /// The name is stored trimmed; a blank name is kept as the empty string
    /// rather than rejected.
    pub fn add(&mut self, date: Date, name: &str) -> HolidayId {
        let id = HolidayId(self.next_id);
        self.next_id += 1;
        self.holidays.push(Holiday {
            id,
            date,
            name: name.trim().to_owned(),
        });
        id
    }

    /// Remove the holiday with the given id.
    ///
    /// Returns `true` if a record was removed.
    pub fn remove(&mut self, id: HolidayId) -> bool {
        let before = self.holidays.len();
        self.holidays.retain(|h| h.id != id);
        self.holidays.len() < before
    }

    /// Return the first holiday falling on `date`, if any.
    pub fn check(&self, date: Date) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.date == date)
    }

    /// All records in insertion order.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl From<Vec<Holiday>> for HolidayList {
    fn from(holidays: Vec<Holiday>) -> Self {
        let next_id = holidays.iter().map(|h| h.id.0 + 1).max().unwrap_or(0);
        Self { holidays, next_id }
    }
}

impl From<HolidayList> for Vec<Holiday> {
    fn from(list: HolidayList) -> Self {
        list.holidays
    }
}

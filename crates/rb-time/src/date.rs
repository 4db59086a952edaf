//! `Date` — a calendar day.
//!
//! Attendance is tracked at day granularity, so a date is stored as its
//! calendar fields rather than a serial number.  Field order (year, month,
//! day) makes the derived ordering chronological.
//!
//! The canonical text form is ISO `yyyy-mm-dd`; [`Date`] parses from it and
//! serializes to it.

use crate::month::Month;
use crate::weekday::Weekday;
use rb_core::errors::{Error, Result};

/// A calendar day.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

impl Date {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=9999).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 9999]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date { year, month, day })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month).expect("month field always in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.day
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Sakamoto's method; the raw result is 0 = Sunday … 6 = Saturday.
        const T: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let y = if self.month < 3 {
            self.year as i32 - 1
        } else {
            self.year as i32
        };
        let raw = (y + y / 4 - y / 100 + y / 400
            + T[self.month as usize - 1]
            + self.day as i32)
            % 7;
        let ord = ((raw + 6) % 7 + 1) as u8;
        Weekday::from_ordinal(ord).expect("ordinal always in 1..=7")
    }

    /// Return `true` if this date falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    // ── Stepping ──────────────────────────────────────────────────────────────

    /// Return the next calendar day.
    ///
    /// Returns an error if the result would leave the supported year range.
    pub fn next_day(self) -> Result<Self> {
        if self.day < days_in_month(self.year, self.month) {
            return Ok(Date {
                day: self.day + 1,
                ..self
            });
        }
        if self.month < 12 {
            return Ok(Date {
                year: self.year,
                month: self.month + 1,
                day: 1,
            });
        }
        Date::from_ymd(self.year + 1, 1, 1)
    }
}

// ── Parsing & formatting ──────────────────────────────────────────────────────

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse an ISO `yyyy-mm-dd` string.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, '-');
        let (y, m, d) = match (parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d)) => (y, m, d),
            _ => return Err(Error::Date(format!("expected yyyy-mm-dd, got {s:?}"))),
        };
        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(Error::Date(format!("expected yyyy-mm-dd, got {s:?}")));
        }
        let year: u16 = y
            .parse()
            .map_err(|_| Error::Date(format!("invalid year in {s:?}")))?;
        let month: u8 = m
            .parse()
            .map_err(|_| Error::Date(format!("invalid month in {s:?}")))?;
        let day: u8 = d
            .parse()
            .map_err(|_| Error::Date(format!("invalid day in {s:?}")))?;
        Date::from_ymd(year, month, day)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({:04}-{:02}-{:02})", self.year, self.month, self.day)
    }
}

// ── Serde (ISO string form) ───────────────────────────────────────────────────

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd_validation() {
        assert!(Date::from_ymd(2024, 11, 4).is_ok());
        assert!(Date::from_ymd(2024, 0, 1).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_ymd(2024, 11, 31).is_err());
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2024, 2, 29).is_ok()); // leap
        assert!(Date::from_ymd(1899, 1, 1).is_err());
    }

    #[test]
    fn test_ordering() {
        let a = Date::from_ymd(2024, 11, 30).unwrap();
        let b = Date::from_ymd(2024, 12, 1).unwrap();
        let c = Date::from_ymd(2025, 1, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_weekday() {
        // 2024-11-04 is a Monday, 2024-11-09 a Saturday.
        assert_eq!(
            Date::from_ymd(2024, 11, 4).unwrap().weekday(),
            Weekday::Monday
        );
        assert_eq!(
            Date::from_ymd(2024, 11, 9).unwrap().weekday(),
            Weekday::Saturday
        );
        // 2024-01-01 is a Monday, 2000-01-01 a Saturday.
        assert_eq!(
            Date::from_ymd(2024, 1, 1).unwrap().weekday(),
            Weekday::Monday
        );
        assert_eq!(
            Date::from_ymd(2000, 1, 1).unwrap().weekday(),
            Weekday::Saturday
        );
    }

    #[test]
    fn test_is_weekend() {
        assert!(Date::from_ymd(2024, 11, 9).unwrap().is_weekend());
        assert!(Date::from_ymd(2024, 11, 10).unwrap().is_weekend());
        assert!(!Date::from_ymd(2024, 11, 11).unwrap().is_weekend());
    }

    #[test]
    fn test_next_day() {
        let d = Date::from_ymd(2024, 11, 30).unwrap();
        assert_eq!(d.next_day().unwrap(), Date::from_ymd(2024, 12, 1).unwrap());
        let eoy = Date::from_ymd(2024, 12, 31).unwrap();
        assert_eq!(
            eoy.next_day().unwrap(),
            Date::from_ymd(2025, 1, 1).unwrap()
        );
        let leap = Date::from_ymd(2024, 2, 28).unwrap();
        assert_eq!(
            leap.next_day().unwrap(),
            Date::from_ymd(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_parse_display_roundtrip() {
        let d: Date = "2024-11-04".parse().unwrap();
        assert_eq!(d, Date::from_ymd(2024, 11, 4).unwrap());
        assert_eq!(d.to_string(), "2024-11-04");

        assert!("2024-11".parse::<Date>().is_err());
        assert!("2024-11-4".parse::<Date>().is_err());
        assert!("24-11-04".parse::<Date>().is_err());
        assert!("2024-13-01".parse::<Date>().is_err());
        assert!("abcd-ef-gh".parse::<Date>().is_err());
    }

    #[test]
    fn test_serde_iso_string() {
        let d = Date::from_ymd(2024, 11, 4).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2024-11-04\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<Date>("\"2024-02-30\"").is_err());
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 11), 30);
    }
}

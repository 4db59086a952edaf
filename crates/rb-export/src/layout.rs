//! Column and row plan for the attendance grid.
//!
//! The grid packs two school days into every date column, so a student
//! occupies two worksheet rows and a month span covers one column per
//! date pair. All indices here are zero-based worksheet coordinates.

use rb_core::errors::{Error, Result};
use rb_time::{group_by_month, Date, DatePair, Month};

/// Row holding the workbook title.
pub const TITLE_ROW: u32 = 0;
/// Row holding the merged month names.
pub const MONTH_ROW: u32 = 1;
/// Row holding the first day of each date pair.
pub const DAY_ROW_TOP: u32 = 2;
/// Row holding the second day of each date pair.
pub const DAY_ROW_BOTTOM: u32 = 3;
/// First row of student data.
pub const FIRST_DATA_ROW: u32 = 4;

/// Column holding the student row number.
pub const NO_COL: u16 = 0;
/// Column holding the student name.
pub const NAME_COL: u16 = 1;
/// First date-pair column.
pub const FIRST_PAIR_COL: u16 = 2;

/// Width of the row-number column.
pub const NO_WIDTH: f64 = 4.0;
/// Width of the name column.
pub const NAME_WIDTH: f64 = 30.0;
/// Width of each date-pair column.
pub const PAIR_WIDTH: f64 = 4.0;
/// Width of the totals column.
pub const TOTAL_WIDTH: f64 = 8.0;

/// One date pair placed at a worksheet column.
#[derive(Debug, Clone, Copy)]
pub struct PairColumn {
    /// Calendar year of the pair.
    pub year: u16,
    /// Calendar month of the pair.
    pub month: Month,
    /// The one or two dates rendered in this column.
    pub pair: DatePair,
    /// Zero-based worksheet column.
    pub col: u16,
}

/// Contiguous run of columns belonging to one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSpan {
    /// Calendar year of the span.
    pub year: u16,
    /// Calendar month of the span.
    pub month: Month,
    /// First worksheet column of the span.
    pub first_col: u16,
    /// Last worksheet column of the span, inclusive.
    pub last_col: u16,
}

impl MonthSpan {
    /// Header text for the span.
    pub fn label(&self) -> &'static str {
        self.month.long_name()
    }
}

/// Complete column plan for one term.
#[derive(Debug, Clone)]
pub struct GridLayout {
    pairs: Vec<PairColumn>,
    spans: Vec<MonthSpan>,
}

impl GridLayout {
    /// Lays out the given school days left to right.
    ///
    /// Dates are grouped by calendar month and paired within each group,
    /// so a month never shares a column with its neighbour. An empty date
    /// list yields a plan with no pair columns; headers still render.
    pub fn plan(dates: &[Date]) -> Result<Self> {
        let mut pairs = Vec::new();
        let mut col = FIRST_PAIR_COL;
        for group in group_by_month(dates) {
            for pair in group.pairs() {
                pairs.push(PairColumn {
                    year: group.year(),
                    month: group.month(),
                    pair,
                    col,
                });
                col = col
                    .checked_add(1)
                    .ok_or_else(|| Error::Export("term does not fit in a worksheet".into()))?;
            }
        }
        let spans = month_spans(&pairs);
        Ok(GridLayout { pairs, spans })
    }

    /// Date-pair columns in worksheet order.
    pub fn pair_columns(&self) -> &[PairColumn] {
        &self.pairs
    }

    /// Merged month header spans in worksheet order.
    pub fn month_spans(&self) -> &[MonthSpan] {
        &self.spans
    }

    /// Number of date-pair columns.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Column of the per-student totals, directly after the last pair.
    pub fn total_col(&self) -> u16 {
        FIRST_PAIR_COL + self.pairs.len() as u16
    }

    /// Worksheet rows of the student at the given roster position.
    pub fn student_rows(index: usize) -> (u32, u32) {
        let top = FIRST_DATA_ROW + 2 * index as u32;
        (top, top + 1)
    }
}

fn month_spans(pairs: &[PairColumn]) -> Vec<MonthSpan> {
    let mut spans: Vec<MonthSpan> = Vec::new();
    for pair in pairs {
        match spans.last_mut() {
            Some(span)
                if span.year == pair.year
                    && span.month == pair.month
                    && span.last_col + 1 == pair.col =>
            {
                span.last_col = pair.col;
            }
            _ => spans.push(MonthSpan {
                year: pair.year,
                month: pair.month,
                first_col: pair.col,
                last_col: pair.col,
            }),
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn pairs_fill_columns_left_to_right() {
        let dates = [
            date(2024, 11, 4),
            date(2024, 11, 5),
            date(2024, 11, 11),
            date(2024, 12, 2),
        ];
        let layout = GridLayout::plan(&dates).unwrap();

        assert_eq!(layout.pair_count(), 3);
        let cols: Vec<u16> = layout.pair_columns().iter().map(|p| p.col).collect();
        assert_eq!(cols, vec![2, 3, 4]);
        assert_eq!(layout.total_col(), 5);

        // November keeps its odd date in its own column.
        assert_eq!(layout.pair_columns()[1].pair.first, date(2024, 11, 11));
        assert!(layout.pair_columns()[1].pair.second.is_none());
        assert_eq!(layout.pair_columns()[2].month, Month::December);
    }

    #[test]
    fn month_spans_follow_column_runs() {
        let dates = [
            date(2024, 11, 4),
            date(2024, 11, 5),
            date(2024, 11, 6),
            date(2024, 12, 2),
            date(2024, 12, 3),
        ];
        let layout = GridLayout::plan(&dates).unwrap();

        let spans = layout.month_spans();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].month, Month::November);
        assert_eq!((spans[0].first_col, spans[0].last_col), (2, 3));
        assert_eq!(spans[0].label(), "November");
        assert_eq!(spans[1].month, Month::December);
        assert_eq!((spans[1].first_col, spans[1].last_col), (4, 4));
    }

    #[test]
    fn same_month_in_different_years_stays_split() {
        let dates = [date(2024, 11, 4), date(2025, 11, 3)];
        let layout = GridLayout::plan(&dates).unwrap();

        let spans = layout.month_spans();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].year, 2024);
        assert_eq!(spans[1].year, 2025);
    }

    #[test]
    fn empty_term_plans_no_pairs() {
        let layout = GridLayout::plan(&[]).unwrap();
        assert_eq!(layout.pair_count(), 0);
        assert!(layout.month_spans().is_empty());
        assert_eq!(layout.total_col(), FIRST_PAIR_COL);
    }

    #[test]
    fn student_rows_step_by_two() {
        assert_eq!(GridLayout::student_rows(0), (4, 5));
        assert_eq!(GridLayout::student_rows(1), (6, 7));
        assert_eq!(GridLayout::student_rows(9), (22, 23));
    }
}

//! Styled spreadsheet export for attendance registers.
//!
//! Turns a [`rb_attendance::Register`] into an `.xlsx` workbook laid out
//! the way section advisers file attendance: months colour-coded across
//! the top, two school days per column, two rows per student, and a
//! presence total at the right edge.
//!
//! [`writer::build_workbook`] produces the in-memory workbook;
//! [`writer::write_file`] saves it. [`layout::GridLayout`] exposes the
//! column plan on its own for callers that need to address cells.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Column and row plan for the grid.
pub mod layout;

/// Cell formats and the month palette.
pub mod style;

/// Workbook assembly and file output.
pub mod writer;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use layout::{GridLayout, MonthSpan, PairColumn};
pub use writer::{
    build_workbook, cell_mark, filename_today, suggested_filename, write_file, CellMark,
};

//! Cell formats for the attendance workbook.
//!
//! Every month gets its own fill colour so the grid reads at a glance.
//! Formats are built fresh per call; `rust_xlsxwriter` deduplicates them
//! internally when the workbook is written.

use rb_time::Month;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder};

/// Marker written into a cell for a recorded absence.
pub const ABSENT_MARK: &str = "A";

const FONT_NAME: &str = "Arial";
const TITLE_SIZE: f64 = 16.0;
const DAY_SIZE: f64 = 9.0;
const TOTAL_HEADER_SIZE: f64 = 8.0;
const ABSENT_FONT: Color = Color::RGB(0xFF0000);

/// Background fill for a month's columns.
pub fn month_fill(month: Month) -> Color {
    match month {
        Month::January => Color::RGB(0xADD8E6),
        Month::February => Color::RGB(0xADD8E6),
        Month::March => Color::RGB(0xE6E6FA),
        Month::April => Color::RGB(0x90EE90),
        Month::May => Color::RGB(0xFFDAB9),
        Month::June => Color::RGB(0xFFB6C1),
        Month::July => Color::RGB(0xAFEEEE),
        Month::August => Color::RGB(0xF0E68C),
        Month::September => Color::RGB(0xFFA07A),
        Month::October => Color::RGB(0xD8BFD8),
        Month::November => Color::RGB(0xFFFF00),
        Month::December => Color::RGB(0x90EE90),
    }
}

/// Workbook title spanning the whole grid.
pub fn title() -> Format {
    Format::new()
        .set_font_name(FONT_NAME)
        .set_font_size(TITLE_SIZE)
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

/// Month name header over that month's pair columns.
pub fn month_header(month: Month) -> Format {
    Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_background_color(month_fill(month))
        .set_border(FormatBorder::Thin)
}

/// "NO" and "NAME" headers in the top-left corner.
pub fn corner_header() -> Format {
    Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
}

/// Header of the per-student totals column.
pub fn total_header() -> Format {
    Format::new()
        .set_bold()
        .set_font_size(TOTAL_HEADER_SIZE)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
}

/// Day-of-month number in the two date rows.
pub fn day_number(month: Month) -> Format {
    Format::new()
        .set_font_size(DAY_SIZE)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_background_color(month_fill(month))
        .set_border(FormatBorder::Thin)
}

/// Row number in the "NO" column.
pub fn row_number() -> Format {
    Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
}

/// Student name cell, indented off the border.
pub fn student_name() -> Format {
    Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_indent(1)
        .set_border(FormatBorder::Thin)
}

/// Attendance cell carrying only the month fill.
pub fn day_cell(month: Month) -> Format {
    Format::new()
        .set_background_color(month_fill(month))
        .set_border(FormatBorder::Thin)
}

/// Attendance cell holding the absence marker.
pub fn absent_cell(month: Month) -> Format {
    Format::new()
        .set_bold()
        .set_font_color(ABSENT_FONT)
        .set_background_color(month_fill(month))
        .set_border(FormatBorder::Thin)
}

/// Per-student totals cell.
pub fn total_cell() -> Format {
    Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
}

//! Attendance workbook writer.
//!
//! Renders a register into the two-rows-per-student grid: a title row, a
//! month header band, two date rows, then one pair of rows per student
//! ending in a presence total. Blocked days keep their month fill but
//! stay empty, so printed sheets read the same as the on-screen grid.

use std::path::Path;

use rb_attendance::{Register, SectionId, StudentId};
use rb_core::errors::{Error, Result};
use rb_time::Date;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::layout::{self, GridLayout, PairColumn};
use crate::style;

/// What one attendance cell shows for one student on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    /// Not a school day; the cell keeps its fill and stays empty.
    Blocked,
    /// The student attended; the cell stays empty and counts as present.
    Present,
    /// The student was marked absent; the cell shows the marker.
    Absent,
}

/// Resolves the mark for one student on one date.
///
/// Blocked days win over ledger entries, so an absence recorded before a
/// holiday was declared disappears from the sheet without being deleted.
pub fn cell_mark(register: &Register, student: StudentId, date: Date) -> CellMark {
    if register.is_blocked(date) {
        CellMark::Blocked
    } else if register.is_absent(date, student) {
        CellMark::Absent
    } else {
        CellMark::Present
    }
}

/// Builds the styled workbook for a register.
///
/// The worksheet is named `Section {id} - {term}` and holds the whole
/// term in one grid. A register with no dates or no students still
/// produces a well-formed workbook with its header rows in place.
pub fn build_workbook(register: &Register, term_label: &str) -> Result<Workbook> {
    let plan = GridLayout::plan(register.term().dates())?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(format!("Section {} - {}", register.section(), term_label))
        .map_err(xlsx_err)?;

    set_widths(worksheet, &plan)?;
    write_title(worksheet, term_label, plan.total_col())?;
    write_headers(worksheet, &plan)?;
    write_students(worksheet, register, &plan)?;

    Ok(workbook)
}

/// Builds the workbook and saves it at `path`.
pub fn write_file(register: &Register, term_label: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = build_workbook(register, term_label)?;
    workbook.save(path).map_err(xlsx_err)?;
    log::info!(
        "exported section {} to {}",
        register.section(),
        path.display()
    );
    Ok(())
}

/// File name for an export generated on the given day.
pub fn suggested_filename(section: &SectionId, term_label: &str, generated_on: Date) -> String {
    format!(
        "Attendance_{}_{}_{:04}{:02}{:02}.xlsx",
        section,
        term_label.to_uppercase(),
        generated_on.year(),
        generated_on.month(),
        generated_on.day_of_month(),
    )
}

/// File name for an export generated today.
pub fn filename_today(section: &SectionId, term_label: &str) -> Result<String> {
    use chrono::Datelike;

    let now = chrono::Local::now().date_naive();
    let year = u16::try_from(now.year())
        .map_err(|_| Error::Date("system date out of range".into()))?;
    let today = Date::from_ymd(year, now.month() as u8, now.day() as u8)?;
    Ok(suggested_filename(section, term_label, today))
}

fn set_widths(worksheet: &mut Worksheet, plan: &GridLayout) -> Result<()> {
    worksheet
        .set_column_width(layout::NO_COL, layout::NO_WIDTH)
        .map_err(xlsx_err)?;
    worksheet
        .set_column_width(layout::NAME_COL, layout::NAME_WIDTH)
        .map_err(xlsx_err)?;
    for pair in plan.pair_columns() {
        worksheet
            .set_column_width(pair.col, layout::PAIR_WIDTH)
            .map_err(xlsx_err)?;
    }
    worksheet
        .set_column_width(plan.total_col(), layout::TOTAL_WIDTH)
        .map_err(xlsx_err)?;
    Ok(())
}

fn write_title(worksheet: &mut Worksheet, term_label: &str, total_col: u16) -> Result<()> {
    // The title always spans at least the number, name and total columns.
    let text = format!("{} ATTENDANCE", term_label.to_uppercase());
    worksheet
        .merge_range(
            layout::TITLE_ROW,
            layout::NO_COL,
            layout::TITLE_ROW,
            total_col,
            &text,
            &style::title(),
        )
        .map_err(xlsx_err)?;
    Ok(())
}

fn write_headers(worksheet: &mut Worksheet, plan: &GridLayout) -> Result<()> {
    let corner = style::corner_header();
    worksheet
        .merge_range(
            layout::MONTH_ROW,
            layout::NO_COL,
            layout::DAY_ROW_BOTTOM,
            layout::NO_COL,
            "NO",
            &corner,
        )
        .map_err(xlsx_err)?;
    worksheet
        .merge_range(
            layout::MONTH_ROW,
            layout::NAME_COL,
            layout::DAY_ROW_BOTTOM,
            layout::NAME_COL,
            "NAME",
            &corner,
        )
        .map_err(xlsx_err)?;
    worksheet
        .merge_range(
            layout::MONTH_ROW,
            plan.total_col(),
            layout::DAY_ROW_BOTTOM,
            plan.total_col(),
            "AT",
            &style::total_header(),
        )
        .map_err(xlsx_err)?;

    for span in plan.month_spans() {
        let format = style::month_header(span.month);
        // A single-column month cannot be merged.
        if span.first_col == span.last_col {
            worksheet
                .write_string_with_format(layout::MONTH_ROW, span.first_col, span.label(), &format)
                .map_err(xlsx_err)?;
        } else {
            worksheet
                .merge_range(
                    layout::MONTH_ROW,
                    span.first_col,
                    layout::MONTH_ROW,
                    span.last_col,
                    span.label(),
                    &format,
                )
                .map_err(xlsx_err)?;
        }
    }

    for pair in plan.pair_columns() {
        let format = style::day_number(pair.month);
        worksheet
            .write_number_with_format(
                layout::DAY_ROW_TOP,
                pair.col,
                f64::from(pair.pair.first.day_of_month()),
                &format,
            )
            .map_err(xlsx_err)?;
        if let Some(second) = pair.pair.second {
            worksheet
                .write_number_with_format(
                    layout::DAY_ROW_BOTTOM,
                    pair.col,
                    f64::from(second.day_of_month()),
                    &format,
                )
                .map_err(xlsx_err)?;
        } else {
            worksheet
                .write_blank(layout::DAY_ROW_BOTTOM, pair.col, &format)
                .map_err(xlsx_err)?;
        }
    }
    Ok(())
}

fn write_students(worksheet: &mut Worksheet, register: &Register, plan: &GridLayout) -> Result<()> {
    let number = style::row_number();
    let name = style::student_name();
    let total = style::total_cell();
    let total_col = plan.total_col();

    for (index, student) in register.roster().iter().enumerate() {
        let (top, bottom) = GridLayout::student_rows(index);

        // Merged ranges take a string; numbers land on the top-left cell
        // afterwards.
        worksheet
            .merge_range(top, layout::NO_COL, bottom, layout::NO_COL, "", &number)
            .map_err(xlsx_err)?;
        worksheet
            .write_number_with_format(top, layout::NO_COL, (index + 1) as f64, &number)
            .map_err(xlsx_err)?;
        worksheet
            .merge_range(top, layout::NAME_COL, bottom, layout::NAME_COL, &student.name, &name)
            .map_err(xlsx_err)?;

        let mut present = 0u32;
        for pair in plan.pair_columns() {
            present += write_mark(worksheet, register, student.id, pair.pair.first, top, pair)?;
            if let Some(second) = pair.pair.second {
                present += write_mark(worksheet, register, student.id, second, bottom, pair)?;
            } else {
                worksheet
                    .write_blank(bottom, pair.col, &style::day_cell(pair.month))
                    .map_err(xlsx_err)?;
            }
        }

        worksheet
            .merge_range(top, total_col, bottom, total_col, "", &total)
            .map_err(xlsx_err)?;
        worksheet
            .write_number_with_format(top, total_col, f64::from(present), &total)
            .map_err(xlsx_err)?;
    }
    Ok(())
}

fn write_mark(
    worksheet: &mut Worksheet,
    register: &Register,
    student: StudentId,
    date: Date,
    row: u32,
    pair: &PairColumn,
) -> Result<u32> {
    match cell_mark(register, student, date) {
        CellMark::Absent => {
            worksheet
                .write_string_with_format(
                    row,
                    pair.col,
                    style::ABSENT_MARK,
                    &style::absent_cell(pair.month),
                )
                .map_err(xlsx_err)?;
            Ok(0)
        }
        CellMark::Present => {
            worksheet
                .write_blank(row, pair.col, &style::day_cell(pair.month))
                .map_err(xlsx_err)?;
            Ok(1)
        }
        CellMark::Blocked => {
            worksheet
                .write_blank(row, pair.col, &style::day_cell(pair.month))
                .map_err(xlsx_err)?;
            Ok(0)
        }
    }
}

fn xlsx_err(err: XlsxError) -> Error {
    Error::Export(err.to_string())
}

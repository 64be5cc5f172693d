//! Text coercion for worksheet cells.
//!
//! Every value handed to the page is a string. Missing cells become `""`,
//! never a null marker, and the output for a given cell is always the same.

use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime, Timelike};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts a single cell to its display text.
///
/// * text and ISO duration strings are returned as-is
/// * whole floats drop the fractional part (`2020.0` -> `2020`)
/// * booleans render as `True` / `False`
/// * date-times render as `YYYY-MM-DD HH:MM:SS`
/// * error cells render as their spreadsheet code (`#DIV/0!`)
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => float_text(*f),
        Data::Bool(b) => String::from(if *b { "True" } else { "False" }),
        Data::DateTime(dt) if dt.is_duration() => duration_text(dt.as_f64()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) => value.format(DATETIME_FORMAT).to_string(),
            None => float_text(dt.as_f64()),
        },
        Data::DateTimeIso(s) => match parse_iso(s) {
            Some(value) => value.format(DATETIME_FORMAT).to_string(),
            None => s.clone(),
        },
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

/// Same as [`cell_text`] but treats `None` (a cell past the end of a short
/// row) as empty.
pub fn optional_cell_text(cell: Option<&Data>) -> String {
    cell.map(cell_text).unwrap_or_default()
}

/// Extracts a calendar date-time from a cell, if it holds one.
pub fn cell_datetime(cell: &Data) -> Option<NaiveDateTime> {
    match cell {
        Data::DateTime(dt) if dt.is_datetime() => dt.as_datetime(),
        Data::DateTimeIso(s) => parse_iso(s),
        _ => None,
    }
}

/// Stringifies a whole date column at once.
///
/// When every date-time in the column falls on midnight the time part is
/// dropped (`2024-01-15`), otherwise each renders as `2024-01-15 09:30:00`.
/// Cells that are not date-times fall back to [`cell_text`].
pub fn date_column_text(cells: &[Option<&Data>]) -> Vec<String> {
    let parsed: Vec<Option<NaiveDateTime>> = cells
        .iter()
        .map(|cell| cell.and_then(cell_datetime))
        .collect();

    let date_only = parsed
        .iter()
        .flatten()
        .all(|dt| dt.num_seconds_from_midnight() == 0 && dt.nanosecond() == 0);
    let format = if date_only { DATE_FORMAT } else { DATETIME_FORMAT };

    cells
        .iter()
        .zip(parsed)
        .map(|(cell, dt)| match dt {
            Some(dt) => dt.format(format).to_string(),
            None => optional_cell_text(*cell),
        })
        .collect()
}

fn float_text(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    }
}

// Excel stores durations as fractional days.
fn duration_text(days: f64) -> String {
    let total = (days * 86_400.0).round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

fn parse_iso(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

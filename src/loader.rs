use crate::cell::cell_text;
use crate::error::{ExtractError, Result};
use calamine::{Data, Range, Reader, Xlsx};
use std::io::Cursor;

/// Raw grid read from the first worksheet of a workbook.
///
/// Columns are addressed by their absolute worksheet position (column `A` is
/// 0) even when the leftmost columns are unused. The first used row is the
/// header row; everything below it is data, in document order, minus rows
/// with no values at all.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceTable {
    headers: Vec<String>,
    rows: Vec<Vec<Data>>,
    column_count: usize,
}

impl SourceTable {
    /// Builds a table from already-split header and data rows.
    ///
    /// The column count is the widest of the header row and every data row.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Data>>) -> Self {
        let column_count = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(headers.len()))
            .max()
            .unwrap_or(0);

        SourceTable {
            headers,
            rows,
            column_count,
        }
    }

    /// Load a table from the bytes of an XLSX workbook
    ///
    /// Only the first worksheet is read.
    ///
    /// # Errors
    /// * [`ExtractError::Parse`] if the bytes are not a workbook or the
    ///   workbook has no worksheets
    pub fn from_xlsx(bytes: Vec<u8>) -> Result<Self> {
        let mut workbook: Xlsx<_> =
            Xlsx::new(Cursor::new(bytes)).map_err(|e| ExtractError::Parse(e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ExtractError::Parse("No sheets found in Excel file".to_string()))?
            .map_err(|e| ExtractError::Parse(e.to_string()))?;

        Ok(Self::from_range(&range))
    }

    /// Convert a calamine range into absolute-column rows.
    pub fn from_range(range: &Range<Data>) -> Self {
        let (Some((first_row, _)), Some((last_row, last_col))) = (range.start(), range.end())
        else {
            return SourceTable::default();
        };
        if range.is_empty() {
            return SourceTable::default();
        }

        let width = last_col as usize + 1;
        let read_row = |row: u32| -> Vec<Data> {
            (0..width)
                .map(|col| {
                    range
                        .get_value((row, col as u32))
                        .cloned()
                        .unwrap_or(Data::Empty)
                })
                .collect()
        };

        let headers = read_row(first_row)
            .iter()
            .enumerate()
            .map(|(idx, cell)| match cell_text(cell) {
                name if name.is_empty() => format!("Unnamed: {}", idx),
                name => name,
            })
            .collect();

        // fully blank rows are stray spacing, not submissions
        let rows = ((first_row + 1)..=last_row)
            .map(read_row)
            .filter(|row| !row.iter().all(|cell| *cell == Data::Empty))
            .collect();

        SourceTable {
            headers,
            rows,
            column_count: width,
        }
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn header(&self, col: usize) -> Option<&str> {
        self.headers.get(col).map(String::as_str)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Data]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// `None` when the row is shorter than `col` or `row` is past the end.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Data> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

use crate::mapping::ColumnMapping;
use crate::record::Record;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

/// Convert records to CSV format
///
/// The first line holds the mapping's display labels, followed by one line per
/// record in the order given. Fields containing commas, quotes or newlines
/// are quoted and inner quotes doubled.
///
/// # Examples
/// ```
/// use sheetboard::downloader::to_csv;
/// use sheetboard::mapping::{ColumnMapping, ColumnSpec};
/// use sheetboard::record::Record;
///
/// let mapping = ColumnMapping::new(vec![ColumnSpec::new("Name", 0)], None);
/// let rows = vec![Record::new(vec![("Name", "Lovelace, Ada".to_string())])];
/// assert_eq!(to_csv(&mapping, &rows), "Name\n\"Lovelace, Ada\"\n");
/// ```
pub fn to_csv(mapping: &ColumnMapping, records: &[Record]) -> String {
    let mut csv_content = String::new();

    push_csv_line(&mut csv_content, mapping.labels().into_iter());
    for record in records {
        push_csv_line(&mut csv_content, record.values());
    }

    csv_content
}

fn push_csv_line<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (i, value) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            let escaped = value.replace('"', "\"\"");
            out.push('"');
            out.push_str(&escaped);
            out.push('"');
        } else {
            out.push_str(value);
        }
    }
    out.push('\n');
}

/// Convert records to XLSX format
///
/// Writes a single "Records" worksheet with a bold header row of labels and
/// every value as a string cell.
pub fn to_xlsx(mapping: &ColumnMapping, records: &[Record]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let mut worksheet = Worksheet::new();
    worksheet.set_name("Records")?;

    let bold = Format::new().set_bold();
    for (c, label) in mapping.labels().into_iter().enumerate() {
        worksheet.write_string_with_format(0, c as u16, label, &bold)?;
    }

    for (r, record) in records.iter().enumerate() {
        for (c, value) in record.values().enumerate() {
            if !value.is_empty() {
                worksheet.write_string((r + 1) as u32, c as u16, value)?;
            }
        }
    }

    workbook.push_worksheet(worksheet);
    workbook.save_to_buffer()
}

//! Download a published sheet and turn it into display records.

use crate::cell::{date_column_text, optional_cell_text};
use crate::error::{ExtractError, Result};
use crate::fetch;
use crate::loader::SourceTable;
use crate::mapping::ColumnMapping;
use crate::record::{Record, newest_first};
use log::{debug, error, info};
use reqwest::Client;
use std::time::Duration;

/// Project `table` onto `mapping` and return the records newest-first.
///
/// Fails closed: if any mapped index is past the table's last column nothing
/// is projected.
pub fn transform(table: &SourceTable, mapping: &ColumnMapping) -> Result<Vec<Record>> {
    for (idx, header) in table.headers().iter().enumerate() {
        debug!("Index {}: '{}'", idx, header);
    }
    for column in mapping.columns() {
        match table.header(column.index) {
            Some(header) => debug!("  {}: Index {} -> '{}'", column.label, column.index, header),
            None => error!(
                "  {}: Index {} -> out of bounds (max index is {})",
                column.label,
                column.index,
                table.column_count() as isize - 1
            ),
        }
    }

    mapping.validate(table.column_count())?;

    let date_values = mapping.date_position().map(|pos| {
        let col = mapping.columns()[pos].index;
        let cells: Vec<_> = (0..table.row_count())
            .map(|row| table.cell(row, col))
            .collect();
        (pos, date_column_text(&cells))
    });

    let records = table
        .rows()
        .enumerate()
        .map(|(row, cells)| {
            let fields = mapping
                .columns()
                .iter()
                .enumerate()
                .map(|(pos, column)| {
                    let value = match &date_values {
                        Some((date_pos, values)) if *date_pos == pos => values[row].clone(),
                        _ => optional_cell_text(cells.get(column.index)),
                    };
                    (column.label, value)
                })
                .collect();
            Record::new(fields)
        })
        .collect();

    Ok(newest_first(records))
}

/// Fetches one sheet URL and extracts a fixed set of columns from it.
///
/// Holds no state between calls beyond the HTTP client; every call downloads
/// and parses the sheet again.
pub struct Extractor {
    client: Client,
    url: String,
    mapping: ColumnMapping,
}

impl Extractor {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Extractor {
            client: fetch::build_client(timeout)?,
            url: url.into(),
            mapping: ColumnMapping::default(),
        })
    }

    pub fn with_mapping(mut self, mapping: ColumnMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// Download, parse, validate and project, reporting which step failed.
    pub async fn try_fetch_and_transform(&self) -> Result<Vec<Record>> {
        info!("Downloading sheet from {}", self.url);
        let bytes = fetch::download(&self.client, &self.url).await?;
        debug!("Downloaded {} bytes", bytes.len());

        // calamine is synchronous; keep it off the async workers
        let table = tokio::task::spawn_blocking(move || SourceTable::from_xlsx(bytes))
            .await
            .map_err(|e| ExtractError::Parse(e.to_string()))??;

        let records = transform(&table, &self.mapping)?;
        info!(
            "Processed {} records (newest first) from {} columns",
            records.len(),
            table.column_count()
        );
        Ok(records)
    }

    /// Like [`Self::try_fetch_and_transform`] but never fails: any error is
    /// logged and an empty sequence is returned.
    pub async fn fetch_and_transform(&self) -> Vec<Record> {
        match self.try_fetch_and_transform().await {
            Ok(records) => records,
            Err(e) => {
                error!("Extraction failed ({}): {}", e.kind(), e);
                Vec::new()
            }
        }
    }
}

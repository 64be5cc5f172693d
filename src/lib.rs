/*!
# Sheetboard

A small web dashboard that shows the rows of a published spreadsheet,
newest submission first.

## Overview

Every page load downloads the published XLSX export of an application-form
sheet, picks twelve columns out of it by position, and renders them as an
HTML table. Nothing is cached or stored: each request recomputes the page
from the live sheet.

## Architecture

### Extraction
- **fetch**: HTTP GET of the sheet with a bounded timeout, no retry
- **loader**: XLSX bytes -> [`SourceTable`] (first worksheet, header row + data rows)
- **mapping**: the fixed `{label, index}` table and its bounds check
- **cell**: text coercion of worksheet cells, including date columns
- **record**: output rows and the newest-first ordering
- **extractor**: ties the above together in [`Extractor`]

### Web layer (`web` feature)
- **view**: handlebars rendering of the record table
- **app**: axum routing
- **downloader**: CSV / XLSX export of the current records

## Failure behaviour

Download, parse and column-bounds failures are all reported as
[`ExtractError`]. The HTML page swallows them and renders zero rows; the
`/api/records` endpoint returns the tagged error instead.

## REST API Endpoints

- `/`, `/refresh` - Render the dashboard
- `/api/records` - Current records as JSON, or the extraction error
- `/download.csv`, `/download.xlsx` - Export the current records
*/

pub mod app;
pub mod cell;
pub mod config;
pub mod downloader;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod loader;
pub mod mapping;
pub mod record;
pub mod view;

pub use config::{Config, SheetSource};
pub use error::{ExtractError, Result};
pub use extractor::{Extractor, transform};
pub use loader::SourceTable;
pub use mapping::{APPLICATION_COLUMNS, ColumnMapping, ColumnSpec};
pub use record::{Record, newest_first};

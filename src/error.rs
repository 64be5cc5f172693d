use thiserror::Error;

/// Failure of a single fetch-and-transform cycle.
///
/// The HTML page never sees these: `Extractor::fetch_and_transform` logs them
/// and hands back an empty record sequence. The JSON endpoint and the CLI use
/// the tagged form to report what went wrong.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Transport failure, timeout, or non-2xx status from the sheet host.
    #[error("error downloading sheet: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The response body is not a readable XLSX workbook.
    #[error("error reading workbook: {0}")]
    Parse(String),

    /// A configured column index does not exist in the downloaded table.
    #[error(
        "column indices {invalid:?} are out of bounds for a table with {column_count} columns"
    )]
    Schema {
        invalid: Vec<usize>,
        column_count: usize,
    },
}

impl ExtractError {
    /// Short machine-readable tag used in JSON error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::Fetch(_) => "fetch",
            ExtractError::Parse(_) => "parse",
            ExtractError::Schema { .. } => "schema",
        }
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_names_offending_indices() {
        let err = ExtractError::Schema {
            invalid: vec![29, 30, 42],
            column_count: 20,
        };
        assert_eq!(err.kind(), "schema");
        let msg = err.to_string();
        assert!(msg.contains("[29, 30, 42]"), "{msg}");
        assert!(msg.contains("20 columns"), "{msg}");
    }

    #[test]
    fn parse_error_kind() {
        let err = ExtractError::Parse("Zip error: invalid Zip archive".to_string());
        assert_eq!(err.kind(), "parse");
        assert!(err.to_string().starts_with("error reading workbook"));
    }
}

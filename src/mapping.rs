use crate::error::{ExtractError, Result};

/// One display column: the label shown on the page and the 0-based
/// worksheet column it is read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub label: &'static str,
    pub index: usize,
}

impl ColumnSpec {
    pub const fn new(label: &'static str, index: usize) -> Self {
        ColumnSpec { label, index }
    }
}

/// The published application form sheet. Order is display order.
pub const APPLICATION_COLUMNS: [ColumnSpec; 12] = [
    ColumnSpec::new("Name", 2),
    ColumnSpec::new("Date", 0),
    ColumnSpec::new("Highest Degree Obtained", 7),
    ColumnSpec::new("Institution Name", 9),
    ColumnSpec::new("CGPA/Percentage", 11),
    ColumnSpec::new("Year of Graduation", 10),
    ColumnSpec::new("Duration", 42),
    ColumnSpec::new("Statement of Purpose", 15),
    ColumnSpec::new("Select Institutes", 29),
    ColumnSpec::new("Select Faculty", 30),
    ColumnSpec::new("Upload Resume/CV", 17),
    ColumnSpec::new("Reference Letter", 31),
];

/// Label of the submission timestamp column.
pub const DATE_LABEL: &str = "Date";

/// Ordered label -> column index table, checked against the downloaded
/// sheet's width before any row is projected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMapping {
    columns: Vec<ColumnSpec>,
    date_label: Option<&'static str>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        ColumnMapping {
            columns: APPLICATION_COLUMNS.to_vec(),
            date_label: Some(DATE_LABEL),
        }
    }
}

impl ColumnMapping {
    pub fn new(columns: Vec<ColumnSpec>, date_label: Option<&'static str>) -> Self {
        ColumnMapping {
            columns,
            date_label,
        }
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position (within the mapping, not the sheet) of the date column.
    pub fn date_position(&self) -> Option<usize> {
        let label = self.date_label?;
        self.columns.iter().position(|c| c.label == label)
    }

    /// Smallest sheet width that satisfies every index.
    pub fn required_columns(&self) -> usize {
        self.columns.iter().map(|c| c.index + 1).max().unwrap_or(0)
    }

    /// Fails with [`ExtractError::Schema`] listing every index that does not
    /// fit in `column_count` columns.
    pub fn validate(&self, column_count: usize) -> Result<()> {
        let invalid: Vec<usize> = self
            .columns
            .iter()
            .map(|c| c.index)
            .filter(|&idx| idx >= column_count)
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(ExtractError::Schema {
                invalid,
                column_count,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mapping_needs_43_columns() {
        let mapping = ColumnMapping::default();
        assert_eq!(mapping.len(), 12);
        assert_eq!(mapping.required_columns(), 43);
        assert_eq!(mapping.date_position(), Some(1));
        assert_eq!(mapping.labels()[2], "Highest Degree Obtained");
    }

    #[test]
    fn validate_accepts_exact_width() {
        assert!(ColumnMapping::default().validate(43).is_ok());
        assert!(ColumnMapping::default().validate(60).is_ok());
    }

    #[test]
    fn validate_lists_every_out_of_bounds_index() {
        let err = ColumnMapping::default().validate(20).unwrap_err();
        match err {
            ExtractError::Schema {
                invalid,
                column_count,
            } => {
                assert_eq!(invalid, vec![42, 29, 30, 31]);
                assert_eq!(column_count, 20);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_table_fails_validation() {
        assert!(ColumnMapping::default().validate(0).is_err());
    }

    #[test]
    fn custom_mapping_without_date() {
        let mapping = ColumnMapping::new(vec![ColumnSpec::new("A", 0)], None);
        assert_eq!(mapping.date_position(), None);
        assert_eq!(mapping.required_columns(), 1);
    }
}

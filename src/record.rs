use serde::ser::{Serialize, SerializeMap, Serializer};

/// One output row: display label -> text value, in mapping order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(&'static str, String)>,
}

impl Record {
    pub fn new(fields: Vec<(&'static str, String)>) -> Self {
        Record { fields }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(l, _)| *l)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(l, v)| (*l, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// Serialized as a JSON object whose keys keep mapping order.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (label, value) in &self.fields {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Reverses source order so the last row in the sheet is displayed first.
///
/// Assumes the sheet appends new submissions at the bottom. Applying it twice
/// restores the original order.
pub fn newest_first(mut records: Vec<Record>) -> Vec<Record> {
    records.reverse();
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(vec![("Name", name.to_string()), ("Date", String::new())])
    }

    #[test]
    fn newest_first_reverses() {
        let out = newest_first(vec![record("A"), record("B"), record("C")]);
        let names: Vec<_> = out.iter().filter_map(|r| r.get("Name")).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn newest_first_is_its_own_inverse() {
        let original = vec![record("A"), record("B"), record("C"), record("D")];
        assert_eq!(newest_first(newest_first(original.clone())), original);
        assert!(newest_first(Vec::new()).is_empty());
    }

    #[test]
    fn serializes_in_label_order() {
        let r = Record::new(vec![
            ("Name", "Ada".into()),
            ("Date", "2024-01-15".into()),
            ("CGPA/Percentage", "9.1".into()),
        ]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"Name":"Ada","Date":"2024-01-15","CGPA/Percentage":"9.1"}"#
        );
    }

    #[test]
    fn lookup_by_label() {
        let r = record("Ada");
        assert_eq!(r.get("Name"), Some("Ada"));
        assert_eq!(r.get("Date"), Some(""));
        assert_eq!(r.get("Missing"), None);
        assert_eq!(r.labels().collect::<Vec<_>>(), vec!["Name", "Date"]);
    }
}

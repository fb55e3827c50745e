use std::collections::BTreeMap;

/// Recognized field names, in serialization order.
pub const FIELDS: &[&str] = &["title", "language", "code"];

/// Separates fields within a stored line.
pub const DELIMITER: char = '|';

/// Separates a field name from its value.
pub const ASSIGN: char = '=';

pub fn is_recognized(name: &str) -> bool {
    FIELDS.contains(&name)
}

/// A single stored record: field name to value.
///
/// Records built from user input only ever hold recognized fields. Records
/// parsed from disk keep whatever keys the line carried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a field.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Value of `name`, or the empty string when absent.
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Add an empty value for every recognized field that is missing.
    pub fn fill_defaults(&mut self) {
        for name in FIELDS {
            self.fields.entry((*name).to_string()).or_default();
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_defaults_keeps_existing_values() {
        let mut record = Record::new().with("title", "hello");
        record.fill_defaults();

        assert_eq!(record.len(), FIELDS.len());
        assert_eq!(record.get("title"), Some("hello"));
        assert_eq!(record.get("language"), Some(""));
        assert_eq!(record.get("code"), Some(""));
    }

    #[test]
    fn value_defaults_to_empty() {
        let record = Record::new();
        assert_eq!(record.value("code"), "");
        assert!(!record.contains("code"));
    }

    #[test]
    fn recognizes_only_declared_fields() {
        assert!(is_recognized("title"));
        assert!(is_recognized("code"));
        assert!(!is_recognized("foo"));
        assert!(!is_recognized("Title"));
    }
}

use super::{parse_lines, DataStore};
use crate::codec;
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing.
/// Keeps serialized lines, exactly as they would appear in the file.
#[derive(Default)]
pub struct InMemoryStore {
    lines: Vec<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored lines, bypassing validation.
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        parse_lines(self.lines.iter().map(String::as_str))
    }

    fn append(&mut self, record: &Record) -> Result<()> {
        self.lines.push(codec::serialize(record));
        Ok(())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.lines.iter().filter(|line| !line.is_empty()).count())
    }

    fn reset(&mut self) -> Result<()> {
        self.lines.clear();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                let record = Record::new()
                    .with("title", &format!("Snippet {}", i + 1))
                    .with("language", "rust")
                    .with("code", &format!("let n = {};", i + 1));
                self.store.append(&record).unwrap();
            }
            self
        }

        pub fn with_record(mut self, record: Record) -> Self {
            self.store.append(&record).unwrap();
            self
        }

        /// Push a line as-is, e.g. a blank or hand-edited one.
        pub fn with_raw_line(mut self, line: &str) -> Self {
            self.store.lines.push(line.to_string());
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn append_then_load() {
        let store = StoreFixture::new().with_records(2).store;
        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("title"), Some("Snippet 1"));
        assert_eq!(store.lines()[1], "title=Snippet 2|language=rust|code=let n = 2;");
    }

    #[test]
    fn reset_clears_lines() {
        let mut store = StoreFixture::new().with_records(3).store;
        store.reset().unwrap();
        assert!(store.lines().is_empty());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn from_lines_goes_through_codec() {
        let store = InMemoryStore::from_lines(["title=x|language=|code=", "", "oops"]);
        assert!(store.load().is_err());
    }
}

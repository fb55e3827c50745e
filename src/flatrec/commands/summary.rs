use crate::commands::CmdResult;
use crate::error::{FlatrecError, Result};
use crate::model::Record;
use crate::store::DataStore;
use std::fmt;

/// Aggregate over the whole store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    /// Summed field and its total, when a numeric field is configured
    pub total: Option<(String, i64)>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "count={}", self.count)?;
        if let Some((field, total)) = &self.total {
            write!(f, ", {}_total={}", field, total)?;
        }
        Ok(())
    }
}

/// Count records and optionally sum `numeric_field`.
///
/// Records without the field are skipped. A present value that is not an
/// integer fails the whole summary, empty values included.
pub fn summarize(records: &[Record], numeric_field: Option<&str>) -> Result<Summary> {
    let Some(field) = numeric_field else {
        return Ok(Summary {
            count: records.len(),
            total: None,
        });
    };

    let mut total: i64 = 0;
    for value in records.iter().filter_map(|r| r.get(field)) {
        let n: i64 = value.parse().map_err(|_| FlatrecError::NotNumeric {
            field: field.to_string(),
            value: value.to_string(),
        })?;
        total = total
            .checked_add(n)
            .ok_or_else(|| FlatrecError::TotalOverflow(field.to_string()))?;
    }

    Ok(Summary {
        count: records.len(),
        total: Some((field.to_string(), total)),
    })
}

pub fn run<S: DataStore>(store: &S, numeric_field: Option<&str>) -> Result<CmdResult> {
    let records = store.load()?;
    let summary = summarize(&records, numeric_field)?;
    Ok(CmdResult::default().with_summary(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn summary_line<S: DataStore>(store: &S, field: Option<&str>) -> String {
        run(store, field).unwrap().summary.unwrap().to_string()
    }

    #[test]
    fn counts_records() {
        let store = StoreFixture::new().with_records(3).store;
        assert_eq!(summary_line(&store, None), "count=3");
    }

    #[test]
    fn zero_after_init() {
        let mut store = StoreFixture::new().with_records(3).store;
        init::run(&mut store).unwrap();
        assert_eq!(summary_line(&store, None), "count=0");
    }

    #[test]
    fn missing_store_counts_zero() {
        assert_eq!(summary_line(&InMemoryStore::new(), None), "count=0");
    }

    #[test]
    fn sums_configured_field() {
        let store = StoreFixture::new()
            .with_record(Record::new().with("code", "40"))
            .with_record(Record::new().with("code", "-2"))
            .with_record(Record::new().with("code", "4"))
            .store;
        assert_eq!(summary_line(&store, Some("code")), "count=3, code_total=42");
    }

    #[test]
    fn skips_records_without_the_field() {
        let store = StoreFixture::new()
            .with_raw_line("title=a|code=5")
            .with_raw_line("title=b")
            .store;
        assert_eq!(summary_line(&store, Some("code")), "count=2, code_total=5");
    }

    #[test]
    fn non_numeric_value_fails() {
        let store = StoreFixture::new()
            .with_record(Record::new().with("code", "7"))
            .with_record(Record::new().with("code", "seven"))
            .store;
        let err = run(&store, Some("code")).unwrap_err();
        assert!(matches!(
            err,
            FlatrecError::NotNumeric { ref value, .. } if value == "seven"
        ));
    }

    #[test]
    fn empty_value_is_not_numeric() {
        // add fills unset fields with "", which cannot be summed
        let store = StoreFixture::new()
            .with_record(Record::new().with("title", "no code"))
            .store;
        assert!(run(&store, Some("code")).is_err());
    }

    #[test]
    fn overflow_is_an_error() {
        let records = vec![
            Record::new().with("code", &i64::MAX.to_string()),
            Record::new().with("code", "1"),
        ];
        assert!(matches!(
            summarize(&records, Some("code")),
            Err(FlatrecError::TotalOverflow(_))
        ));
    }
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlatrecError, Result};
use crate::model::{self, Record, ASSIGN, DELIMITER};
use crate::store::DataStore;

/// Turn raw `name=value` arguments into a complete record.
///
/// Every recognized field ends up present; the ones not given are empty. A
/// repeated name keeps its last value.
pub fn build_record<T: AsRef<str>>(tokens: &[T]) -> Result<Record> {
    let mut record = Record::new();
    for token in tokens {
        let token = token.as_ref();
        let (key, value) = token
            .split_once(ASSIGN)
            .ok_or_else(|| FlatrecError::InvalidToken(token.to_string()))?;
        if !model::is_recognized(key) {
            return Err(FlatrecError::UnknownField(key.to_string()));
        }
        if value.contains(DELIMITER) {
            return Err(FlatrecError::DelimiterInValue {
                field: key.to_string(),
            });
        }
        record.set(key, value);
    }
    record.fill_defaults();
    Ok(record)
}

/// Validate first, then append: a rejected record never reaches the store.
///
/// The success message carries the new record count.
pub fn run<S: DataStore, T: AsRef<str>>(store: &mut S, tokens: &[T]) -> Result<CmdResult> {
    let record = build_record(tokens)?;
    store.append(&record)?;

    let mut result = CmdResult::default();
    if tokens.is_empty() {
        result.add_message(CmdMessage::info("No fields given, all values are empty"));
    }
    let count = store.count()?;
    result.add_message(CmdMessage::success(format!("Added record {}", count)));
    Ok(result)
}

//! # Record Codec
//!
//! One record per line, one `name=value` segment per recognized field, joined
//! with `|`:
//!
//! ```text
//! title=hello|language=rust|code=println!("hi")
//! ```
//!
//! [`serialize`] always writes every recognized field in declared order, so
//! output is stable and complete. [`parse`] is deliberately looser: it skips
//! empty segments and accepts any key, which means a hand-edited store can hold
//! keys that `add` would reject. Only recognized fields are written back out.

use crate::error::{FlatrecError, Result};
use crate::model::{Record, ASSIGN, DELIMITER, FIELDS};

pub fn serialize(record: &Record) -> String {
    let mut line = String::new();
    for (i, name) in FIELDS.iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        line.push_str(name);
        line.push(ASSIGN);
        line.push_str(record.value(name));
    }
    line
}

pub fn parse(line: &str) -> Result<Record> {
    let mut record = Record::new();
    for segment in line.split(DELIMITER) {
        if segment.is_empty() {
            continue;
        }
        let (key, value) = segment
            .split_once(ASSIGN)
            .ok_or_else(|| FlatrecError::MalformedSegment(segment.to_string()))?;
        record.set(key, value);
    }
    Ok(record)
}

//! # Storage Layer
//!
//! The [`DataStore`] trait is the only thing the command layer knows about
//! persistence. A store is an append-only sequence of records.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one text file, one line per record
//! - [`memory::InMemoryStore`]: Holds serialized lines in memory, for tests
//!
//! Both go through the [`codec`](crate::codec) so that blank-line skipping and
//! corrupt-line detection behave identically.
//!
//! ## Limitations
//!
//! There is no locking. Two processes appending to the same file at once may
//! interleave their writes.

use crate::codec;
use crate::error::{FlatrecError, Result};
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for record storage.
pub trait DataStore {
    /// Read every record, in append order. A missing store is empty.
    fn load(&self) -> Result<Vec<Record>>;

    /// Append one record at the end of the store.
    fn append(&mut self, record: &Record) -> Result<()>;

    /// Number of non-empty stored lines. Lines are not parsed, so a corrupt
    /// store still counts.
    fn count(&self) -> Result<usize>;

    /// Discard all records, creating the store if needed.
    fn reset(&mut self) -> Result<()>;

    /// Human readable location, used in messages.
    fn location(&self) -> String;
}

/// Parse stored lines into records, skipping empty ones.
///
/// The first malformed line aborts the whole read.
pub(crate) fn parse_lines<'a, I>(lines: I) -> Result<Vec<Record>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let record = codec::parse(line).map_err(|e| FlatrecError::CorruptStore {
            line: idx + 1,
            reason: e.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}

use super::{parse_lines, DataStore};
use crate::codec;
use crate::error::{FlatrecError, Result};
use crate::model::Record;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Record store backed by a single UTF-8 text file.
///
/// The file is opened and closed inside every call; no handle is kept.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!(dir = %parent.display(), "creating store directory");
                fs::create_dir_all(parent).map_err(FlatrecError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file missing, treating as empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(FlatrecError::Io)?;
        let records = parse_lines(content.lines())?;
        debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn append(&mut self, record: &Record) -> Result<()> {
        self.ensure_parent_dir()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(FlatrecError::Io)?;

        let mut line = codec::serialize(record);
        line.push('\n');
        file.write_all(line.as_bytes()).map_err(FlatrecError::Io)?;
        debug!(path = %self.path.display(), "appended record");
        Ok(())
    }

    fn count(&self) -> Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }
        let content = fs::read_to_string(&self.path).map_err(FlatrecError::Io)?;
        Ok(content.lines().filter(|line| !line.is_empty()).count())
    }

    fn reset(&mut self) -> Result<()> {
        self.ensure_parent_dir()?;
        File::create(&self.path).map_err(FlatrecError::Io)?;
        debug!(path = %self.path.display(), "store reset");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

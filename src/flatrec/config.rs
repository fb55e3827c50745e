use crate::error::{FlatrecError, Result};
use crate::model;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "flatrec.json";
const DEFAULT_STORE_PATH: &str = "data/store.txt";

/// Configuration for flatrec, optionally stored in flatrec.json.
///
/// Built once at startup and handed to the API; nothing mutates it afterwards.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the backing text file, relative to the working directory
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Field to sum in `summary` (none by default)
    #[serde(default)]
    pub numeric_field: Option<String>,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            numeric_field: None,
        }
    }
}

impl StoreConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FlatrecError::Io)?;
        let config: StoreConfig = serde_json::from_str(&content).map_err(FlatrecError::Config)?;
        Ok(config)
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    pub fn with_numeric_field(mut self, field: impl Into<String>) -> Self {
        self.numeric_field = Some(field.into());
        self
    }

    /// The summed field has to be one `add` can actually write.
    pub fn validate(&self) -> Result<()> {
        match &self.numeric_field {
            Some(field) if !model::is_recognized(field) => {
                Err(FlatrecError::UnknownField(field.clone()))
            }
            _ => Ok(()),
        }
    }
}

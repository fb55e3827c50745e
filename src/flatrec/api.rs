//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for any UI.
//! It owns the store and the startup configuration, dispatches to
//! `commands::*::run`, and returns structured [`CmdResult`]s. It performs no
//! printing and holds no logic of its own.
//!
//! `FlatrecApi<S: DataStore>` is generic over the backend: `FileStore` in the
//! binary, `InMemoryStore` in tests.

use crate::commands;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::store::DataStore;
use tracing::debug;

pub struct FlatrecApi<S: DataStore> {
    store: S,
    config: StoreConfig,
}

impl<S: DataStore> FlatrecApi<S> {
    pub fn new(store: S, config: StoreConfig) -> Self {
        Self { store, config }
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        debug!(store = %self.store.location(), "init");
        commands::init::run(&mut self.store)
    }

    pub fn add_record<T: AsRef<str>>(&mut self, tokens: &[T]) -> Result<commands::CmdResult> {
        debug!(store = %self.store.location(), tokens = tokens.len(), "add");
        commands::add::run(&mut self.store, tokens)
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        debug!(store = %self.store.location(), "list");
        commands::list::run(&self.store)
    }

    pub fn summary(&self) -> Result<commands::CmdResult> {
        debug!(
            store = %self.store.location(),
            numeric_field = ?self.config.numeric_field,
            "summary"
        );
        commands::summary::run(&self.store, self.config.numeric_field.as_deref())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, Summary};

//! # Flatrec Architecture
//!
//! Flatrec is a tiny record store backed by a single text file. Each record is one
//! line of pipe-delimited `name=value` fields:
//!
//! ```text
//! title=hello|language=rust|code=fn main() {}
//! title=ls|language=sh|code=ls -la
//! ```
//!
//! Like most CLI tools worth maintaining, it is a library with a thin binary on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints results, picks exit codes       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns store + config           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Token validation, listing, summary aggregation           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) + Record Codec (codec.rs)           │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: `init`, `add`, `list`, `summary`
//! - [`codec`]: Line (de)serialization
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Record` and the recognized field set
//! - [`config`]: Store path and summary configuration
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

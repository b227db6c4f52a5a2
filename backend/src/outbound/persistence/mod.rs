//! File-backed persistence adapters.
//!
//! All users live in one JSON document of the form `{"users": [...]}`. The
//! adapter reads the whole document on every load and replaces it on every
//! save; record-level changes happen in the domain between the two calls.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use mockbank::outbound::persistence::JsonFileUserStore;
//!
//! let store = JsonFileUserStore::open(Path::new("mock_data.json"))?;
//! # Ok::<(), mockbank::outbound::persistence::StoreOpenError>(())
//! ```

mod json_file_user_store;
mod models;

pub use json_file_user_store::{JsonFileUserStore, StoreOpenError};

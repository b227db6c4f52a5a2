//! Whole-file JSON documents stored inside a capability directory.
//!
//! Small services often keep their state in a single JSON file that is read
//! in full, modified in memory and written back in full. This crate covers the
//! two halves of that cycle:
//!
//! - [`read_or_init`] parses the document, materialising an initial value on
//!   disk when the file does not exist yet.
//! - [`write_pretty`] replaces the document atomically with an indented
//!   rendering, so concurrent readers never observe a half-written file.
//!
//! All paths are resolved relative to a [`cap_std::fs::Dir`], keeping file
//! access confined to the directory the caller opened.
//!
//! # Example
//!
//! ```
//! use camino::Utf8Path;
//! use cap_std::{ambient_authority, fs::Dir};
//! use json_document::{read_or_init, write_pretty};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! struct Counter {
//!     hits: u32,
//! }
//!
//! let temp = tempfile::tempdir().expect("temp dir");
//! let dir = Dir::open_ambient_dir(temp.path(), ambient_authority()).expect("open dir");
//! let path = Utf8Path::new("counter.json");
//!
//! let loaded = read_or_init(&dir, path, Counter::default).expect("load counter");
//! assert!(loaded.was_created());
//!
//! let mut counter = loaded.into_inner();
//! counter.hits += 1;
//! write_pretty(&dir, path, &counter).expect("save counter");
//!
//! let reloaded = read_or_init(&dir, path, Counter::default).expect("reload counter");
//! assert_eq!(reloaded.into_inner(), Counter { hits: 1 });
//! ```

mod atomic_io;
mod document;
mod error;

pub use document::{Loaded, read, read_or_init, write_pretty};
pub use error::DocumentError;

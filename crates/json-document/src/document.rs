//! Reading and replacing whole JSON documents.

use std::io;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::atomic_io::write_atomic;
use crate::error::DocumentError;

/// Outcome of [`read_or_init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded<T> {
    /// The document already existed and was parsed.
    Existing(T),
    /// The document was missing and the initial value was written to disk.
    Created(T),
}

impl<T> Loaded<T> {
    /// Whether this call created the document.
    pub const fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// Return the document value regardless of where it came from.
    pub fn into_inner(self) -> T {
        match self {
            Self::Existing(value) | Self::Created(value) => value,
        }
    }
}

/// Read and parse the document at `path`.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns [`DocumentError::Read`] when the file exists but cannot be read
/// and [`DocumentError::Parse`] when its contents do not deserialize into
/// `T`.
pub fn read<T>(dir: &Dir, path: &Utf8Path) -> Result<Option<T>, DocumentError>
where
    T: DeserializeOwned,
{
    let contents = match dir.read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(DocumentError::Read {
                path: path.to_path_buf(),
                message: err.to_string(),
            });
        }
    };

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|err| DocumentError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
}

/// Read the document at `path`, creating it from `init` when it is missing.
///
/// # Errors
///
/// Propagates [`read`] failures, and [`write_pretty`] failures when the
/// initial document has to be written.
pub fn read_or_init<T, F>(dir: &Dir, path: &Utf8Path, init: F) -> Result<Loaded<T>, DocumentError>
where
    T: DeserializeOwned + Serialize,
    F: FnOnce() -> T,
{
    if let Some(existing) = read(dir, path)? {
        return Ok(Loaded::Existing(existing));
    }

    let initial = init();
    write_pretty(dir, path, &initial)?;
    Ok(Loaded::Created(initial))
}

/// Atomically replace the document at `path` with an indented rendering of
/// `value`.
///
/// Output uses two-space indentation and keeps non-ASCII characters as UTF-8
/// rather than escaping them.
///
/// # Errors
///
/// Returns [`DocumentError::Encode`] if `value` cannot be serialized,
/// [`DocumentError::InvalidPath`] if `path` is not a bare file name, and
/// [`DocumentError::Write`] if staging or renaming the file fails.
pub fn write_pretty<T>(dir: &Dir, path: &Utf8Path, value: &T) -> Result<(), DocumentError>
where
    T: Serialize + ?Sized,
{
    let contents = serde_json::to_string_pretty(value).map_err(|err| DocumentError::Encode {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    write_atomic(dir, path, &contents)
}

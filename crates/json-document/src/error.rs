//! Error type shared by the document helpers.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Failures raised while reading or replacing a JSON document.
///
/// Messages from the underlying I/O or serde layers are captured as strings
/// so the error stays `Clone` and comparable in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The document exists but could not be read.
    #[error("failed to read document at '{path}': {message}")]
    Read {
        /// Path of the document relative to its directory.
        path: Utf8PathBuf,
        /// Description of the I/O failure.
        message: String,
    },

    /// The document contents are not valid JSON for the requested type.
    #[error("invalid JSON document at '{path}': {message}")]
    Parse {
        /// Path of the document relative to its directory.
        path: Utf8PathBuf,
        /// Parser message, including line and column.
        message: String,
    },

    /// The value could not be rendered as JSON.
    #[error("failed to encode document for '{path}': {message}")]
    Encode {
        /// Path of the document relative to its directory.
        path: Utf8PathBuf,
        /// Serializer message.
        message: String,
    },

    /// The path does not name a single file inside the directory.
    #[error("document path '{path}' must name a file directly inside the directory")]
    InvalidPath {
        /// Rejected path.
        path: Utf8PathBuf,
    },

    /// Writing or renaming the replacement file failed.
    #[error("failed to write document at '{path}': {message}")]
    Write {
        /// Path of the file being written.
        path: Utf8PathBuf,
        /// Description of the I/O failure.
        message: String,
    },
}

//! [`UserStore`] adapter persisting every record in one JSON file.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use json_document::{DocumentError, read_or_init, write_pretty};
use thiserror::Error;
use tracing::info;

use super::models::UsersDocument;
use crate::domain::User;
use crate::domain::ports::{UserStore, UserStoreError};

/// Errors raised while preparing the data file location.
#[derive(Debug, Error)]
pub enum StoreOpenError {
    /// The configured path is not valid UTF-8.
    #[error("data file path {} is not valid UTF-8", .path.display())]
    NonUtf8Path { path: PathBuf },
    /// The configured path has no file name component.
    #[error("data file path '{path}' does not name a file")]
    MissingFileName { path: Utf8PathBuf },
    /// The containing directory could not be created or opened.
    #[error("failed to open data directory '{path}': {source}")]
    Directory {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Store reading and atomically rewriting a `{"users": [...]}` document.
///
/// The document is created, empty, on the first load if it does not exist.
/// File access is confined to the directory containing the document.
pub struct JsonFileUserStore {
    dir: Arc<Dir>,
    file_name: Utf8PathBuf,
    path: Utf8PathBuf,
}

impl JsonFileUserStore {
    /// Prepare a store for the document at `path`.
    ///
    /// Missing parent directories are created. The document itself is only
    /// touched by [`UserStore::load`] and [`UserStore::save`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreOpenError`] when `path` is not UTF-8, has no file name,
    /// or its directory cannot be opened.
    pub fn open(path: &Path) -> Result<Self, StoreOpenError> {
        let utf8 = Utf8Path::from_path(path).ok_or_else(|| StoreOpenError::NonUtf8Path {
            path: path.to_path_buf(),
        })?;
        let file_name = utf8
            .file_name()
            .ok_or_else(|| StoreOpenError::MissingFileName {
                path: utf8.to_path_buf(),
            })?;
        let parent = match utf8.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let directory_error = |source| StoreOpenError::Directory {
            path: parent.to_path_buf(),
            source,
        };
        Dir::create_ambient_dir_all(parent, ambient_authority()).map_err(directory_error)?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(directory_error)?;

        Ok(Self {
            dir: Arc::new(dir),
            file_name: Utf8PathBuf::from(file_name),
            path: utf8.to_path_buf(),
        })
    }

    /// Path of the backing document as configured.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

fn map_document_error(err: DocumentError) -> UserStoreError {
    let message = err.to_string();
    match err {
        DocumentError::Parse { .. } => UserStoreError::malformed(message),
        DocumentError::Read { .. } | DocumentError::InvalidPath { .. } => {
            UserStoreError::read(message)
        }
        DocumentError::Encode { .. } | DocumentError::Write { .. } => {
            UserStoreError::write(message)
        }
    }
}

#[async_trait]
impl UserStore for JsonFileUserStore {
    async fn load(&self) -> Result<Vec<User>, UserStoreError> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let loaded = tokio::task::spawn_blocking(move || {
            read_or_init(&dir, &file_name, UsersDocument::default)
        })
        .await
        .map_err(|err| UserStoreError::read(err.to_string()))?
        .map_err(map_document_error)?;

        if loaded.was_created() {
            info!(path = %self.path, "created empty user document");
        }
        Ok(loaded.into_inner().users)
    }

    async fn save(&self, users: &[User]) -> Result<(), UserStoreError> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let document = UsersDocument {
            users: users.to_vec(),
        };
        tokio::task::spawn_blocking(move || write_pretty(&dir, &file_name, &document))
            .await
            .map_err(|err| UserStoreError::write(err.to_string()))?
            .map_err(map_document_error)
    }
}

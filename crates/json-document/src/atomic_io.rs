//! Atomic replacement of a file inside a capability directory.
//!
//! Contents are staged in a hidden sibling file, flushed to disk, then
//! renamed over the target. A rename within one directory is atomic on the
//! platforms we support, so the target always holds either the previous or
//! the new contents.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, File, OpenOptions};

use crate::error::DocumentError;

static STAGE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replace `path` with `contents`.
///
/// `path` must be a bare file name; nested or absolute paths are rejected so
/// the staged file and the target share a directory.
pub(crate) fn write_atomic(
    dir: &Dir,
    path: &Utf8Path,
    contents: &str,
) -> Result<(), DocumentError> {
    let target = file_name_of(path)?;
    let write_error = |err: io::Error| DocumentError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    };

    let mut staged = StagedFile::create(dir, target).map_err(write_error)?;
    staged.fill(contents.as_bytes()).map_err(write_error)?;
    staged.persist(target).map_err(write_error)?;
    sync_directory(dir);
    Ok(())
}

fn file_name_of(path: &Utf8Path) -> Result<&str, DocumentError> {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(name)), None) => Ok(name),
        _ => Err(DocumentError::InvalidPath {
            path: path.to_path_buf(),
        }),
    }
}

/// Hidden sibling file that is removed on drop unless it was persisted.
struct StagedFile<'dir> {
    dir: &'dir Dir,
    name: String,
    file: Option<File>,
    persisted: bool,
}

impl<'dir> StagedFile<'dir> {
    fn create(dir: &'dir Dir, target: &str) -> io::Result<Self> {
        let counter = STAGE_COUNTER.fetch_add(1, Ordering::Relaxed);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos());
        let name = format!(".{target}.{}.{nanos}.{counter}.tmp", std::process::id());

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        let file = dir.open_with(&name, &options)?;
        Ok(Self {
            dir,
            name,
            file: Some(file),
            persisted: false,
        })
    }

    fn fill(&mut self, bytes: &[u8]) -> io::Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Err(io::Error::other("staged file already closed"));
        };
        file.write_all(bytes)?;
        file.sync_all()
    }

    fn persist(mut self, target: &str) -> io::Result<()> {
        // Close the handle before renaming; Windows refuses to move open files.
        drop(self.file.take());
        replace(self.dir, &self.name, target)?;
        self.persisted = true;
        Ok(())
    }
}

impl Drop for StagedFile<'_> {
    fn drop(&mut self) {
        if self.persisted {
            return;
        }
        drop(self.file.take());
        drop(self.dir.remove_file(&self.name));
    }
}

#[cfg(windows)]
fn replace(dir: &Dir, from: &str, to: &str) -> io::Result<()> {
    match dir.remove_file(to) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(from, dir, to)
}

#[cfg(not(windows))]
fn replace(dir: &Dir, from: &str, to: &str) -> io::Result<()> {
    dir.rename(from, dir, to)
}

fn sync_directory(dir: &Dir) {
    // Durability of the rename itself is best effort.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
}

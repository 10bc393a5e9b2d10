//! JSON-file implementation of [`SessionStorage`] for the terminal client.
//!
//! The file holds a flat `{ "key": "value" }` object, mirroring what the
//! browser keeps in `localStorage`. Every operation re-reads the file so
//! two invocations never work from a stale copy; last write wins.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use content::{SessionStorage, StorageError};

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|err| {
                StorageError::Backend(format!("{} is not a session file: {err}", self.path.display()))
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(backend_error(&self.path, &err)),
        }
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if entries.is_empty() {
            return match std::fs::remove_file(&self.path) {
                Err(err) if err.kind() != ErrorKind::NotFound => Err(backend_error(&self.path, &err)),
                _ => Ok(()),
            };
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| backend_error(parent, &err))?;
        }
        // Replace via rename so an interrupted write never leaves a truncated file.
        let raw = serde_json::to_string_pretty(entries)?;
        let staging = self.staging_path();
        std::fs::write(&staging, raw).map_err(|err| backend_error(&staging, &err))?;
        std::fs::rename(&staging, &self.path).map_err(|err| {
            let _ = std::fs::remove_file(&staging);
            backend_error(&self.path, &err)
        })
    }

    /// Sibling of the session file, so the rename stays on one filesystem.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(ToOwned::to_owned).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn backend_error(path: &Path, err: &std::io::Error) -> StorageError {
    StorageError::Backend(format!("{}: {err}", path.display()))
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read()?;
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }
}

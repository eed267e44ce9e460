//! File-based key-value store
//!
//! Each key is stored as `<root>/<key>.json`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::key_value::KeyValueStore;
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(Error::InvalidInput(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;

        // Ensure parent directory exists
        fs::create_dir_all(&self.root)?;

        // Write to a sibling file first so readers never see a partial value
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        assert!(store.read("dynamic-kanban.tasks").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("nested"));

        store.write("dynamic-kanban.tasks", "[]").unwrap();
        assert_eq!(
            store.read("dynamic-kanban.tasks").unwrap(),
            Some("[]".to_string())
        );
        assert!(temp_dir
            .path()
            .join("nested")
            .join("dynamic-kanban.tasks.json")
            .exists());
        assert!(!temp_dir
            .path()
            .join("nested")
            .join("dynamic-kanban.tasks.json.tmp")
            .exists());
    }

    #[test]
    fn test_io_failures_surface_as_io_errors() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();
        let store = FileStore::new(&blocker);

        match store.write("board", "[]").unwrap_err() {
            Error::Io(_) => {}
            e => panic!("Expected Io error, got: {:?}", e),
        }
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        for key in ["", "../escape", "a/b", "a\\b"] {
            match store.write(key, "x").unwrap_err() {
                Error::InvalidInput(_) => {}
                e => panic!("Expected InvalidInput error, got: {:?}", e),
            }
        }
    }
}

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::error::StorageError;

/// Key/value string storage scoped to one client session.
///
/// Writes are last-write-wins; reads are synchronous.
pub trait SessionStorage {
    /// Returns the value stored under `key`, or `None` if nothing is stored.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes every stored value.
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// In-process storage that is discarded when the client exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        Ok(())
    }
}

/// Directory-backed storage: each key is a `<key>.json` file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Creates a storage in the platform cache directory.
    ///
    /// The session directory (`~/.cache/strajk/session/`) is created if it
    /// does not already exist.
    pub fn new() -> Result<Self, StorageError> {
        let cache_dir = dirs::cache_dir().ok_or(StorageError::NoCacheDir)?;
        Self::with_path(cache_dir.join("strajk").join("session"))
    }

    /// Creates a storage rooted at the given directory, creating it if needed.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = path.into();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Returns the file path for a key.
    ///
    /// Anything other than ASCII alphanumerics, `-` and `_` becomes `_`, so a
    /// key can never name a path outside the session directory.
    fn item_path(&self, key: &str) -> PathBuf {
        let safe_key: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_path.join(format!("{safe_key}.json"))
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.item_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.item_path(key), value)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        for entry in fs::read_dir(&self.base_path)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    mod memory {
        use super::*;

        #[test]
        fn missing_key_is_none() {
            let storage = MemoryStorage::new();
            assert_eq!(storage.get_item("confirmation").unwrap(), None);
        }

        #[test]
        fn set_then_get() {
            let mut storage = MemoryStorage::new();
            storage.set_item("confirmation", "{}").unwrap();
            assert_eq!(
                storage.get_item("confirmation").unwrap(),
                Some("{}".to_string())
            );
        }

        #[test]
        fn last_write_wins() {
            let mut storage = MemoryStorage::new();
            storage.set_item("k", "first").unwrap();
            storage.set_item("k", "second").unwrap();
            assert_eq!(storage.get_item("k").unwrap(), Some("second".to_string()));
        }

        #[test]
        fn clear_removes_everything() {
            let mut storage = MemoryStorage::new();
            storage.set_item("a", "1").unwrap();
            storage.set_item("b", "2").unwrap();
            storage.clear().unwrap();
            assert_eq!(storage.get_item("a").unwrap(), None);
            assert_eq!(storage.get_item("b").unwrap(), None);
        }
    }

    mod file {
        use super::*;

        #[test]
        fn with_path_creates_directory() {
            let dir = tempdir().unwrap();
            let nested = dir.path().join("nested").join("session");
            FileStorage::with_path(&nested).unwrap();
            assert!(nested.is_dir());
        }

        #[test]
        fn missing_key_is_none() {
            let dir = tempdir().unwrap();
            let storage = FileStorage::with_path(dir.path()).unwrap();
            assert_eq!(storage.get_item("confirmation").unwrap(), None);
        }

        #[test]
        fn set_writes_json_file() {
            let dir = tempdir().unwrap();
            let mut storage = FileStorage::with_path(dir.path()).unwrap();
            storage.set_item("confirmation", "{\"a\":1}").unwrap();
            let content = fs::read_to_string(dir.path().join("confirmation.json")).unwrap();
            assert_eq!(content, "{\"a\":1}");
        }

        #[test]
        fn value_survives_new_instance() {
            let dir = tempdir().unwrap();
            let mut storage = FileStorage::with_path(dir.path()).unwrap();
            storage.set_item("confirmation", "saved").unwrap();

            let reopened = FileStorage::with_path(dir.path()).unwrap();
            assert_eq!(
                reopened.get_item("confirmation").unwrap(),
                Some("saved".to_string())
            );
        }

        #[test]
        fn last_write_wins() {
            let dir = tempdir().unwrap();
            let mut storage = FileStorage::with_path(dir.path()).unwrap();
            storage.set_item("k", "first").unwrap();
            storage.set_item("k", "second").unwrap();
            assert_eq!(storage.get_item("k").unwrap(), Some("second".to_string()));
        }

        #[test]
        fn key_cannot_escape_directory() {
            let dir = tempdir().unwrap();
            let mut storage = FileStorage::with_path(dir.path()).unwrap();
            storage.set_item("../escape", "x").unwrap();
            assert!(dir.path().join("___escape.json").is_file());
            assert!(!dir.path().parent().unwrap().join("escape.json").exists());
        }

        #[test]
        fn clear_removes_only_json_files() {
            let dir = tempdir().unwrap();
            let mut storage = FileStorage::with_path(dir.path()).unwrap();
            storage.set_item("a", "1").unwrap();
            fs::write(dir.path().join("notes.txt"), "keep").unwrap();

            storage.clear().unwrap();
            assert_eq!(storage.get_item("a").unwrap(), None);
            assert!(dir.path().join("notes.txt").is_file());
        }
    }
}

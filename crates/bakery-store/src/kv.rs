//! Key-value stores holding lists of ids.

use crate::StoreError;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A store mapping a key to an ordered list of ids.
///
/// A key that was never written reads as an empty list.
pub trait IdListStore {
    /// Get the list stored under `key`.
    fn get(&self, key: &str) -> Result<Vec<String>, StoreError>;

    /// Replace the list stored under `key`.
    fn put(&self, key: &str, ids: Vec<String>) -> Result<(), StoreError>;
}

impl<S: IdListStore + ?Sized> IdListStore for &S {
    fn get(&self, key: &str) -> Result<Vec<String>, StoreError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, ids: Vec<String>) -> Result<(), StoreError> {
        (**self).put(key, ids)
    }
}

/// In-process store, mostly for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    lists: Mutex<HashMap<String, Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdListStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let lists = self.lists.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(lists.get(key).cloned().unwrap_or_default())
    }

    fn put(&self, key: &str, ids: Vec<String>) -> Result<(), StoreError> {
        let mut lists = self.lists.lock().map_err(|_| StoreError::Poisoned)?;
        lists.insert(key.to_string(), ids);
        Ok(())
    }
}

/// Store keeping one JSON file per key inside a directory.
///
/// # Example
///
/// ```rust,ignore
/// let store = FileStore::open(".bakery")?;
/// store.put("wishlist", vec!["bolo-cenoura".into()])?;
/// assert_eq!(store.get("wishlist")?, vec!["bolo-cenoura"]);
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) the store directory.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| StoreError::OpenError {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Directory the lists are kept in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl IdListStore for FileStore {
    fn get(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let path = self.path_for(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let ids: Vec<String> = serde_json::from_slice(&bytes)?;
        tracing::debug!(key, count = ids.len(), "id list loaded");
        Ok(ids)
    }

    fn put(&self, key: &str, ids: Vec<String>) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let bytes = serde_json::to_vec_pretty(&ids)?;

        // Atomic replace.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, bytes).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(key, count = ids.len(), "id list saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.get("wishlist").unwrap().is_empty());

        store.put("wishlist", vec!["a".into(), "b".into()]).unwrap();
        assert_eq!(store.get("wishlist").unwrap(), vec!["a", "b"]);
        assert!(store.get("recent").unwrap().is_empty());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileStore::open(dir.path()).unwrap();
            store.put("wishlist", vec!["bolo".into()]).unwrap();
        }
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("wishlist").unwrap(), vec!["bolo"]);
        assert!(dir.path().join("wishlist.json").exists());
        assert!(!dir.path().join("wishlist.json.tmp").exists());
    }

    #[test]
    fn test_file_store_missing_key_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("nested/data")).unwrap();
        assert!(store.get("recent").unwrap().is_empty());
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(store.get(key), Err(StoreError::InvalidKey(_))), "{key}");
        }
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("wishlist.json"), b"{not json").unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.get("wishlist"),
            Err(StoreError::SerializeError(_))
        ));
    }
}

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use xconnect_core::error::StorageError;

use crate::writer::atomic_write;

/// Opaque persistent string store keyed by logical name.
///
/// No transactions and no indexing: each `set` replaces one value atomically.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// One file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    /// The root directory is created lazily on the first `set`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        ensure_valid_key(key)?;
        Ok(self.root.join(key))
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| StorageError::InvalidUtf8 {
                    key: key.to_string(),
                }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root).map_err(|source| StorageError::Io {
            path: self.root.clone(),
            source,
        })?;
        atomic_write(&path, value.as_bytes())
            .map_err(|source| StorageError::Io { path, source })?;
        tracing::trace!(key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

/// Keys become file names, so only a conservative character set is accepted.
fn ensure_valid_key(key: &str) -> Result<(), StorageError> {
    let ok = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if ok {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_get_set_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::new(dir.path().join("nested"));

        assert_eq!(store.get("colleagues").unwrap(), None);
        store.set("colleagues", "[]").unwrap();
        assert_eq!(store.get("colleagues").unwrap().as_deref(), Some("[]"));

        store.set("colleagues", "[{\"id\":\"1\"}]").unwrap();
        assert_eq!(
            store.get("colleagues").unwrap().as_deref(),
            Some("[{\"id\":\"1\"}]")
        );

        store.remove("colleagues").unwrap();
        assert_eq!(store.get("colleagues").unwrap(), None);
        store.remove("colleagues").unwrap();
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::new(dir.path());
        for key in ["", "../x", "a/b", ".hidden"] {
            assert!(matches!(
                store.set(key, "v"),
                Err(StorageError::InvalidKey(_))
            ));
        }
    }

    #[test]
    fn file_store_reports_non_utf8_values() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("name"), [0xff, 0xfe]).unwrap();
        let store = FileKvStore::new(dir.path());
        assert!(matches!(
            store.get("name"),
            Err(StorageError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn memory_store_is_shareable_by_reference() {
        let store = MemoryKvStore::new();
        let a: &MemoryKvStore = &store;
        let b = Arc::new(MemoryKvStore::new());

        a.set("name", "Ann").unwrap();
        assert_eq!(store.get("name").unwrap().as_deref(), Some("Ann"));
        b.set("name", "Bo").unwrap();
        assert_eq!(KeyValueStore::get(&b, "name").unwrap().as_deref(), Some("Bo"));
        a.remove("missing").unwrap();
    }
}

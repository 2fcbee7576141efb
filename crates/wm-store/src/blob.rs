//! String-keyed blob storage.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::StoreResult;

/// Synchronous key-value string storage. Keys are flat names, values are
/// opaque blobs. Reading an absent key is `Ok(None)`, never an error.
pub trait BlobStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

impl<B: BlobStore + ?Sized> BlobStore for &mut B {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

/// One file per key under a data directory, created on demand.
pub struct FileBlobStore {
    root_dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(root_dir: PathBuf) -> StoreResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root_dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// HashMap-backed store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryBlobStore {
    entries: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

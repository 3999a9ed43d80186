//! Pluggable persistence backends for the history store
//!
//! The store addresses durable storage through a single named blob slot.
//! The default backend is an embedded `sled` database in the platform
//! data directory; an in-memory backend serves tests and a no-op backend
//! serves execution contexts with no durable storage at all, where reads
//! degrade to empty and writes are silently dropped.

use crate::error::{JobscoutError, Result};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Blob-slot persistence interface consumed by the history store
///
/// Implementations hold named binary blobs. All operations are
/// synchronous and local to the device.
pub trait HistoryBackend: Send + Sync {
    /// Read the blob stored under `slot`, if any
    fn get(&self, slot: &str) -> Result<Option<Vec<u8>>>;

    /// Overwrite the blob stored under `slot`
    fn set(&self, slot: &str, value: &[u8]) -> Result<()>;

    /// Remove the blob stored under `slot`; absent slots are a no-op
    fn remove(&self, slot: &str) -> Result<()>;
}

/// Durable backend using an embedded `sled` database
pub struct SledBackend {
    db: sled::Db,
}

impl SledBackend {
    /// Open or create a database at the given directory
    ///
    /// # Errors
    ///
    /// Returns `JobscoutError::Storage` if the database cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let db = sled::open(path)
            .map_err(|e| JobscoutError::Storage(format!("Failed to open database: {}", e)))?;
        Ok(Self { db })
    }

    /// Open the default database in the platform data directory
    ///
    /// Honors an explicit directory override when given (typically from
    /// `HistoryConfig::data_dir`).
    ///
    /// # Errors
    ///
    /// Returns `JobscoutError::Storage` if the data directory cannot be
    /// determined or created, or the database cannot be opened.
    pub fn open_default(data_dir: Option<&str>) -> Result<Self> {
        let dir: PathBuf = match data_dir {
            Some(dir) => PathBuf::from(dir),
            None => {
                let proj_dirs = ProjectDirs::from("com", "jobscout", "jobscout").ok_or_else(
                    || JobscoutError::Storage("Could not determine data directory".into()),
                )?;
                proj_dirs.data_dir().to_path_buf()
            }
        };
        std::fs::create_dir_all(&dir)
            .map_err(|e| JobscoutError::Storage(format!("Failed to create data directory: {}", e)))?;
        Self::new(dir.join("history.db"))
    }
}

impl HistoryBackend for SledBackend {
    fn get(&self, slot: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .db
            .get(slot.as_bytes())
            .map_err(|e| JobscoutError::Storage(format!("Get failed: {}", e)))?;
        Ok(value.map(|ivec| ivec.to_vec()))
    }

    fn set(&self, slot: &str, value: &[u8]) -> Result<()> {
        self.db
            .insert(slot.as_bytes(), value)
            .map_err(|e| JobscoutError::Storage(format!("Insert failed: {}", e)))?;
        self.db
            .flush()
            .map_err(|e| JobscoutError::Storage(format!("Flush failed: {}", e)))?;
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<()> {
        self.db
            .remove(slot.as_bytes())
            .map_err(|e| JobscoutError::Storage(format!("Remove failed: {}", e)))?;
        self.db
            .flush()
            .map_err(|e| JobscoutError::Storage(format!("Flush failed: {}", e)))?;
        Ok(())
    }
}

/// Volatile backend holding slots in memory
///
/// Used in tests and anywhere history should not outlive the process.
#[derive(Default)]
pub struct MemoryBackend {
    slots: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryBackend for MemoryBackend {
    fn get(&self, slot: &str) -> Result<Option<Vec<u8>>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| JobscoutError::Storage("Lock poisoned".into()))?;
        Ok(slots.get(slot).cloned())
    }

    fn set(&self, slot: &str, value: &[u8]) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| JobscoutError::Storage("Lock poisoned".into()))?;
        slots.insert(slot.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| JobscoutError::Storage("Lock poisoned".into()))?;
        slots.remove(slot);
        Ok(())
    }
}

/// Backend for contexts without durable storage
///
/// Reads always come back empty and writes succeed without effect, so
/// callers in non-interactive or server-rendered contexts never fail.
#[derive(Default)]
pub struct NoopBackend;

impl NoopBackend {
    pub fn new() -> Self {
        Self
    }
}

impl HistoryBackend for NoopBackend {
    fn get(&self, _slot: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    fn set(&self, _slot: &str, _value: &[u8]) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _slot: &str) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_round_trip() {
        let backend = MemoryBackend::new();
        assert!(backend.get("slot").unwrap().is_none());

        backend.set("slot", b"payload").unwrap();
        assert_eq!(backend.get("slot").unwrap().unwrap(), b"payload");

        backend.remove("slot").unwrap();
        assert!(backend.get("slot").unwrap().is_none());
    }

    #[test]
    fn test_memory_backend_remove_absent_slot() {
        let backend = MemoryBackend::new();
        assert!(backend.remove("missing").is_ok());
    }

    #[test]
    fn test_noop_backend_reads_empty_after_write() {
        let backend = NoopBackend::new();
        backend.set("slot", b"payload").unwrap();
        assert!(backend.get("slot").unwrap().is_none());
        assert!(backend.remove("slot").is_ok());
    }

    #[test]
    fn test_sled_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = SledBackend::new(dir.path().join("history.db")).unwrap();

        backend.set("slot", b"payload").unwrap();
        assert_eq!(backend.get("slot").unwrap().unwrap(), b"payload");

        backend.remove("slot").unwrap();
        assert!(backend.get("slot").unwrap().is_none());
    }

    #[test]
    fn test_sled_backend_open_default_with_override() {
        let dir = tempfile::tempdir().unwrap();
        let backend = SledBackend::open_default(Some(dir.path().to_str().unwrap())).unwrap();
        backend.set("slot", b"x").unwrap();
        assert!(dir.path().join("history.db").exists());
    }
}

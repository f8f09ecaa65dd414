//! Durable key-value slots for the cart.
//!
//! A slot holds one serialized value and is always overwritten wholesale.
//! [`MemoryStorage`] keeps slots in process; [`FileStorage`] keeps one JSON
//! file per slot and replaces it atomically.

use std::collections::HashMap;
use std::fmt::Debug;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::RwLock;

use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Slot names are limited to ASCII letters, digits, `-` and `_`.
    #[error("Invalid slot name: {0:?}")]
    InvalidSlot(String),

    /// Filesystem operation failed.
    #[error("I/O error on slot {slot}: {source}")]
    Io {
        slot: String,
        #[source]
        source: io::Error,
    },

    /// The in-memory map was poisoned by a panicking writer.
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Durable local key-value storage.
///
/// Uses `&self` throughout so a backend can be shared by reference; backends
/// that need mutation use interior mutability.
pub trait CartStorage: Debug {
    /// Read a slot. Returns `Ok(None)` if it has never been written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a slot with `value`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value could not be made durable.
    fn write(&self, slot: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a slot. Deleting a missing slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend refuses the deletion.
    fn remove(&self, slot: &str) -> Result<(), StorageError>;
}

impl<S: CartStorage + ?Sized> CartStorage for &S {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        (**self).read(slot)
    }

    fn write(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(slot, value)
    }

    fn remove(&self, slot: &str) -> Result<(), StorageError> {
        (**self).remove(slot)
    }
}

impl<S: CartStorage + ?Sized> CartStorage for Box<S> {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        (**self).read(slot)
    }

    fn write(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(slot, value)
    }

    fn remove(&self, slot: &str) -> Result<(), StorageError> {
        (**self).remove(slot)
    }
}

/// Validate a slot name.
///
/// # Errors
///
/// Returns `StorageError::InvalidSlot` for empty names or names containing
/// anything other than ASCII alphanumerics, `-` and `_`.
pub fn validate_slot(slot: &str) -> Result<(), StorageError> {
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidSlot(slot.to_owned()))
    }
}

// =============================================================================
// MemoryStorage
// =============================================================================

/// In-process slot storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        validate_slot(slot)?;
        let slots = self.slots.read().map_err(|_| StorageError::Poisoned)?;
        Ok(slots.get(slot).cloned())
    }

    fn write(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        validate_slot(slot)?;
        let mut slots = self.slots.write().map_err(|_| StorageError::Poisoned)?;
        slots.insert(slot.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<(), StorageError> {
        validate_slot(slot)?;
        let mut slots = self.slots.write().map_err(|_| StorageError::Poisoned)?;
        slots.remove(slot);
        Ok(())
    }
}

// =============================================================================
// FileStorage
// =============================================================================

/// One JSON file per slot under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` for slot files. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `slot`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidSlot` for invalid slot names.
    pub fn slot_path(&self, slot: &str) -> Result<PathBuf, StorageError> {
        validate_slot(slot)?;
        Ok(self.dir.join(format!("{slot}.json")))
    }

    fn io_err(slot: &str) -> impl FnOnce(io::Error) -> StorageError + '_ {
        move |source| StorageError::Io {
            slot: slot.to_owned(),
            source,
        }
    }
}

impl CartStorage for FileStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(slot)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_err(slot)(e)),
        }
    }

    fn write(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(slot)?;
        fs::create_dir_all(&self.dir).map_err(Self::io_err(slot))?;

        // Uniquely named sibling, removed on drop unless persisted
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(Self::io_err(slot))?;
        tmp.write_all(value.as_bytes())
            .map_err(Self::io_err(slot))?;
        tmp.as_file().sync_all().map_err(Self::io_err(slot))?;
        tmp.persist(&path)
            .map_err(|e| Self::io_err(slot)(e.error))?;
        tracing::debug!(slot, path = %path.display(), "Slot written");
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<(), StorageError> {
        let path = self.slot_path(slot)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_err(slot)(e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_slot() {
        assert!(validate_slot("fiber-x-cart").is_ok());
        assert!(validate_slot("cart_v2").is_ok());
        assert!(validate_slot("").is_err());
        assert!(validate_slot("../etc/passwd").is_err());
        assert!(validate_slot("cart slot").is_err());
    }

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("cart").unwrap(), None);

        storage.write("cart", "[]").unwrap();
        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("[]"));

        storage.write("cart", "[1]").unwrap();
        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("[1]"));

        storage.remove("cart").unwrap();
        storage.remove("cart").unwrap();
        assert_eq!(storage.read("cart").unwrap(), None);
    }

    #[test]
    fn test_file_storage_missing_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));
        assert_eq!(storage.read("cart").unwrap(), None);
    }

    #[test]
    fn test_file_storage_overwrites_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.write("cart", r#"[{"a":1}]"#).unwrap();
        storage.write("cart", "[]").unwrap();

        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("[]"));
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["cart.json".to_string()]);
    }

    #[test]
    fn test_failed_persist_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        // A directory in the slot's place makes the final rename fail
        fs::create_dir(dir.path().join("cart.json")).unwrap();
        fs::write(dir.path().join("cart.json").join("keep"), "x").unwrap();
        let err = storage.write("cart", "[]").unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["cart.json".to_string()]);
    }

    #[test]
    fn test_concurrent_writers_to_one_slot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        std::thread::scope(|scope| {
            for i in 0..8 {
                let storage = &storage;
                scope.spawn(move || {
                    for _ in 0..10 {
                        storage.write("cart", &format!("[{i}]")).unwrap();
                    }
                });
            }
        });

        let value = storage.read("cart").unwrap().unwrap();
        assert!((0..8).any(|i| value == format!("[{i}]")));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_invalid_utf8_slot_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        fs::write(dir.path().join("cart.json"), [0xff, 0xfe, 0x5b]).unwrap();

        let err = storage.read("cart").unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }

    #[test]
    fn test_file_storage_rejects_invalid_slot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        let err = storage.write("../escape", "[]").unwrap_err();
        assert!(matches!(err, StorageError::InvalidSlot(_)));
    }
}

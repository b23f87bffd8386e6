use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{NotekeepError, Result};

use super::KeyValueStore;

pub const NOTEKEEP_DIR: &str = ".notekeep";

/// Slots stored as `<key>.json` files inside the project's `.notekeep/`
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Initialize a new notekeep project
    pub fn init(root: &Path) -> Result<Self> {
        let dir = root.join(NOTEKEEP_DIR);

        if dir.exists() {
            return Err(NotekeepError::AlreadyInitialized);
        }

        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Open an existing notekeep project
    pub fn open(root: &Path) -> Result<Self> {
        let dir = root.join(NOTEKEEP_DIR);

        if !dir.is_dir() {
            return Err(NotekeepError::NotInitialized);
        }

        Ok(Self { dir })
    }

    /// Get the notekeep directory path
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(NotekeepError::Storage(format!(
                "Invalid slot name '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        fs::write(&path, value)?;
        Ok(())
    }
}

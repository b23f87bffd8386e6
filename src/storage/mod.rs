//! Durable key-value slots.
//!
//! Each collection lives in one named slot holding a JSON array. Loading is
//! forgiving: a missing or unparsable slot yields an empty collection.

mod file_store;
mod memory;

pub use file_store::{FileStore, NOTEKEEP_DIR};
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;

/// Opaque get/set over named slots
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Read a collection from `key`, falling back to empty
pub fn load_slot<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(slot = key, "slot missing, starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(slot = key, error = %e, "failed to read slot, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!(slot = key, error = %e, "unparsable slot, starting empty");
            Vec::new()
        }
    }
}

/// Write a whole collection to `key`
pub fn save_slot<T, S>(store: &mut S, key: &str, items: &[T]) -> Result<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(items)?;
    store.set(key, &raw)?;
    debug!(slot = key, count = items.len(), "slot written");
    Ok(())
}

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{NotekeepError, Result};

pub const CONFIG_FILE: &str = "config.json";

/// Project configuration, kept at `.notekeep/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Slot holding the note collection
    pub notes_slot: String,
    /// Slot holding the tag collection
    pub tags_slot: String,
    /// Ask before deleting a note unless `--force` is given
    pub confirm_delete: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_slot: "notes".to_string(),
            tags_slot: "tags".to_string(),
            confirm_delete: true,
        }
    }
}

impl Config {
    /// Load from `dir`. A missing file gives the defaults; so does a broken
    /// one, with a warning.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read config, using defaults");
                return Self::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "invalid config, using defaults");
            Self::default()
        })
    }

    /// Both collections need their own slot, otherwise each write clobbers
    /// the other one.
    pub fn validate(&self) -> Result<()> {
        for (name, slot) in [("notes_slot", &self.notes_slot), ("tags_slot", &self.tags_slot)] {
            if slot.trim().is_empty() {
                return Err(NotekeepError::InvalidConfig(format!("{} is empty", name)));
            }
        }
        if self.notes_slot == self.tags_slot {
            return Err(NotekeepError::InvalidConfig(format!(
                "notes_slot and tags_slot both name '{}'",
                self.notes_slot
            )));
        }
        Ok(())
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(CONFIG_FILE), raw)?;
        Ok(())
    }
}

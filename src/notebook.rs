//! The state holder: owns both collections and the store behind them.
//!
//! Every mutation goes through the pure functions in [`crate::ops`], is
//! written to the store, and only then replaces the in-memory collection.
//! Mutations on ids that do not exist return `Ok(false)` and write nothing.

use tracing::{debug, info};

use crate::config::Config;
use crate::entity::{new_id, NoteData, ResolvedNote, StoredNote, Tag};
use crate::error::{NotekeepError, Result};
use crate::ops;
use crate::resolve::{resolve_note, resolve_notes};
use crate::search::{filter_notes, find_by_label, NoteFilter};
use crate::storage::{load_slot, save_slot, KeyValueStore};

pub struct Notebook<S: KeyValueStore> {
    store: S,
    notes_slot: String,
    tags_slot: String,
    notes: Vec<StoredNote>,
    tags: Vec<Tag>,
}

impl<S: KeyValueStore> Notebook<S> {
    /// Load both collections using the default slot names
    pub fn load(store: S) -> Self {
        Self::load_slots(store, &Config::default())
    }

    /// Load with configured slot names. Fails if the config would make the
    /// two collections overwrite each other.
    pub fn load_with(store: S, config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::load_slots(store, config))
    }

    fn load_slots(store: S, config: &Config) -> Self {
        let notes = load_slot(&store, &config.notes_slot);
        let tags = load_slot(&store, &config.tags_slot);
        debug!(notes = notes.len(), tags = tags.len(), "notebook loaded");

        Self {
            store,
            notes_slot: config.notes_slot.clone(),
            tags_slot: config.tags_slot.clone(),
            notes,
            tags,
        }
    }

    /// Write both collections, e.g. to materialize empty slots
    pub fn save(&mut self) -> Result<()> {
        save_slot(&mut self.store, &self.notes_slot, &self.notes)?;
        save_slot(&mut self.store, &self.tags_slot, &self.tags)
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn notes(&self) -> &[StoredNote] {
        &self.notes
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// All notes with their tags expanded, recomputed on every call
    pub fn resolved_notes(&self) -> Vec<ResolvedNote> {
        resolve_notes(&self.tags, &self.notes)
    }

    pub fn resolved_note(&self, id: &str) -> Option<ResolvedNote> {
        self.notes
            .iter()
            .find(|n| n.id == id)
            .map(|n| resolve_note(&self.tags, n))
    }

    pub fn filter(&self, filter: &NoteFilter) -> Vec<ResolvedNote> {
        filter_notes(self.resolved_notes(), filter)
    }

    /// Append a note and return its new id
    pub fn create_note(&mut self, data: NoteData) -> Result<String> {
        let id = new_id();
        let next = ops::create_note(&self.notes, &id, data);
        self.commit_notes(next)?;
        info!(note = %id, "note created");
        Ok(id)
    }

    pub fn update_note(&mut self, id: &str, data: NoteData) -> Result<bool> {
        if !self.notes.iter().any(|n| n.id == id) {
            debug!(note = id, "update on unknown note ignored");
            return Ok(false);
        }
        let next = ops::update_note(&self.notes, id, data);
        self.commit_notes(next)?;
        info!(note = id, "note updated");
        Ok(true)
    }

    pub fn delete_note(&mut self, id: &str) -> Result<bool> {
        if !self.notes.iter().any(|n| n.id == id) {
            debug!(note = id, "delete on unknown note ignored");
            return Ok(false);
        }
        let next = ops::delete_note(&self.notes, id);
        self.commit_notes(next)?;
        info!(note = id, "note deleted");
        Ok(true)
    }

    pub fn add_tag(&mut self, label: &str) -> Result<Tag> {
        let id = new_id();
        let next = ops::add_tag(&self.tags, &id, label);
        self.commit_tags(next)?;
        info!(tag = %id, label, "tag added");
        Ok(Tag::new(id, label))
    }

    pub fn rename_tag(&mut self, id: &str, label: &str) -> Result<bool> {
        if !self.tags.iter().any(|t| t.id == id) {
            return Ok(false);
        }
        let next = ops::rename_tag(&self.tags, id, label);
        self.commit_tags(next)?;
        info!(tag = id, label, "tag renamed");
        Ok(true)
    }

    /// Remove a tag. Notes keep the id in their `tag_ids`; it simply stops
    /// resolving.
    pub fn delete_tag(&mut self, id: &str) -> Result<bool> {
        if !self.tags.iter().any(|t| t.id == id) {
            return Ok(false);
        }
        let next = ops::delete_tag(&self.tags, id);
        self.commit_tags(next)?;
        info!(tag = id, "tag deleted");
        Ok(true)
    }

    /// Existing tag with this label (ignoring case), or a newly added one
    pub fn tag_for_label(&mut self, label: &str) -> Result<Tag> {
        if let Some(tag) = find_by_label(&self.tags, label) {
            return Ok(tag.clone());
        }
        self.add_tag(label)
    }

    /// Look up a note by full id or unique id prefix
    pub fn find_note(&self, key: &str) -> Result<&StoredNote> {
        if let Some(note) = self.notes.iter().find(|n| n.id == key) {
            return Ok(note);
        }
        unique_prefix_match(&self.notes, key, |n| &n.id)?
            .ok_or_else(|| NotekeepError::NoteNotFound(key.to_string()))
    }

    /// Look up a tag by full id, label, or unique id prefix
    pub fn find_tag(&self, key: &str) -> Result<&Tag> {
        if let Some(tag) = self.tags.iter().find(|t| t.id == key) {
            return Ok(tag);
        }
        if let Some(tag) = find_by_label(&self.tags, key) {
            return Ok(tag);
        }
        unique_prefix_match(&self.tags, key, |t| &t.id)?
            .ok_or_else(|| NotekeepError::TagNotFound(key.to_string()))
    }

    fn commit_notes(&mut self, next: Vec<StoredNote>) -> Result<()> {
        save_slot(&mut self.store, &self.notes_slot, &next)?;
        self.notes = next;
        Ok(())
    }

    fn commit_tags(&mut self, next: Vec<Tag>) -> Result<()> {
        save_slot(&mut self.store, &self.tags_slot, &next)?;
        self.tags = next;
        Ok(())
    }
}

fn unique_prefix_match<'a, T>(
    items: &'a [T],
    prefix: &str,
    id_of: impl Fn(&T) -> &String,
) -> Result<Option<&'a T>> {
    if prefix.is_empty() {
        return Ok(None);
    }
    let mut matches = items.iter().filter(|item| id_of(item).starts_with(prefix));
    match (matches.next(), matches.next()) {
        (Some(item), None) => Ok(Some(item)),
        (Some(_), Some(_)) => Err(NotekeepError::AmbiguousId(prefix.to_string())),
        _ => Ok(None),
    }
}

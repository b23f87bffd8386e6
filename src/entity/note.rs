// src/entity/note.rs
use serde::{Deserialize, Serialize};

use super::Tag;

/// A note as persisted: tags are referenced by id only.
///
/// `tag_ids` may hold duplicates or ids of tags that no longer exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredNote {
    pub id: String,
    pub title: String,
    /// Markup source
    #[serde(alias = "markDown")]
    pub body: String,
    #[serde(default)]
    pub tag_ids: Vec<String>,
}

impl StoredNote {
    pub fn new(id: impl Into<String>, data: NoteData) -> Self {
        let tag_ids = data.tag_ids();
        Self {
            id: id.into(),
            title: data.title,
            body: data.body,
            tag_ids,
        }
    }
}

/// User-supplied fields of a note, used for create and update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteData {
    pub title: String,
    pub body: String,
    pub tags: Vec<Tag>,
}

impl NoteData {
    pub fn new(title: impl Into<String>, body: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            tags,
        }
    }

    pub fn tag_ids(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.id.clone()).collect()
    }
}

/// Read-time view of a note with tag ids expanded to tag records.
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedNote {
    pub id: String,
    pub title: String,
    pub body: String,
    pub tags: Vec<Tag>,
}

impl ResolvedNote {
    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|t| t.id == tag_id)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.label.as_str()).collect()
    }
}

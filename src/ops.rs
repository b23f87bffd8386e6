//! Collection transformations for notes and tags.
//!
//! Each function takes the current collection and returns the next one.
//! Missing ids are no-ops. Ids for new records are supplied by the caller.

use crate::entity::{NoteData, StoredNote, Tag};

/// Append a new note
pub fn create_note(notes: &[StoredNote], id: &str, data: NoteData) -> Vec<StoredNote> {
    let mut next = notes.to_vec();
    next.push(StoredNote::new(id, data));
    next
}

/// Replace the note matching `id`, keeping its position
pub fn update_note(notes: &[StoredNote], id: &str, data: NoteData) -> Vec<StoredNote> {
    notes
        .iter()
        .map(|n| {
            if n.id == id {
                StoredNote::new(id, data.clone())
            } else {
                n.clone()
            }
        })
        .collect()
}

pub fn delete_note(notes: &[StoredNote], id: &str) -> Vec<StoredNote> {
    notes.iter().filter(|n| n.id != id).cloned().collect()
}

/// Append a new tag
pub fn add_tag(tags: &[Tag], id: &str, label: &str) -> Vec<Tag> {
    let mut next = tags.to_vec();
    next.push(Tag::new(id, label));
    next
}

pub fn rename_tag(tags: &[Tag], id: &str, label: &str) -> Vec<Tag> {
    tags.iter()
        .map(|t| {
            if t.id == id {
                Tag::new(id, label)
            } else {
                t.clone()
            }
        })
        .collect()
}

/// Remove a tag. Notes referencing it are left alone.
pub fn delete_tag(tags: &[Tag], id: &str) -> Vec<Tag> {
    tags.iter().filter(|t| t.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_notes;

    fn sample_notes() -> Vec<StoredNote> {
        vec![
            StoredNote {
                id: "n1".to_string(),
                title: "First".to_string(),
                body: "one".to_string(),
                tag_ids: vec!["t1".to_string()],
            },
            StoredNote {
                id: "n2".to_string(),
                title: "Second".to_string(),
                body: "two".to_string(),
                tag_ids: vec![],
            },
        ]
    }

    fn sample_tags() -> Vec<Tag> {
        vec![Tag::new("t1", "work"), Tag::new("t2", "home")]
    }

    #[test]
    fn test_create_note_appends() {
        let notes = sample_notes();
        let data = NoteData::new("Third", "three", vec![Tag::new("t2", "home")]);

        let next = create_note(&notes, "n3", data);

        assert_eq!(next.len(), 3);
        assert_eq!(next[..2], notes[..]);
        assert_eq!(next[2].id, "n3");
        assert_eq!(next[2].tag_ids, vec!["t2"]);
    }

    #[test]
    fn test_create_then_delete_note_round_trips() {
        let notes = sample_notes();
        let next = create_note(&notes, "n3", NoteData::new("Third", "", vec![]));
        assert_eq!(delete_note(&next, "n3"), notes);
    }

    #[test]
    fn test_update_note_keeps_position() {
        let notes = sample_notes();
        let data = NoteData::new("First v2", "uno", vec![Tag::new("t2", "home")]);

        let next = update_note(&notes, "n1", data);

        assert_eq!(next[0].id, "n1");
        assert_eq!(next[0].title, "First v2");
        assert_eq!(next[0].body, "uno");
        assert_eq!(next[0].tag_ids, vec!["t2"]);
        assert_eq!(next[1], notes[1]);
    }

    #[test]
    fn test_update_missing_note_is_noop() {
        let notes = sample_notes();
        let next = update_note(&notes, "nope", NoteData::new("x", "y", vec![]));
        assert_eq!(next, notes);
    }

    #[test]
    fn test_delete_missing_note_is_noop() {
        let notes = sample_notes();
        assert_eq!(delete_note(&notes, "nope"), notes);
    }

    #[test]
    fn test_add_then_delete_tag_round_trips() {
        let tags = sample_tags();
        let next = add_tag(&tags, "t3", "ideas");
        assert_eq!(next.last(), Some(&Tag::new("t3", "ideas")));
        assert_eq!(delete_tag(&next, "t3"), tags);
    }

    #[test]
    fn test_rename_tag() {
        let tags = sample_tags();
        let next = rename_tag(&tags, "t2", "house");
        assert_eq!(next, vec![Tag::new("t1", "work"), Tag::new("t2", "house")]);
        assert_eq!(rename_tag(&tags, "nope", "x"), tags);
    }

    #[test]
    fn test_delete_tag_leaves_dangling_reference() {
        let notes = sample_notes();
        let tags = delete_tag(&sample_tags(), "t1");

        assert_eq!(notes[0].tag_ids, vec!["t1"]);
        let resolved = resolve_notes(&tags, &notes);
        assert!(resolved[0].tags.is_empty());
    }
}

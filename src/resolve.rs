//! Joins stored notes against the tag collection.
//!
//! A resolved note's tags follow tag-collection order, not `tag_ids` order.
//! Ids with no matching tag are dropped and duplicate ids collapse, since
//! membership is tested per tag rather than per id.

use std::collections::HashSet;

use crate::entity::{ResolvedNote, StoredNote, Tag};

/// Resolve a single note against `tags`
pub fn resolve_note(tags: &[Tag], note: &StoredNote) -> ResolvedNote {
    let wanted: HashSet<&str> = note.tag_ids.iter().map(String::as_str).collect();

    ResolvedNote {
        id: note.id.clone(),
        title: note.title.clone(),
        body: note.body.clone(),
        tags: tags
            .iter()
            .filter(|t| wanted.contains(t.id.as_str()))
            .cloned()
            .collect(),
    }
}

/// Resolve every note, keeping note order
pub fn resolve_notes(tags: &[Tag], notes: &[StoredNote]) -> Vec<ResolvedNote> {
    notes.iter().map(|n| resolve_note(tags, n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, title: &str, tag_ids: &[&str]) -> StoredNote {
        StoredNote {
            id: id.to_string(),
            title: title.to_string(),
            body: "...".to_string(),
            tag_ids: tag_ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_dangling_ids_are_dropped() {
        let tags = vec![Tag::new("t1", "work")];
        let notes = vec![note("n1", "Plan", &["t1", "tX"])];

        let resolved = resolve_notes(&tags, &notes);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, "n1");
        assert_eq!(resolved[0].tags, vec![Tag::new("t1", "work")]);
    }

    #[test]
    fn test_tag_collection_order_wins() {
        let tags = vec![
            Tag::new("t1", "a"),
            Tag::new("t2", "b"),
            Tag::new("t3", "c"),
        ];
        let resolved = resolve_note(&tags, &note("n1", "x", &["t3", "t1"]));
        assert_eq!(resolved.labels(), vec!["a", "c"]);
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let tags = vec![Tag::new("t1", "work")];
        let resolved = resolve_note(&tags, &note("n1", "x", &["t1", "t1", "t1"]));
        assert_eq!(resolved.tags.len(), 1);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let tags = vec![Tag::new("t1", "work"), Tag::new("t2", "home")];
        let notes = vec![note("n1", "a", &["t2", "t1"]), note("n2", "b", &[])];
        assert_eq!(resolve_notes(&tags, &notes), resolve_notes(&tags, &notes));
    }

    #[test]
    fn test_note_without_tags() {
        let tags = vec![Tag::new("t1", "work")];
        let resolved = resolve_note(&tags, &note("n1", "x", &[]));
        assert!(resolved.tags.is_empty());
        assert_eq!(resolved.body, "...");
    }
}

//! Read-time filtering of resolved notes.

use crate::entity::{ResolvedNote, Tag};

/// Title substring plus required tags.
///
/// An empty filter passes every note.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoteFilter {
    /// Case-insensitive title substring
    pub title: String,
    /// Notes must carry all of these tag ids
    pub tag_ids: Vec<String>,
}

impl NoteFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_tag(mut self, tag: &Tag) -> Self {
        self.tag_ids.push(tag.id.clone());
        self
    }

    /// Whether the user narrowed the list at all. Whitespace-only titles
    /// do not count.
    pub fn is_active(&self) -> bool {
        !self.title.trim().is_empty() || !self.tag_ids.is_empty()
    }

    pub fn matches(&self, note: &ResolvedNote) -> bool {
        let title_match = self.title.is_empty()
            || note
                .title
                .to_lowercase()
                .contains(&self.title.to_lowercase());
        let tags_match = self.tag_ids.iter().all(|id| note.has_tag(id));

        title_match && tags_match
    }
}

/// Keep the notes passing `filter`, in order
pub fn filter_notes(notes: Vec<ResolvedNote>, filter: &NoteFilter) -> Vec<ResolvedNote> {
    notes.into_iter().filter(|n| filter.matches(n)).collect()
}

/// Parse a raw query into a filter.
///
/// `tag:<label>` tokens are matched against `tags` by label, ignoring case.
/// Everything else becomes the title substring. Labels with no matching
/// tag are returned so the caller can report them.
///
/// ```ignore
/// let (filter, unknown) = parse_query("tag:work weekly plan", &tags);
/// assert_eq!(filter.title, "weekly plan");
/// ```
pub fn parse_query(raw: &str, tags: &[Tag]) -> (NoteFilter, Vec<String>) {
    let mut filter = NoteFilter::default();
    let mut unknown = Vec::new();
    let mut remaining = Vec::new();

    for token in raw.split_whitespace() {
        if let Some(label) = token.strip_prefix("tag:") {
            match find_by_label(tags, label) {
                Some(tag) => {
                    if !filter.tag_ids.contains(&tag.id) {
                        filter.tag_ids.push(tag.id.clone());
                    }
                }
                None => unknown.push(label.to_string()),
            }
        } else {
            remaining.push(token);
        }
    }

    filter.title = remaining.join(" ");
    (filter, unknown)
}

/// Find a tag by label, ignoring case
pub fn find_by_label<'a>(tags: &'a [Tag], label: &str) -> Option<&'a Tag> {
    let wanted = label.to_lowercase();
    tags.iter().find(|t| t.label.to_lowercase() == wanted)
}

mod note;
mod tag;

pub use note::{NoteData, ResolvedNote, StoredNote};
pub use tag::Tag;

use uuid::Uuid;

/// Generate a fresh identifier for a note or tag
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Shortened id for human-readable output
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(7) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("a1b2c3d4-0000"), "a1b2c3d");
        assert_eq!(short_id("t1"), "t1");
    }
}

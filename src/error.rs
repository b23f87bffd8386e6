use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotekeepError {
    #[error("Not in a notekeep project. Run 'notekeep init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .notekeep/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Ambiguous id '{0}' matches more than one entry")]
    AmbiguousId(String),

    #[error("Invalid tag label '{0}': labels cannot be blank")]
    InvalidLabel(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NotekeepError>;

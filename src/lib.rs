pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod notebook;
pub mod ops;
pub mod resolve;
pub mod search;
pub mod storage;

pub use config::Config;
pub use entity::{NoteData, ResolvedNote, StoredNote, Tag};
pub use error::{NotekeepError, Result};
pub use notebook::Notebook;
pub use search::NoteFilter;
pub use storage::{FileStore, KeyValueStore, MemoryStore};

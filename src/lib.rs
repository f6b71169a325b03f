//! In-memory notebook of timestamped, tagged memos with substring search.

pub mod config;
pub mod error;
pub mod models;
pub mod notebook;

pub use config::NotebookConfig;
pub use error::NotebookError;
pub use models::{CaseFolding, IdSequence, Note, NoteBuilder, NoteId};
pub use notebook::Notebook;

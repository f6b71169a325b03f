use thiserror::Error;

use crate::NoteId;

/// Errors returned by the `Result`-based notebook accessors.
///
/// The core lookup and modify operations report a missing note as `None`;
/// this type exists for callers that would rather propagate with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotebookError {
    /// No note in the notebook carries this id.
    #[error("Note with id {0} does not exist")]
    NoteNotFound(NoteId),
}

//! Notebook configuration.
//!
//! The library does no I/O; callers load a [`NotebookConfig`] from whatever
//! source they use (JSON, TOML, environment) and pass it in.

use serde::{Deserialize, Serialize};

use crate::CaseFolding;

/// Tunables for a [`Notebook`](crate::Notebook).
///
/// Missing fields fall back to their defaults when deserialized.
///
/// # Examples
///
/// ```
/// use notebook::{CaseFolding, IdSequence, Notebook, NotebookConfig};
///
/// let config = NotebookConfig {
///     case_folding: CaseFolding::Ascii,
/// };
/// let notebook = Notebook::with_config(IdSequence::new(), config);
/// assert_eq!(notebook.config().case_folding, CaseFolding::Ascii);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotebookConfig {
    /// Folding used by case-insensitive searches.
    pub case_folding: CaseFolding,
}

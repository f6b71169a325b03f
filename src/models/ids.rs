use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Unique identifier for a note.
///
/// Issued only by an [`IdSequence`], so two notes drawn from the same sequence
/// never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    /// Creates a note ID from a raw value, typically one a caller got back earlier.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying ID value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic source of note ids.
///
/// Clones share one counter: hand a clone to every `Notebook` that must draw
/// from the same id space. The first id issued is 1 and ids are never reused.
///
/// The handle is neither `Send` nor `Sync`; a sequence belongs to one thread.
///
/// # Examples
///
/// ```
/// use notebook::IdSequence;
///
/// let ids = IdSequence::new();
/// let shared = ids.clone();
///
/// assert_eq!(ids.next_id().get(), 1);
/// assert_eq!(shared.next_id().get(), 2);
/// assert_eq!(ids.last_id().map(|id| id.get()), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: Rc<Cell<u64>>,
}

impl IdSequence {
    /// Creates a fresh sequence. Nothing has been issued yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the counter and returns the new id.
    pub fn next_id(&self) -> NoteId {
        let next = self.last.get() + 1;
        self.last.set(next);
        NoteId(next)
    }

    /// Returns the most recently issued id, or `None` if none has been issued.
    pub fn last_id(&self) -> Option<NoteId> {
        match self.last.get() {
            0 => None,
            last => Some(NoteId(last)),
        }
    }
}

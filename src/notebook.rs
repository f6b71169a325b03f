use log::debug;

use crate::{IdSequence, Note, NoteId, NotebookConfig, NotebookError};

/// An insertion-ordered collection of notes.
///
/// The notebook owns its notes exclusively. Ids come from the injected
/// [`IdSequence`]; give several notebooks clones of one sequence and their
/// ids stay unique across all of them.
///
/// # Examples
///
/// ```
/// use notebook::{IdSequence, Notebook};
///
/// let mut notebook = Notebook::new(IdSequence::new());
/// notebook.new_note("hello world", "a b");
/// notebook.new_note("goodbye", "b c");
///
/// let hits = notebook.search("o", true);
/// assert_eq!(hits.len(), 2);
/// assert!(notebook.search("O", true).is_empty());
/// ```
#[derive(Debug)]
pub struct Notebook {
    ids: IdSequence,
    config: NotebookConfig,
    notes: Vec<Note>,
}

impl Notebook {
    /// Creates an empty notebook with the default configuration.
    pub fn new(ids: IdSequence) -> Self {
        Self::with_config(ids, NotebookConfig::default())
    }

    /// Creates an empty notebook with the given configuration.
    pub fn with_config(ids: IdSequence, config: NotebookConfig) -> Self {
        Self {
            ids,
            config,
            notes: Vec::new(),
        }
    }

    /// Returns the notebook's configuration.
    pub fn config(&self) -> &NotebookConfig {
        &self.config
    }

    /// Returns every note in creation order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true if the notebook holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Creates a note and appends it to the end of the notebook.
    ///
    /// Returns the id the new note was given. Pass `""` for an untagged note.
    ///
    /// # Examples
    ///
    /// ```
    /// use notebook::{IdSequence, Notebook};
    ///
    /// let mut notebook = Notebook::new(IdSequence::new());
    /// let id = notebook.new_note("My first note", "");
    ///
    /// assert_eq!(id.get(), 1);
    /// assert_eq!(notebook.notes()[0].memo(), "My first note");
    /// ```
    pub fn new_note(&mut self, memo: impl Into<String>, tags: impl Into<String>) -> NoteId {
        let note = Note::new(&self.ids, memo, tags);
        let note_id = note.id();
        self.notes.push(note);

        debug!(
            "event=note_create module=notebook note_id={} note_count={}",
            note_id,
            self.notes.len()
        );
        note_id
    }

    /// Returns, in creation order, every note whose memo or tags contain `filter`.
    ///
    /// Case-insensitive searches fold text with the configured
    /// [`CaseFolding`](crate::CaseFolding). No match yields an empty list.
    pub fn search(&self, filter: &str, case_sensitive: bool) -> Vec<&Note> {
        let hits: Vec<&Note> = self
            .notes
            .iter()
            .filter(|note| note.matches_with(filter, case_sensitive, self.config.case_folding))
            .collect();

        debug!(
            "event=note_search module=notebook case_sensitive={} filter_len={} hits={}",
            case_sensitive,
            filter.chars().count(),
            hits.len()
        );
        hits
    }

    /// Looks up a note by id, scanning every note.
    pub fn find_note(&self, note_id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == note_id)
    }

    /// Looks up a note by id for in-place modification.
    pub fn find_note_mut(&mut self, note_id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id() == note_id)
    }

    /// Like [`Notebook::find_note`], but reports a missing note as an error.
    ///
    /// # Errors
    ///
    /// Returns [`NotebookError::NoteNotFound`] if no note has this id.
    ///
    /// # Examples
    ///
    /// ```
    /// use notebook::{IdSequence, NoteId, Notebook};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let mut notebook = Notebook::new(IdSequence::new());
    /// let id = notebook.new_note("call mum", "family");
    ///
    /// let note = notebook.require_note(id)?;
    /// assert_eq!(note.tags(), "family");
    /// assert!(notebook.require_note(NoteId::new(42)).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn require_note(&self, note_id: NoteId) -> Result<&Note, NotebookError> {
        self.find_note(note_id).ok_or(NotebookError::NoteNotFound(note_id))
    }

    /// Replaces the memo of the note with `note_id`.
    ///
    /// Returns the modified note, or `None` (changing nothing) if no note
    /// has this id.
    pub fn modify_memo(&mut self, note_id: NoteId, memo: impl Into<String>) -> Option<&Note> {
        self.modify(note_id, "memo", |note| note.set_memo(memo))
    }

    /// Replaces the tags of the note with `note_id`.
    ///
    /// Returns the modified note, or `None` (changing nothing) if no note
    /// has this id.
    ///
    /// # Examples
    ///
    /// ```
    /// use notebook::{IdSequence, NoteId, Notebook};
    ///
    /// let mut notebook = Notebook::new(IdSequence::new());
    /// let id = notebook.new_note("hello world", "a b");
    ///
    /// let note = notebook.modify_tags(id, "new tag").expect("note exists");
    /// assert_eq!(note.tags(), "new tag");
    ///
    /// assert!(notebook.modify_tags(NoteId::new(99), "x").is_none());
    /// ```
    pub fn modify_tags(&mut self, note_id: NoteId, tags: impl Into<String>) -> Option<&Note> {
        self.modify(note_id, "tags", |note| note.set_tags(tags))
    }

    fn modify(
        &mut self,
        note_id: NoteId,
        field: &str,
        apply: impl FnOnce(&mut Note),
    ) -> Option<&Note> {
        let Some(note) = self.find_note_mut(note_id) else {
            debug!(
                "event=note_modify module=notebook field={} note_id={} status=not_found",
                field, note_id
            );
            return None;
        };

        apply(&mut *note);
        debug!(
            "event=note_modify module=notebook field={} note_id={} status=ok",
            field, note_id
        );
        Some(&*note)
    }
}

impl<'a> IntoIterator for &'a Notebook {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

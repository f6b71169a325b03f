use serde::Serialize;
use time::{Date, OffsetDateTime};

use super::{CaseFolding, IdSequence, NoteId};

/// A memo with free-form tags.
///
/// `tags` is kept as the raw space-separated text the caller supplied; it is
/// matched as text, never split into individual tags. Identity and creation
/// date are fixed at construction; memo and tags may change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: NoteId,
    memo: String,
    tags: String,
    creation_date: Date,
}

impl Note {
    /// Creates a note dated today, drawing its id from `ids`.
    ///
    /// "Today" is the local calendar date when the local UTC offset can be
    /// read, and the UTC date otherwise. On Unix the offset usually cannot be
    /// read once the process runs more than one thread, so multi-threaded
    /// hosts normally get the UTC date. Use [`NoteBuilder::creation_date`]
    /// to pin a specific day.
    ///
    /// # Examples
    ///
    /// ```
    /// use notebook::{IdSequence, Note};
    ///
    /// let ids = IdSequence::new();
    /// let note = Note::new(&ids, "buy milk", "errands home");
    ///
    /// assert_eq!(note.id().get(), 1);
    /// assert!(note.matches("home", true));
    /// ```
    pub fn new(ids: &IdSequence, memo: impl Into<String>, tags: impl Into<String>) -> Self {
        NoteBuilder::new(memo).tags(tags).build(ids)
    }

    /// Returns the note's identifier.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the memo text.
    pub fn memo(&self) -> &str {
        &self.memo
    }

    /// Returns the raw tag text.
    pub fn tags(&self) -> &str {
        &self.tags
    }

    /// Returns the date the note was created.
    pub fn creation_date(&self) -> Date {
        self.creation_date
    }

    /// Replaces the memo text.
    pub fn set_memo(&mut self, memo: impl Into<String>) {
        self.memo = memo.into();
    }

    /// Replaces the tag text.
    pub fn set_tags(&mut self, tags: impl Into<String>) {
        self.tags = tags.into();
    }

    /// Returns true if `filter` is a substring of the memo or of the tags.
    ///
    /// With `case_sensitive == false` both sides are lowercased using the
    /// default [`CaseFolding`]. An empty filter matches every note.
    pub fn matches(&self, filter: &str, case_sensitive: bool) -> bool {
        self.matches_with(filter, case_sensitive, CaseFolding::default())
    }

    /// Like [`Note::matches`], with an explicit folding for the
    /// case-insensitive comparison. `folding` is ignored when matching
    /// case-sensitively.
    pub fn matches_with(&self, filter: &str, case_sensitive: bool, folding: CaseFolding) -> bool {
        if case_sensitive {
            return self.memo.contains(filter) || self.tags.contains(filter);
        }

        let filter = folding.fold(filter);
        folding.fold(&self.memo).contains(filter.as_ref())
            || folding.fold(&self.tags).contains(filter.as_ref())
    }
}

/// Builder for constructing `Note` instances with optional fields.
///
/// The id is never set by hand: `build` always takes the next one from the
/// sequence.
///
/// # Examples
///
/// ```
/// use notebook::{IdSequence, NoteBuilder};
/// use time::macros::date;
///
/// let ids = IdSequence::new();
/// let note = NoteBuilder::new("My first note")
///     .tags("draft")
///     .creation_date(date!(2024 - 03 - 01))
///     .build(&ids);
///
/// assert_eq!(note.memo(), "My first note");
/// assert_eq!(note.creation_date(), date!(2024 - 03 - 01));
/// ```
#[derive(Debug)]
pub struct NoteBuilder {
    memo: String,
    tags: Option<String>,
    creation_date: Option<Date>,
}

impl NoteBuilder {
    /// Creates a builder for a note with the given memo.
    pub fn new(memo: impl Into<String>) -> Self {
        Self {
            memo: memo.into(),
            tags: None,
            creation_date: None,
        }
    }

    /// Sets the tag text.
    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// Sets the creation date.
    pub fn creation_date(mut self, creation_date: Date) -> Self {
        self.creation_date = Some(creation_date);
        self
    }

    /// Builds the `Note`, taking its id from `ids`.
    ///
    /// Tags default to empty and the creation date to today.
    pub fn build(self, ids: &IdSequence) -> Note {
        Note {
            id: ids.next_id(),
            memo: self.memo,
            tags: self.tags.unwrap_or_default(),
            creation_date: self.creation_date.unwrap_or_else(today),
        }
    }
}

/// Today's date in the local timezone, or in UTC when the local offset
/// cannot be determined.
fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

mod case_folding;
mod ids;
mod note;

pub use case_folding::CaseFolding;
pub use ids::{IdSequence, NoteId};
pub use note::{Note, NoteBuilder};

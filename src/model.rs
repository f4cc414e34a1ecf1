//! Data model for a parsed book.
//!
//! Everything here is build-once: the pipeline constructs these values in a
//! single pass and never mutates them afterwards, except for the one
//! documented edit the dialogue annotator makes to a verse's text.
use serde::{Deserialize, Serialize};

/// A single verse as it appears in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub number: u32,
    pub text: String,
}

/// An ordered run of verses with contiguous, increasing numbers.
pub type Paragraph = Vec<Verse>;

/// One chapter's paragraphs, tagged with the chapter number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub chapter: u32,
    pub paragraphs: Vec<Paragraph>,
}

/// The final artifact: book metadata plus chapters in ascending order.
///
/// Field order doubles as the serialized key order, so the emitted data file
/// is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDocument {
    pub id: String,
    pub name: String,
    pub chapters: Vec<Chapter>,
}

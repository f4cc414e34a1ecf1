//! Dialogue continuation across paragraph boundaries.
//!
//! Paragraph boundaries can split one continuous quoted speech. The annotator
//! walks every paragraph of the book in order and reopens the quotation mark
//! on paragraphs that continue dialogue left open by the previous one. The
//! carried flag lives in an annotator value owned by the caller, never in
//! process-wide state.
use crate::model::{Chapter, Verse};

const OPENING_QUOTE: char = '\u{201C}';
const CLOSING_QUOTE: char = '\u{201D}';
const STRAIGHT_QUOTE: char = '"';

/// Whether `text` ends while a quotation remains open.
///
/// Typographic marks win when present: open iff openers outnumber closers.
/// Otherwise an odd number of straight quotes counts as open. Counts only,
/// not order or nesting; that insensitivity is deliberate.
pub fn is_in_open_dialogue(text: &str) -> bool {
    let opening = text.matches(OPENING_QUOTE).count();
    let closing = text.matches(CLOSING_QUOTE).count();
    if opening > 0 || closing > 0 {
        return opening > closing;
    }
    text.matches(STRAIGHT_QUOTE).count() % 2 == 1
}

/// Carries the open-dialogue flag across paragraphs and chapter boundaries.
///
/// Instantiate once per book and walk the chapters in order; the flag starts
/// closed and is recomputed from each paragraph's last verse.
#[derive(Debug, Default)]
pub struct ContinuationAnnotator {
    in_dialogue: bool,
}

impl ContinuationAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotate every paragraph of every chapter, in document order.
    pub fn annotate_book(&mut self, chapters: &mut [Chapter]) {
        for chapter in chapters {
            for paragraph in &mut chapter.paragraphs {
                self.annotate_paragraph(paragraph);
            }
        }
    }

    fn annotate_paragraph(&mut self, paragraph: &mut [Verse]) {
        // Empty paragraphs are dropped by the grouper; skip defensively.
        let Some(first) = paragraph.first_mut() else {
            return;
        };
        if self.in_dialogue && !first.text.starts_with([STRAIGHT_QUOTE, OPENING_QUOTE]) {
            first.text.insert(0, OPENING_QUOTE);
        }
        if let Some(last) = paragraph.last() {
            self.in_dialogue = is_in_open_dialogue(&last.text);
        }
    }
}

//! Paragraph grouping.
//!
//! The grouper consumes boundary specs already normalized by the config
//! layer; its own contract is a pure function of the verse mapping and the
//! table, so re-running it on the same inputs yields identical output.
use crate::books::BoundarySpec;
use crate::model::{Chapter, Paragraph, Verse};
use crate::parse::VerseMap;
use std::collections::BTreeMap;

/// Partition every chapter's verses into paragraphs.
///
/// Chapters come out in ascending chapter-number order. A chapter missing
/// from the table falls back to one single-verse paragraph per verse.
pub fn group_book(verses: &VerseMap, table: Option<&BTreeMap<u32, BoundarySpec>>) -> Vec<Chapter> {
    verses
        .iter()
        .map(|(&chapter, chapter_verses)| {
            let paragraphs = match table.and_then(|table| table.get(&chapter)) {
                Some(spec) => {
                    let max_verse = chapter_verses.keys().next_back().copied().unwrap_or(0);
                    grouped_paragraphs(chapter_verses, &spec.verse_groups(max_verse))
                }
                None => fallback_paragraphs(chapter_verses),
            };
            Chapter {
                chapter,
                paragraphs,
            }
        })
        .collect()
}

/// Build one paragraph per verse group, omitting absent verse numbers.
///
/// A group whose verse numbers are all absent from the chapter produces no
/// paragraph at all.
fn grouped_paragraphs(verses: &BTreeMap<u32, String>, groups: &[Vec<u32>]) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    for group in groups {
        let paragraph: Paragraph = group
            .iter()
            .filter_map(|number| {
                verses.get(number).map(|text| Verse {
                    number: *number,
                    text: text.clone(),
                })
            })
            .collect();
        if !paragraph.is_empty() {
            paragraphs.push(paragraph);
        }
    }
    paragraphs
}

fn fallback_paragraphs(verses: &BTreeMap<u32, String>) -> Vec<Paragraph> {
    verses
        .iter()
        .map(|(&number, text)| {
            vec![Verse {
                number,
                text: text.clone(),
            }]
        })
        .collect()
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;

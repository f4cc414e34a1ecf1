//! Per-book authored configuration.
//!
//! Book extents, display names, and paragraph boundary tables are hand
//! authored, not derived from the source text. The boundary tables are kept
//! in the compact paragraph-start shorthand here and normalized to explicit
//! verse-number groups before the grouper ever sees them, so the grouper has
//! a single code path.
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeMap;

/// Authored description of one book's extent and paragraph structure.
#[derive(Debug)]
pub struct BookConfig {
    pub id: &'static str,
    pub full_name: &'static str,
    pub start_pattern: &'static str,
    pub end_pattern: &'static str,
    /// Expected chapter count; informational only, never enforced.
    pub chapters: u32,
    paragraph_starts: Option<&'static [(u32, &'static [u32])]>,
}

/// One chapter's paragraph boundaries, in either authored shape.
///
/// Historical versions of the tables used explicit verse groups; the current
/// ones use the start-verse shorthand. Both normalize through
/// [`BoundarySpec::verse_groups`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundarySpec {
    /// First verse of each paragraph; runs are filled in up to the next start.
    Starts(Vec<u32>),
    /// Explicit verse-number membership per paragraph.
    Groups(Vec<Vec<u32>>),
}

impl BoundarySpec {
    /// Normalize to explicit verse-number groups.
    ///
    /// `Starts([1, 4, 7])` against max verse 10 expands to
    /// `[[1, 2, 3], [4, 5, 6], [7, 8, 9, 10]]`: each start runs up to the
    /// next start exclusive, and the final start runs through `max_verse`.
    pub fn verse_groups(&self, max_verse: u32) -> Vec<Vec<u32>> {
        match self {
            BoundarySpec::Starts(starts) => starts
                .iter()
                .enumerate()
                .map(|(i, &start)| {
                    let end = starts.get(i + 1).copied().unwrap_or(max_verse + 1);
                    (start..end).collect()
                })
                .collect(),
            BoundarySpec::Groups(groups) => groups.clone(),
        }
    }
}

impl BookConfig {
    pub fn has_paragraph_table(&self) -> bool {
        self.paragraph_starts.is_some()
    }

    /// Boundary specs keyed by chapter, normalized to the owned shape.
    ///
    /// `None` when the book has no authored table at all; the caller falls
    /// back to one paragraph per verse.
    pub fn boundary_table(&self) -> Option<BTreeMap<u32, BoundarySpec>> {
        let starts = self.paragraph_starts?;
        Some(
            starts
                .iter()
                .map(|&(chapter, starts)| (chapter, BoundarySpec::Starts(starts.to_vec())))
                .collect(),
        )
    }

    pub fn start_regex(&self) -> Result<Regex> {
        Regex::new(self.start_pattern)
            .with_context(|| format!("compile start pattern for {}", self.id))
    }

    pub fn end_regex(&self) -> Result<Regex> {
        Regex::new(self.end_pattern).with_context(|| format!("compile end pattern for {}", self.id))
    }
}

/// Look up a book by its lowercase id.
pub fn book_config(id: &str) -> Option<&'static BookConfig> {
    BOOKS.iter().find(|book| book.id == id)
}

/// Book ids accepted on the command line, in authored order.
pub fn available_books() -> Vec<&'static str> {
    BOOKS.iter().map(|book| book.id).collect()
}

static BOOKS: &[BookConfig] = &[
    BookConfig {
        id: "mark",
        full_name: "Gospel of Mark",
        start_pattern: r"^Mark 1:1",
        end_pattern: r"^(Luke|Acts) 1:1",
        chapters: 16,
        paragraph_starts: Some(MARK_PARAGRAPH_STARTS),
    },
    BookConfig {
        id: "luke",
        full_name: "Gospel of Luke",
        start_pattern: r"^Luke 1:1",
        end_pattern: r"^John 1:1",
        chapters: 24,
        paragraph_starts: Some(LUKE_PARAGRAPH_STARTS),
    },
    BookConfig {
        id: "romans",
        full_name: "Romans",
        start_pattern: r"^Romans 1:1",
        end_pattern: r"^1 Corinthians 1:1",
        chapters: 16,
        paragraph_starts: Some(ROMANS_PARAGRAPH_STARTS),
    },
];

// Each list holds only the first verse of each paragraph; consecutive verses
// are filled in up to the next paragraph start.
static MARK_PARAGRAPH_STARTS: &[(u32, &[u32])] = &[
    (1, &[1, 4, 7, 9, 12, 14, 16, 19, 21, 29, 32, 35, 40]),
    (2, &[1, 6, 13, 15, 18, 21, 23]),
    (3, &[1, 7, 13, 20, 22, 28, 31]),
    (4, &[1, 3, 10, 13, 21, 26, 30, 33, 35]),
    (5, &[1, 6, 11, 14, 18, 21, 25, 30, 35]),
    (6, &[1, 7, 14, 17, 21, 30, 33, 35, 45, 53]),
    (7, &[1, 6, 14, 17, 24, 27, 31]),
    (8, &[1, 11, 14, 22, 27, 31, 34]),
    (9, &[1, 2, 9, 11, 14, 30, 33, 38, 41, 43]),
    (10, &[1, 13, 17, 23, 28, 32, 35, 41, 46]),
    (11, &[1, 8, 12, 15, 20, 27]),
    (12, &[1, 13, 18, 28, 35, 38, 41]),
    (13, &[1, 3, 9, 14, 21, 24, 28, 32]),
    (14, &[1, 3, 10, 12, 17, 22, 27, 32, 43, 53, 66]),
    (15, &[1, 6, 16, 21, 28, 33, 40, 42]),
    (16, &[1, 9, 12, 14, 19]),
];

static LUKE_PARAGRAPH_STARTS: &[(u32, &[u32])] = &[
    (
        1,
        &[1, 5, 8, 11, 14, 18, 21, 24, 26, 29, 34, 39, 42, 46, 56, 57, 59, 65, 67, 80],
    ),
    (
        2,
        &[1, 4, 6, 8, 10, 13, 15, 17, 21, 22, 25, 28, 33, 36, 39, 41, 44, 46, 49, 51],
    ),
    (3, &[1, 3, 7, 10, 12, 14, 15, 18, 19, 21, 23]),
    (4, &[1, 3, 5, 9, 14, 16, 22, 25, 28, 31, 33, 38, 40, 42]),
    (5, &[1, 4, 8, 12, 17, 21, 27, 29, 33, 36]),
    (6, &[1, 6, 12, 17, 20, 24, 27, 31, 37, 39, 41, 43, 46]),
    (7, &[1, 6, 11, 16, 18, 21, 24, 29, 31, 36, 39, 44, 48]),
    (8, &[1, 4, 9, 11, 16, 19, 22, 26, 30, 34, 38, 40, 43, 49, 51]),
    (9, &[1, 7, 10, 12, 18, 23, 28, 37, 43, 46, 49, 51, 54, 57, 59, 61]),
    (10, &[1, 8, 13, 17, 21, 23, 25, 29, 38]),
    (11, &[1, 5, 9, 14, 17, 24, 27, 29, 33, 37, 42, 45, 47, 52]),
    (12, &[1, 4, 6, 8, 11, 13, 16, 22, 27, 32, 35, 39, 41, 47, 49, 54, 58]),
    (13, &[1, 6, 10, 14, 18, 20, 22, 25, 28, 31, 34]),
    (14, &[1, 7, 12, 15, 25, 28, 31, 34]),
    (15, &[1, 3, 8, 11, 17, 21, 25, 29]),
    (16, &[1, 9, 14, 16, 19, 22, 27]),
    (17, &[1, 3, 5, 7, 11, 15, 20, 22, 26, 31, 34]),
    (18, &[1, 9, 15, 18, 24, 28, 31, 35, 40]),
    (19, &[1, 5, 8, 11, 16, 20, 27, 28, 36, 39, 41, 45, 47]),
    (20, &[1, 9, 17, 20, 27, 34, 39, 41, 45]),
    (21, &[1, 5, 7, 12, 20, 25, 29, 32, 34, 37]),
    (
        22,
        &[1, 3, 7, 14, 17, 19, 21, 24, 28, 31, 35, 39, 41, 47, 49, 52, 54, 59, 63, 66],
    ),
    (
        23,
        &[1, 6, 8, 13, 17, 26, 27, 32, 34, 35, 38, 39, 44, 46, 47, 50, 54],
    ),
    (24, &[1, 4, 8, 13, 18, 22, 25, 28, 30, 33, 36, 44, 50, 52]),
];

static ROMANS_PARAGRAPH_STARTS: &[(u32, &[u32])] = &[
    (1, &[1, 8, 13, 16, 18, 24, 28]),
    (2, &[1, 6, 12, 17, 25]),
    (3, &[1, 5, 9, 19, 21, 27]),
    (4, &[1, 4, 9, 13, 16, 23]),
    (5, &[1, 6, 12]),
    (6, &[1, 6, 12, 15, 20]),
    (7, &[1, 4, 7, 13, 21]),
    (8, &[1, 5, 12, 18, 28, 31]),
    (9, &[1, 6, 14, 19, 25, 30]),
    (10, &[1, 5, 11, 14]),
    (11, &[1, 7, 13, 17, 25, 33]),
    (12, &[1, 3, 9, 14]),
    (13, &[1, 8, 11]),
    (14, &[1, 5, 10, 13, 19]),
    (15, &[1, 5, 14, 22, 30]),
    (16, &[1, 3, 8, 17, 21, 25]),
];

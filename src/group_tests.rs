use super::group_book;
use crate::books::BoundarySpec;
use crate::model::Verse;
use crate::parse::VerseMap;
use std::collections::BTreeMap;

fn chapter_verses(entries: &[(u32, &str)]) -> BTreeMap<u32, String> {
    entries
        .iter()
        .map(|&(number, text)| (number, text.to_string()))
        .collect()
}

fn verse_map(chapter: u32, entries: &[(u32, &str)]) -> VerseMap {
    let mut map = VerseMap::new();
    map.insert(chapter, chapter_verses(entries));
    map
}

fn numbers(paragraph: &[Verse]) -> Vec<u32> {
    paragraph.iter().map(|verse| verse.number).collect()
}

#[test]
fn start_table_splits_chapter_into_ranges() {
    let verses = verse_map(
        1,
        &[
            (1, "one"),
            (2, "two"),
            (3, "three"),
            (4, "four"),
            (5, "five"),
        ],
    );
    let table = BTreeMap::from([(1, BoundarySpec::Starts(vec![1, 3]))]);

    let chapters = group_book(&verses, Some(&table));
    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].chapter, 1);
    assert_eq!(chapters[0].paragraphs.len(), 2);
    assert_eq!(numbers(&chapters[0].paragraphs[0]), vec![1, 2]);
    assert_eq!(numbers(&chapters[0].paragraphs[1]), vec![3, 4, 5]);
}

#[test]
fn chapter_absent_from_table_gets_one_verse_per_paragraph() {
    let verses = verse_map(2, &[(1, "one"), (2, "two"), (3, "three")]);
    let table = BTreeMap::from([(1, BoundarySpec::Starts(vec![1]))]);

    let chapters = group_book(&verses, Some(&table));
    assert_eq!(chapters[0].paragraphs.len(), 3);
    for (paragraph, expected) in chapters[0].paragraphs.iter().zip(1u32..) {
        assert_eq!(numbers(paragraph), vec![expected]);
    }
}

#[test]
fn missing_table_falls_back_for_every_chapter() {
    let mut verses = verse_map(1, &[(1, "one")]);
    verses.insert(2, chapter_verses(&[(1, "one"), (2, "two")]));

    let chapters = group_book(&verses, None);
    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[0].paragraphs.len(), 1);
    assert_eq!(chapters[1].paragraphs.len(), 2);
}

#[test]
fn absent_verse_numbers_are_omitted_without_error() {
    // Verse 2 is missing from the source; the paragraph simply skips it.
    let verses = verse_map(1, &[(1, "one"), (3, "three"), (4, "four")]);
    let table = BTreeMap::from([(1, BoundarySpec::Groups(vec![vec![1, 2, 3], vec![4]]))]);

    let chapters = group_book(&verses, Some(&table));
    assert_eq!(numbers(&chapters[0].paragraphs[0]), vec![1, 3]);
    assert_eq!(numbers(&chapters[0].paragraphs[1]), vec![4]);
}

#[test]
fn fully_absent_groups_are_dropped() {
    let verses = verse_map(1, &[(1, "one")]);
    let table = BTreeMap::from([(1, BoundarySpec::Groups(vec![vec![1], vec![7, 8]]))]);

    let chapters = group_book(&verses, Some(&table));
    assert_eq!(chapters[0].paragraphs.len(), 1);
    assert_eq!(numbers(&chapters[0].paragraphs[0]), vec![1]);
}

#[test]
fn chapters_emit_in_ascending_order() {
    let mut verses = VerseMap::new();
    verses.insert(3, chapter_verses(&[(1, "c3")]));
    verses.insert(1, chapter_verses(&[(1, "c1")]));
    verses.insert(2, chapter_verses(&[(1, "c2")]));

    let chapters = group_book(&verses, None);
    let order: Vec<u32> = chapters.iter().map(|chapter| chapter.chapter).collect();
    assert_eq!(order, vec![1, 2, 3]);
}

#[test]
fn grouping_is_idempotent() {
    let verses = verse_map(1, &[(1, "one"), (2, "two"), (3, "three")]);
    let table = BTreeMap::from([(1, BoundarySpec::Starts(vec![1, 3]))]);

    let first = group_book(&verses, Some(&table));
    let second = group_book(&verses, Some(&table));
    assert_eq!(first, second);
}

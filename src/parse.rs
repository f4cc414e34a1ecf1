//! Verse line parsing.
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeMap;

/// Verse text keyed by chapter number, then verse number.
///
/// `BTreeMap` keeps chapters and verses in ascending order for free, which
/// the grouper and serializer both rely on.
pub type VerseMap = BTreeMap<u32, BTreeMap<u32, String>>;

/// Parse extracted book lines into a chapter/verse mapping.
///
/// Lines must look like `Mark 1:1 The beginning of the gospel...`; anything
/// else (footnotes, section headers) is silently skipped. If the source
/// repeats a chapter:verse pair, the later line overwrites the earlier one.
pub fn parse_verses(lines: &[String]) -> Result<VerseMap> {
    let verse_line =
        Regex::new(r"^[A-Za-z\s]+(\d+):(\d+)\s+(.+)$").context("compile verse line pattern")?;
    let mut chapters: VerseMap = BTreeMap::new();
    let mut skipped = 0usize;

    for line in lines {
        let Some(caps) = verse_line.captures(line) else {
            skipped += 1;
            continue;
        };
        let chapter: u32 = caps[1].parse().context("parse chapter number")?;
        let verse: u32 = caps[2].parse().context("parse verse number")?;
        chapters
            .entry(chapter)
            .or_default()
            .insert(verse, caps[3].to_string());
    }

    if skipped > 0 {
        tracing::debug!(skipped, "skipped lines that do not match the verse shape");
    }
    Ok(chapters)
}

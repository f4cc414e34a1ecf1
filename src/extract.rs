//! Book extraction from the full source text.
use regex::Regex;

/// Collect the non-blank lines belonging to one book.
///
/// A single top-to-bottom pass: lines are kept from the first `start` match
/// (inclusive) to the first subsequent `end` match (exclusive). If `start`
/// never matches the result is empty; if `end` never matches after a start
/// match, everything through end of input is kept. Patterns are evaluated
/// against each line independently.
pub fn extract_book(text: &str, start: &Regex, end: &Regex) -> Vec<String> {
    let mut book_lines = Vec::new();
    let mut in_book = false;

    for line in text.lines() {
        if !in_book {
            if !start.is_match(line) {
                continue;
            }
            in_book = true;
        } else if end.is_match(line) {
            break;
        }
        if !line.trim().is_empty() {
            book_lines.push(line.to_string());
        }
    }

    book_lines
}

//! Data file serialization.
//!
//! The output is a small JS data file: one header comment followed by a
//! single `const bookData = ...;` assignment holding the book document as
//! pretty-printed JSON. Writes are staged to a temp file in the destination
//! directory and published by rename, so a failed run never leaves a
//! half-written file behind.
use crate::model::BookDocument;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const HEADER: &str = "// Berean Standard Bible\n";

/// Render the complete file contents for a book document.
///
/// serde_json emits non-ASCII characters literally and follows struct field
/// order, so the output is stable for a given document.
pub fn render_book_data(doc: &BookDocument) -> Result<String> {
    let json = serde_json::to_string_pretty(doc).context("serialize book document")?;
    Ok(format!("{HEADER}const bookData = {json};\n"))
}

/// Write the data file atomically.
pub fn write_book_data(path: &Path, doc: &BookDocument) -> Result<()> {
    let rendered = render_book_data(doc)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("stage output in {}", dir.display()))?;
    staged
        .write_all(rendered.as_bytes())
        .with_context(|| format!("write {}", path.display()))?;
    staged
        .persist(path)
        .with_context(|| format!("publish {}", path.display()))?;
    Ok(())
}

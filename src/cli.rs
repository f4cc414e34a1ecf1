//! CLI argument parsing.
//!
//! The CLI is intentionally thin: one positional book id plus overrides for
//! the source URL and output path. The book id stays optional here so the
//! missing/unknown-book path can print its own usage message and exit 1
//! before any network or file I/O happens.
use crate::fetch::DEFAULT_SOURCE_URL;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bsbgen",
    version,
    about = "Generate paragraph-structured data files from the Berean Standard Bible"
)]
pub struct Args {
    /// Book to process (e.g. mark, luke, romans)
    pub book: Option<String>,

    /// Source text URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_SOURCE_URL)]
    pub url: String,

    /// Output path (defaults to data-<book>.js in the current directory)
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

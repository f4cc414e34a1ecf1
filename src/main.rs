use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod books;
mod cli;
mod dialogue;
mod extract;
mod fetch;
mod group;
mod model;
mod output;
mod parse;

use books::BookConfig;
use cli::Args;
use dialogue::ContinuationAnnotator;
use model::BookDocument;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let Some(book_arg) = args.book.as_deref() else {
        print_usage();
        std::process::exit(1);
    };
    let book_id = book_arg.to_ascii_lowercase();
    let Some(config) = books::book_config(&book_id) else {
        eprintln!("Unknown book: {book_id}");
        print_usage();
        std::process::exit(1);
    };

    run(&book_id, config, &args)
}

fn run(book_id: &str, config: &BookConfig, args: &Args) -> Result<()> {
    if !config.has_paragraph_table() {
        println!("Warning: no paragraph table defined for {}", config.full_name);
        println!("Using default structure (one paragraph per verse)");
        println!();
    }

    println!("Downloading source text...");
    let text = fetch::fetch_source(&args.url)?;

    let lines = extract::extract_book(&text, &config.start_regex()?, &config.end_regex()?);
    println!("Extracted {} lines from {}", lines.len(), config.full_name);

    let verses = parse::parse_verses(&lines)?;
    println!("Parsed {} chapters", verses.len());
    if verses.len() != config.chapters as usize {
        tracing::warn!(
            expected = config.chapters,
            parsed = verses.len(),
            "parsed chapter count differs from the expected count"
        );
    }

    let table = config.boundary_table();
    let mut chapters = group::group_book(&verses, table.as_ref());
    let mut annotator = ContinuationAnnotator::new();
    annotator.annotate_book(&mut chapters);

    let doc = BookDocument {
        id: book_id.to_string(),
        name: config.full_name.to_string(),
        chapters,
    };

    let out_path = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("data-{book_id}.js")));
    output::write_book_data(&out_path, &doc)?;
    println!("Generated {}", out_path.display());

    let total_paragraphs: usize = doc.chapters.iter().map(|ch| ch.paragraphs.len()).sum();
    let total_verses: usize = doc
        .chapters
        .iter()
        .flat_map(|ch| ch.paragraphs.iter())
        .map(Vec::len)
        .sum();
    println!("Total verses: {total_verses}");
    println!("Total paragraphs: {total_paragraphs}");

    Ok(())
}

fn print_usage() {
    eprintln!("Usage: bsbgen <book>");
    eprintln!("Available books: {}", books::available_books().join(", "));
}

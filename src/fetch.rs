//! Source text retrieval.
//!
//! One blocking GET for the whole translation file. This is a manually
//! invoked batch tool, so a transport failure or non-success status simply
//! fails the run; there is no retry or caching layer.
use anyhow::{Context, Result};

pub const DEFAULT_SOURCE_URL: &str = "https://bereanbible.com/bsb.txt";

// The full BSB text is ~5.5 MB; ureq's default body limit sits close to that.
const BODY_LIMIT_BYTES: u64 = 64 * 1024 * 1024;

/// Download the full source text as one UTF-8 string.
pub fn fetch_source(url: &str) -> Result<String> {
    let mut response = ureq::get(url)
        .call()
        .with_context(|| format!("retrieve source text from {url}"))?;
    let body = response
        .body_mut()
        .with_config()
        .limit(BODY_LIMIT_BYTES)
        .read_to_string()
        .with_context(|| format!("read source text body from {url}"))?;
    tracing::debug!(bytes = body.len(), "downloaded source text");
    Ok(body)
}

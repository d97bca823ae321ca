//! Tolerant XML extraction for Brink SOAP payloads
//!
//! The upstream SOAP responses are not always schema-valid, so the
//! parsers work on case-insensitive, attribute-tolerant tag extraction
//! instead of a strict XML parser. Patterns are compiled once per tag
//! name and cached for the life of the process.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use shared::error::{AppError, AppResult};

static SCALAR_PATTERNS: Lazy<DashMap<String, Regex>> = Lazy::new(DashMap::new);
static BLOCK_PATTERNS: Lazy<DashMap<String, Regex>> = Lazy::new(DashMap::new);

fn cached_pattern(cache: &DashMap<String, Regex>, tag: &str, template: &str) -> Regex {
    if let Some(re) = cache.get(tag) {
        return re.clone();
    }
    let escaped = regex::escape(tag);
    let re = Regex::new(&template.replace("{tag}", &escaped)).expect("tag pattern is valid");
    cache.insert(tag.to_string(), re.clone());
    re
}

fn scalar_pattern(tag: &str) -> Regex {
    // Opening tag may carry attributes; inner text may span lines.
    cached_pattern(
        &SCALAR_PATTERNS,
        tag,
        r"(?is)<{tag}(?:\s[^>]*)?>(.*?)</{tag}\s*>",
    )
}

fn block_pattern(tag: &str) -> Regex {
    cached_pattern(
        &BLOCK_PATTERNS,
        tag,
        r"(?is)<{tag}(?:\s[^>]*)?>.*?</{tag}\s*>",
    )
}

fn ensure_document(xml: &str) -> AppResult<()> {
    if xml.trim().is_empty() {
        return Err(AppError::pos_malformed("empty XML document"));
    }
    Ok(())
}

/// Extract the trimmed inner text of the first `<tag ...>value</tag>`
/// occurrence. Zero matches is `None`, not an error; only an empty
/// input document errors.
pub fn extract_scalar(xml: &str, tag: &str) -> AppResult<Option<String>> {
    ensure_document(xml)?;
    Ok(scalar_pattern(tag)
        .captures(xml)
        .map(|c| c[1].trim().to_string()))
}

/// Extract every non-overlapping outer-XML block of a repeated element
/// (e.g. each `<Shift>...</Shift>`), in document order.
pub fn extract_repeated(xml: &str, tag: &str) -> AppResult<Vec<String>> {
    ensure_document(xml)?;
    Ok(block_pattern(tag)
        .find_iter(xml)
        .map(|m| m.as_str().to_string())
        .collect())
}

/// Scalar as f64; missing or unparseable values read as absent
pub fn scalar_f64(xml: &str, tag: &str) -> Option<f64> {
    extract_scalar(xml, tag)
        .ok()
        .flatten()
        .and_then(|v| v.parse().ok())
}

/// Scalar as i64; missing or unparseable values read as absent
pub fn scalar_i64(xml: &str, tag: &str) -> Option<i64> {
    extract_scalar(xml, tag)
        .ok()
        .flatten()
        .and_then(|v| v.parse().ok())
}

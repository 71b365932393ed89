//! Deduplication and rendering of decoded tags.
//!
//! Two output modes exist, and each one has its own idea of when two tags
//! are the same:
//!
//! | Mode         | Equality key                             |
//! | ------------ | ---------------------------------------- |
//! | `Structured` | name, from, to, direction, color         |
//! | `Summary`    | name, from, to, direction                |
//!
//! The first occurrence wins and order is preserved.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::hash::Hash;
use std::path::PathBuf;
use serde::Serialize;

use super::types::error::Result;
use super::types::models::{Direction, Rgb, TagEntry};

/// Placeholder shown in summary mode for a tag with an empty name.
pub const UNNAMED_TAG: &str = "(unnamed)";
/// Placeholder line shown in summary mode for a document without tags.
pub const NO_TAGS_LINE: &str = "- (no tags found)";

/// How reports are rendered, and therefore how tags are deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Machine-readable JSON; color is part of a tag's identity.
    Structured,
    /// Human-readable lines; color is ignored.
    #[default]
    Summary,
}

fn dedup_by<K, F>(tags: Vec<TagEntry>, key: F) -> Vec<TagEntry>
where
    K: Hash + Eq,
    F: Fn(&TagEntry) -> K,
{
    let mut seen = HashSet::new();
    tags.into_iter().filter(|tag| seen.insert(key(tag))).collect()
}

/// Removes later duplicates under the structured-mode key.
pub fn dedup_structured(tags: Vec<TagEntry>) -> Vec<TagEntry> {
    dedup_by(tags, |t| -> (String, u16, u16, Direction, Rgb) {
        (t.name.clone(), t.from, t.to, t.direction, t.color)
    })
}

/// Removes later duplicates under the summary-mode key (color ignored).
pub fn dedup_summary(tags: Vec<TagEntry>) -> Vec<TagEntry> {
    dedup_by(tags, |t| -> (String, u16, u16, Direction) {
        (t.name.clone(), t.from, t.to, t.direction)
    })
}

/// The deduplicated tags of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagReport {
    #[serde(rename = "file")]
    pub path: PathBuf,
    pub tags: Vec<TagEntry>,
}

impl TagReport {
    /// Builds a report, deduplicating `tags` with the key of `mode`.
    pub fn new(path: impl Into<PathBuf>, tags: Vec<TagEntry>, mode: ReportMode) -> Self {
        let tags = match mode {
            ReportMode::Structured => dedup_structured(tags),
            ReportMode::Summary => dedup_summary(tags),
        };
        Self {
            path: path.into(),
            tags,
        }
    }

    fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Formats one tag as a summary line: `- name: from-to (direction)`.
pub fn summary_line(tag: &TagEntry) -> String {
    let name = if tag.name.is_empty() { UNNAMED_TAG } else { tag.name.as_str() };
    format!("- {}: {}-{} ({})", name, tag.from, tag.to, tag.direction)
}

/// Renders reports as line-oriented text, one section per document.
pub fn render_summary(reports: &[TagReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(out, "## {}", report.display_name());
        if report.tags.is_empty() {
            let _ = writeln!(out, "{}", NO_TAGS_LINE);
        }
        for tag in &report.tags {
            let _ = writeln!(out, "{}", summary_line(tag));
        }
        out.push('\n');
    }
    out
}

/// Renders reports as a JSON array of `{file, tags}` objects.
///
/// The output is pure ASCII: every non-ASCII character in a name or path is
/// written as a `\uXXXX` escape (a surrogate pair above U+FFFF).
///
/// # Errors
/// Fails only if a path is not valid UTF-8.
pub fn render_json(reports: &[TagReport], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(reports)?
    } else {
        serde_json::to_string(reports)?
    };
    Ok(escape_non_ascii(&json))
}

// serde_json leaves non-ASCII unescaped, and outside of strings its output is
// ASCII already, so escaping every such char keeps the document valid.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units).iter() {
            let _ = write!(out, "\\u{:04x}", unit);
        }
    }
    out
}

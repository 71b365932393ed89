//! Resolving command-line inputs into a list of documents.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, warn};

use super::types::error::{AsepriteError, Result};

/// Settings for turning inputs into document paths.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Extensions (without the dot) collected from directories. Matched
    /// case-insensitively.
    pub extensions: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["aseprite".to_string()],
        }
    }
}

impl ScanOptions {
    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
    }
}

/// Expands `inputs` into a sorted, deduplicated list of document paths.
///
/// - A directory contributes its direct children with a matching extension.
/// - An existing file is taken as-is, whatever its extension.
/// - Anything else is skipped with a warning.
///
/// Paths are deduplicated by their canonical form and sorted by display string.
///
/// # Errors
/// [`AsepriteError::NoDocuments`] if nothing matched, or an I/O error if a
/// directory could not be listed.
pub fn discover<P: AsRef<Path>>(inputs: &[P], options: &ScanOptions) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if input.is_dir() {
            found.extend(scan_directory(input, options)?);
        } else if input.exists() {
            found.push(input.to_path_buf());
        } else {
            warn!("Skipping missing input: {}", input.display());
        }
    }

    let mut unique: BTreeMap<PathBuf, PathBuf> = BTreeMap::new();
    for path in found {
        let key = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
        unique.insert(key, path);
    }

    let mut paths: Vec<PathBuf> = unique.into_values().collect();
    paths.sort_by(|a, b| a.display().to_string().cmp(&b.display().to_string()));
    debug!("Discovered {} documents", paths.len());

    if paths.is_empty() {
        return Err(AsepriteError::NoDocuments {
            extensions: options.extensions.join("/."),
        });
    }
    Ok(paths)
}

fn scan_directory(dir: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && options.matches(&path) {
            paths.push(path);
        }
    }
    Ok(paths)
}

//! Embedding of other files into templates.
//!
//! A file can be embedded whole, or only the region between two marker lines:
//!
//! ```text
//! // boilerplate-snippet: setup
//! let answer = 42;
//! // boilerplate-snippet: setup
//! ```
//!
//! The marker may sit inside any comment syntax; the word following
//! `boilerplate-snippet:` names the region.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use regex::Regex;

use crate::constants::SNIPPET_MARKER;
use crate::error::SnippetError;

/// Resolves snippet paths relative to the directory of one template.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetResolver {
    base_dir: PathBuf,
}

impl SnippetResolver {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self { base_dir: base_dir.into() }
    }

    /// Resolver rooted at the directory containing `template_path`.
    pub fn for_template<P: AsRef<Path>>(template_path: P) -> Self {
        let base_dir = template_path.as_ref().parent().map(Path::to_path_buf).unwrap_or_default();
        Self::new(base_dir)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Reads `path` (relative to the base directory) whole or by snippet name.
    pub fn resolve(&self, path: &str, marker: Option<&str>) -> Result<String, SnippetError> {
        read_snippet(self.base_dir.join(path), marker)
    }
}

/// Returns the content of a file, or only the named snippet inside it.
///
/// # Errors
/// * `SnippetError::FileNotFound` if the file cannot be read
/// * `SnippetError::MarkerNotFound` if the opening or closing marker is missing
pub fn read_snippet<P: AsRef<Path>>(path: P, marker: Option<&str>) -> Result<String, SnippetError> {
    let path = path.as_ref();
    debug!("Reading snippet file {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| SnippetError::FileNotFound {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    match marker {
        None => Ok(content),
        Some(marker) => extract_snippet(&content, marker).ok_or_else(|| {
            SnippetError::MarkerNotFound {
                path: path.display().to_string(),
                marker: marker.to_string(),
            }
        }),
    }
}

/// Text strictly between the first pair of lines marking `marker`.
pub fn extract_snippet(content: &str, marker: &str) -> Option<String> {
    // A blank name would match every marker line.
    if marker.trim().is_empty() {
        return None;
    }

    let pattern = format!(r"{}:\s*{}(\s|$)", regex::escape(SNIPPET_MARKER), regex::escape(marker));
    let marker_line = Regex::new(&pattern).ok()?;

    let mut lines = content.split_inclusive('\n');
    lines.by_ref().find(|line| marker_line.is_match(line))?;

    let mut snippet = String::new();
    for line in lines {
        if marker_line.is_match(line) {
            // The line break before the closing marker belongs to the marker line.
            let trimmed = snippet.strip_suffix('\n').unwrap_or(&snippet);
            let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
            return Some(trimmed.to_string());
        }
        snippet.push_str(line);
    }

    None
}

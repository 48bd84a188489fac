//! Content reading, preview, and text analysis.

use std::collections::HashSet;
use std::path::Path;

use chardetng::EncodingDetector;
use serde::{Deserialize, Serialize};

use dirscope_core::InspectError;

use crate::catalog::DirectoryCatalog;

/// Extensions eligible for content preview.
const PREVIEW_EXTENSIONS: &[&str] = &[
    ".txt", ".py", ".md", ".json", ".env", ".toml", ".yaml", ".yml", ".rs", ".js", ".sh", ".cfg",
    ".ini",
];

/// Word counts for a text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextReport {
    /// Whitespace-separated token count.
    pub total_words: usize,
    /// Distinct token count. Tokens differing only by trailing punctuation
    /// or case count as distinct; splitting is deliberately naive.
    pub unique_words: usize,
}

/// Lower-cased dotted extension of a path, empty when there is none.
fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Read a file as text, detecting its encoding statistically.
///
/// Binary content and malformed sequences surface as
/// [`InspectError::DecodeFailure`].
fn decode_text(path: &Path) -> Result<String, InspectError> {
    let bytes = std::fs::read(path).map_err(|e| InspectError::io(path, e))?;

    if !content_inspector::inspect(&bytes).is_text() {
        return Err(InspectError::decode(path, "binary content"));
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&bytes, true);
    let encoding = detector.guess(None, true);

    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(InspectError::decode(
            path,
            format!("malformed {} sequence", encoding.name()),
        ));
    }
    Ok(text.into_owned())
}

impl DirectoryCatalog {
    /// Read a file's text content, whole or the first `num_lines` lines.
    ///
    /// The encoding is guessed per-file before decoding; a decode or I/O
    /// failure comes back as a structured error rather than a panic, so
    /// interactive callers can print it directly.
    pub fn read(&self, name: &str, num_lines: Option<usize>) -> Result<String, InspectError> {
        let path = self.resolve(name);
        let content = decode_text(&path)?;
        match num_lines {
            None => Ok(content),
            Some(n) => Ok(content.lines().take(n).collect::<Vec<_>>().join("\n")),
        }
    }

    /// Preview the first `num_lines` lines of a supported text-like file.
    ///
    /// Unsupported extensions are refused with
    /// [`InspectError::UnsupportedType`] instead of attempting a binary
    /// dump.
    pub fn preview(&self, name: &str, num_lines: usize) -> Result<Vec<String>, InspectError> {
        let path = self.resolve(name);
        if !path.exists() {
            return Err(InspectError::NotFound { path });
        }
        let extension = extension_of(&path);
        if !PREVIEW_EXTENSIONS.contains(&extension.as_str()) {
            return Err(InspectError::UnsupportedType { path, extension });
        }

        let content = decode_text(&path)?;
        Ok(content
            .lines()
            .take(num_lines)
            .map(|l| l.trim().to_string())
            .collect())
    }

    /// Word-count analysis for `.txt` files.
    pub fn analyze_text(&self, name: &str) -> Result<TextReport, InspectError> {
        let path = self.resolve(name);
        let extension = extension_of(&path);
        if extension != ".txt" {
            return Err(InspectError::UnsupportedType { path, extension });
        }

        let content = decode_text(&path)?;
        let total_words = content.split_whitespace().count();
        let unique_words = content.split_whitespace().collect::<HashSet<_>>().len();
        Ok(TextReport {
            total_words,
            unique_words,
        })
    }
}

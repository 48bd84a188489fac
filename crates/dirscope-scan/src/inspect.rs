//! Per-file metadata extraction and content-type sniffing.

use std::io::Read;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use dirscope_core::InspectError;

/// Number of bytes to inspect when magic numbers give no answer.
const SNIFF_BYTES: usize = 1024;

/// Fallback label when a file cannot be classified at all.
const UNKNOWN_TYPE: &str = "unknown";

/// Content-type classifier, injected into the tree builder and the
/// directory catalog at construction time so tests can substitute doubles.
pub trait TypeSniffer: Send + Sync {
    /// Return a MIME-like type label for the file's content.
    ///
    /// Must not fail: unclassifiable or unreadable files get a fallback
    /// label instead.
    fn sniff(&self, path: &Path) -> String;
}

/// Magic-number based sniffer.
///
/// Tries `infer`'s magic-number table first; files without a recognizable
/// signature (most plain text) fall back to a text-vs-binary check on the
/// first KiB.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagicSniffer;

impl MagicSniffer {
    /// Create a new sniffer.
    pub fn new() -> Self {
        Self
    }
}

impl TypeSniffer for MagicSniffer {
    fn sniff(&self, path: &Path) -> String {
        match infer::get_from_path(path) {
            Ok(Some(kind)) => kind.mime_type().to_string(),
            Ok(None) => sniff_text(path),
            Err(_) => UNKNOWN_TYPE.to_string(),
        }
    }
}

/// Classify a signature-less file as text or binary by content.
fn sniff_text(path: &Path) -> String {
    let mut buffer = [0u8; SNIFF_BYTES];
    let Ok(mut file) = std::fs::File::open(path) else {
        return UNKNOWN_TYPE.to_string();
    };
    let Ok(read) = file.read(&mut buffer) else {
        return UNKNOWN_TYPE.to_string();
    };

    if content_inspector::inspect(&buffer[..read]).is_text() {
        "text/plain".to_string()
    } else {
        "application/octet-stream".to_string()
    }
}

/// Size and timestamps read from the filesystem at call time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FileMeta {
    /// Exact byte length.
    pub size: u64,
    /// Last modification time.
    pub modified: SystemTime,
    /// Creation time, when the platform records one.
    pub created: Option<SystemTime>,
}

/// Stateless metadata reader shared by the tree builder and the catalog.
pub struct MetadataInspector;

impl MetadataInspector {
    /// Read size and timestamps for a single file.
    ///
    /// A file missing at call time (concurrent deletion) surfaces as
    /// [`InspectError::NotFound`]; callers decide whether to skip or abort.
    pub fn inspect(path: &Path) -> Result<FileMeta, InspectError> {
        let metadata = std::fs::metadata(path).map_err(|e| InspectError::io(path, e))?;
        Ok(FileMeta {
            size: metadata.len(),
            modified: metadata.modified().map_err(|e| InspectError::io(path, e))?,
            created: metadata.created().ok(),
        })
    }

    /// Read size and timestamps plus a content-sniffed type label.
    ///
    /// The label comes from the injected classifier, never from the
    /// extension; sniffing cannot fail, so the result only errors when the
    /// stat itself does.
    pub fn inspect_typed(
        path: &Path,
        sniffer: &dyn TypeSniffer,
    ) -> Result<(FileMeta, String), InspectError> {
        let meta = Self::inspect(path)?;
        Ok((meta, sniffer.sniff(path)))
    }
}

/// Format a timestamp in the fixed display format used by tree rendering.
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_inspect_reads_size() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("file.txt");
        fs::write(&path, "hello").unwrap();

        let meta = MetadataInspector::inspect(&path).unwrap();
        assert_eq!(meta.size, 5);
    }

    struct FixedSniffer(&'static str);

    impl TypeSniffer for FixedSniffer {
        fn sniff(&self, _path: &Path) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_inspect_typed_pairs_meta_with_label() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("file.txt");
        fs::write(&path, "hello").unwrap();

        let (meta, label) =
            MetadataInspector::inspect_typed(&path, &FixedSniffer("text/x-fixed")).unwrap();
        assert_eq!(meta.size, 5);
        assert_eq!(label, "text/x-fixed");
    }

    #[test]
    fn test_inspect_typed_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = MetadataInspector::inspect_typed(&temp.path().join("gone"), &FixedSniffer("x"))
            .unwrap_err();
        assert!(matches!(err, InspectError::NotFound { .. }));
    }

    #[test]
    fn test_inspect_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = MetadataInspector::inspect(&temp.path().join("gone.txt")).unwrap_err();
        assert!(matches!(err, InspectError::NotFound { .. }));
    }

    #[test]
    fn test_sniffer_magic_number() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("img.png");
        fs::write(&path, b"\x89PNG\r\n\x1a\n0000").unwrap();

        assert_eq!(MagicSniffer::new().sniff(&path), "image/png");
    }

    #[test]
    fn test_sniffer_plain_text_fallback() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        fs::write(&path, "just some words").unwrap();

        assert_eq!(MagicSniffer::new().sniff(&path), "text/plain");
    }

    #[test]
    fn test_sniffer_unreadable_file() {
        let temp = TempDir::new().unwrap();
        let label = MagicSniffer::new().sniff(&temp.path().join("missing"));
        assert_eq!(label, "unknown");
    }

    #[test]
    fn test_format_timestamp_shape() {
        let formatted = format_timestamp(SystemTime::now());
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
        assert_eq!(&formatted[13..14], ":");
    }
}

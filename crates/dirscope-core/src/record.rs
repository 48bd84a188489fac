//! Per-file descriptor produced by the directory catalog.

use std::path::PathBuf;
use std::time::SystemTime;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Metadata for one file in the catalog's working directory.
///
/// Records are produced on demand and never cached: two sequential queries
/// re-read the filesystem, so results always reflect live state at call
/// time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// File name (not full path).
    pub name: CompactString,

    /// Absolute path.
    pub path: PathBuf,

    /// Size in bytes.
    pub size: u64,

    /// Content-sniffed type label, independent of the extension.
    pub file_type: String,

    /// Creation time (platform-dependent).
    pub created: Option<SystemTime>,

    /// Last modification time.
    pub modified: SystemTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_roundtrip() {
        let record = FileRecord {
            name: "notes.txt".into(),
            path: PathBuf::from("/work/notes.txt"),
            size: 42,
            file_type: "text/plain".to_string(),
            created: None,
            modified: SystemTime::now(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: FileRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, record.name);
        assert_eq!(back.size, 42);
        assert_eq!(back.file_type, "text/plain");
    }
}

//! Extension include/exclude filtering.

use serde::{Deserialize, Serialize};

/// Include/exclude extension filter applied to bare file names.
///
/// Matching is a literal suffix comparison on the lower-cased name, so an
/// entry of `.tar.gz` only matches names ending in that exact multi-part
/// suffix, while `.gz` alone also matches `.tar.gz` files. Overlapping
/// suffixes are the caller's responsibility; they are not deduplicated
/// here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileFilter {
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
}

impl FileFilter {
    /// Create a filter from optional include/exclude extension lists.
    ///
    /// Extensions are normalized to lowercase. A `None` or empty include
    /// list means every extension passes inclusion.
    pub fn new(include: Option<Vec<String>>, exclude: Option<Vec<String>>) -> Self {
        let lower = |exts: Option<Vec<String>>| {
            exts.map(|e| e.into_iter().map(|s| s.to_lowercase()).collect())
        };
        Self {
            include: lower(include),
            exclude: lower(exclude),
        }
    }

    /// Filter that accepts every file.
    pub fn accept_all() -> Self {
        Self::default()
    }

    /// Decide whether a bare file name passes the filter.
    ///
    /// Inclusion is checked first; exclusion is applied after and rejects
    /// regardless of the inclusion result. Pure string predicate, no I/O.
    pub fn is_valid_file(&self, name: &str) -> bool {
        let name = name.to_lowercase();

        if let Some(include) = &self.include {
            if !include.is_empty() && !include.iter().any(|ext| name.ends_with(ext.as_str())) {
                return false;
            }
        }
        if let Some(exclude) = &self.exclude {
            if exclude.iter().any(|ext| name.ends_with(ext.as_str())) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts(list: &[&str]) -> Option<Vec<String>> {
        Some(list.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_accept_all() {
        let filter = FileFilter::accept_all();
        assert!(filter.is_valid_file("anything.bin"));
        assert!(filter.is_valid_file("no_extension"));
    }

    #[test]
    fn test_include_only() {
        let filter = FileFilter::new(exts(&[".py"]), None);
        assert!(filter.is_valid_file("main.py"));
        assert!(!filter.is_valid_file("report.txt"));
    }

    #[test]
    fn test_exclude_is_case_insensitive() {
        let filter = FileFilter::new(None, exts(&[".log"]));
        assert!(!filter.is_valid_file("report.LOG"));
        assert!(filter.is_valid_file("report.txt"));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let filter = FileFilter::new(exts(&[".txt", ".log"]), exts(&[".log"]));
        assert!(filter.is_valid_file("notes.txt"));
        assert!(!filter.is_valid_file("debug.log"));
    }

    #[test]
    fn test_multi_part_suffix() {
        let filter = FileFilter::new(exts(&[".tar.gz"]), None);
        assert!(filter.is_valid_file("backup.tar.gz"));
        assert!(!filter.is_valid_file("backup.gz"));

        // A bare .gz entry also matches .tar.gz files by suffix overlap.
        let filter = FileFilter::new(exts(&[".gz"]), None);
        assert!(filter.is_valid_file("backup.tar.gz"));
    }

    #[test]
    fn test_empty_include_passes_everything() {
        let filter = FileFilter::new(Some(Vec::new()), None);
        assert!(filter.is_valid_file("anything.rs"));
    }
}

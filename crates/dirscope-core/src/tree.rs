//! Scanned project tree container.

use std::path::PathBuf;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::error::ScanWarning;
use crate::node::TreeNode;

/// Complete scanned tree with scan metadata.
///
/// Built once per scan, immutable afterwards, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectTree {
    /// Root folder node.
    pub root: TreeNode,

    /// Canonicalized root path that was scanned.
    pub root_path: PathBuf,

    /// When this scan was performed.
    pub scanned_at: SystemTime,

    /// Non-fatal warnings collected during the scan.
    pub warnings: Vec<ScanWarning>,
}

impl ProjectTree {
    /// Create a new project tree.
    pub fn new(root: TreeNode, root_path: PathBuf, warnings: Vec<ScanWarning>) -> Self {
        Self {
            root,
            root_path,
            scanned_at: SystemTime::now(),
            warnings,
        }
    }

    /// Total files in the tree.
    pub fn total_files(&self) -> u64 {
        self.root.file_count()
    }

    /// Total folders in the tree, excluding the root itself.
    pub fn total_folders(&self) -> u64 {
        self.root.folder_count()
    }

    /// Check if there were any warnings during scanning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree() {
        let tree = ProjectTree::new(TreeNode::new_folder(), PathBuf::from("/x"), Vec::new());
        assert_eq!(tree.total_files(), 0);
        assert_eq!(tree.total_folders(), 0);
        assert!(!tree.has_warnings());
    }

    #[test]
    fn test_warning_flag() {
        let warnings = vec![crate::ScanWarning::vanished("/x/gone")];
        let tree = ProjectTree::new(TreeNode::new_folder(), PathBuf::from("/x"), warnings);
        assert!(tree.has_warnings());
    }
}

//! Tree node types for the recursive project structure.

use std::time::SystemTime;

use compact_str::CompactString;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One filesystem entry discovered during a walk.
///
/// A node is exactly one of file or folder. File nodes carry the size and
/// modification time captured at scan time and never have children. Folder
/// nodes carry only their children, in directory-listing order; a folder's
/// contribution to the total size is the recursive sum over its subtree,
/// computed on demand rather than stored inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeNode {
    /// Regular file.
    File {
        /// Size in bytes at scan time.
        size: u64,
        /// Last modification time at scan time.
        modified: SystemTime,
    },
    /// Directory.
    Folder {
        /// Child entries, keyed by name, in directory-listing order.
        children: IndexMap<CompactString, TreeNode>,
    },
}

impl TreeNode {
    /// Create a new file node.
    pub fn new_file(size: u64, modified: SystemTime) -> Self {
        Self::File { size, modified }
    }

    /// Create a new empty folder node.
    pub fn new_folder() -> Self {
        Self::Folder {
            children: IndexMap::new(),
        }
    }

    /// Check if this node is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// Check if this node is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    /// Get the children map for folder nodes.
    pub fn children(&self) -> Option<&IndexMap<CompactString, TreeNode>> {
        match self {
            Self::Folder { children } => Some(children),
            Self::File { .. } => None,
        }
    }

    /// Insert a child into a folder node.
    ///
    /// Has no effect on file nodes; the enum shape makes a file with
    /// children unrepresentable.
    pub fn insert_child(&mut self, name: impl Into<CompactString>, child: TreeNode) {
        if let Self::Folder { children } = self {
            children.insert(name.into(), child);
        }
    }

    /// Get the number of direct children (0 for files).
    pub fn child_count(&self) -> usize {
        self.children().map_or(0, IndexMap::len)
    }

    /// Count files in this subtree (1 for a file node).
    pub fn file_count(&self) -> u64 {
        match self {
            Self::File { .. } => 1,
            Self::Folder { children } => children.values().map(TreeNode::file_count).sum(),
        }
    }

    /// Count folders in this subtree, excluding this node itself.
    pub fn folder_count(&self) -> u64 {
        match self {
            Self::File { .. } => 0,
            Self::Folder { children } => children
                .values()
                .map(|c| if c.is_folder() { 1 + c.folder_count() } else { 0 })
                .sum(),
        }
    }

    /// Sum of the sizes recorded at scan time over this subtree.
    ///
    /// This trusts the values captured during the walk; aggregation that
    /// re-reads live sizes from disk lives in the scan engine.
    pub fn recorded_size(&self) -> u64 {
        match self {
            Self::File { size, .. } => *size,
            Self::Folder { children } => children.values().map(TreeNode::recorded_size).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> TreeNode {
        let mut sub = TreeNode::new_folder();
        sub.insert_child("b.txt", TreeNode::new_file(7, SystemTime::now()));

        let mut root = TreeNode::new_folder();
        root.insert_child("a.txt", TreeNode::new_file(5, SystemTime::now()));
        root.insert_child("sub", sub);
        root
    }

    #[test]
    fn test_file_node() {
        let node = TreeNode::new_file(1024, SystemTime::now());
        assert!(node.is_file());
        assert!(!node.is_folder());
        assert!(node.children().is_none());
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn test_insert_child_ignored_on_files() {
        let mut node = TreeNode::new_file(1, SystemTime::now());
        node.insert_child("x", TreeNode::new_folder());
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn test_counts() {
        let root = sample_tree();
        assert_eq!(root.file_count(), 2);
        assert_eq!(root.folder_count(), 1);
        assert_eq!(root.child_count(), 2);
        assert_eq!(root.recorded_size(), 12);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut root = TreeNode::new_folder();
        root.insert_child("z", TreeNode::new_file(0, SystemTime::now()));
        root.insert_child("a", TreeNode::new_file(0, SystemTime::now()));

        let names: Vec<_> = root.children().unwrap().keys().cloned().collect();
        assert_eq!(names, vec!["z", "a"]);
    }
}

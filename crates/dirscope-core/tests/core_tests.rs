use std::path::PathBuf;
use std::time::SystemTime;

use dirscope_core::{FileFilter, InspectError, ProjectTree, ScanConfig, TreeNode};

fn exts(list: &[&str]) -> Option<Vec<String>> {
    Some(list.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_filter_spec_cases() {
    // Case-insensitive exclude match.
    let filter = FileFilter::new(None, exts(&[".log"]));
    assert!(!filter.is_valid_file("report.LOG"));

    // Fails inclusion.
    let filter = FileFilter::new(exts(&[".py"]), None);
    assert!(!filter.is_valid_file("report.txt"));
}

#[test]
fn test_node_shape_invariants() {
    let file = TreeNode::new_file(10, SystemTime::now());
    assert!(file.is_file());
    assert!(file.children().is_none());

    let mut folder = TreeNode::new_folder();
    folder.insert_child("f", file);
    assert!(folder.is_folder());
    assert_eq!(folder.child_count(), 1);
    assert_eq!(folder.recorded_size(), 10);
}

#[test]
fn test_config_filter_wiring() {
    let config = ScanConfig::builder()
        .root("/tmp/project")
        .include_extensions(exts(&[".rs", ".toml"]))
        .exclude_extensions(exts(&[".lock"]))
        .build()
        .unwrap();

    let filter = config.filter();
    assert!(filter.is_valid_file("lib.rs"));
    assert!(filter.is_valid_file("Cargo.toml"));
    assert!(!filter.is_valid_file("Cargo.lock"));
    assert!(!filter.is_valid_file("README.md"));
}

#[test]
fn test_tree_counts() {
    let mut sub = TreeNode::new_folder();
    sub.insert_child("b.txt", TreeNode::new_file(7, SystemTime::now()));

    let mut root = TreeNode::new_folder();
    root.insert_child("a.txt", TreeNode::new_file(5, SystemTime::now()));
    root.insert_child("sub", sub);

    let tree = ProjectTree::new(root, PathBuf::from("/project"), Vec::new());
    assert_eq!(tree.total_files(), 2);
    assert_eq!(tree.total_folders(), 1);
}

#[test]
fn test_error_display() {
    let err = InspectError::CycleDetected {
        path: PathBuf::from("/loop"),
    };
    assert!(err.to_string().contains("cycle"));

    let err = InspectError::UnsupportedType {
        path: PathBuf::from("/x/img.png"),
        extension: ".png".to_string(),
    };
    assert!(err.to_string().contains(".png"));
}

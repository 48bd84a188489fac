//! Indented text rendering of a scanned tree.

use std::path::Path;

use humansize::{DECIMAL, format_size};

use dirscope_core::{ProjectTree, TreeNode};

use crate::builder::total_size;
use crate::inspect::format_timestamp;

/// Indent unit per nesting level.
const INDENT: &str = "  ";

/// Renders a [`ProjectTree`] as indented lines.
///
/// Pure formatting: never mutates the tree or the filesystem (the trailing
/// summary line re-stats file sizes, which is read-only).
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeRenderer {
    show_content: bool,
}

impl TreeRenderer {
    /// Create a renderer; `show_content` includes full file contents.
    pub fn new(show_content: bool) -> Self {
        Self { show_content }
    }

    /// Render the tree depth-first, pre-order, one indent unit per level,
    /// with a trailing aggregate-size summary.
    pub fn render(&self, tree: &ProjectTree) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_node(&tree.root, &tree.root_path, 0, &mut lines);
        lines.push(String::new());
        lines.push(format!(
            "Total Project Size: {}",
            format_size(total_size(tree), DECIMAL)
        ));
        lines
    }

    fn render_node(&self, node: &TreeNode, path: &Path, depth: usize, lines: &mut Vec<String>) {
        let Some(children) = node.children() else {
            return;
        };

        for (name, child) in children {
            let child_path = path.join(name.as_str());
            match child {
                TreeNode::Folder { .. } => {
                    lines.push(format!("{}- {} (Folder)", INDENT.repeat(depth), name));
                    self.render_node(child, &child_path, depth + 1, lines);
                }
                TreeNode::File { size, modified } => {
                    let detail = INDENT.repeat(depth + 1);
                    lines.push(format!("{}- {} (File)", INDENT.repeat(depth), name));
                    lines.push(format!("{detail}Size: {}", format_size(*size, DECIMAL)));
                    lines.push(format!(
                        "{detail}Last Modified: {}",
                        format_timestamp(*modified)
                    ));
                    if self.show_content {
                        self.render_content(name, &child_path, depth + 1, lines);
                    }
                }
            }
        }
    }

    fn render_content(&self, name: &str, path: &Path, depth: usize, lines: &mut Vec<String>) {
        let indent = INDENT.repeat(depth);
        match std::fs::read_to_string(path) {
            Ok(content) => {
                lines.push(format!("{indent}Content:"));
                for line in content.lines() {
                    lines.push(line.to_string());
                }
            }
            Err(err) => {
                lines.push(format!("{indent}Error reading content of {name}: {err}"));
            }
        }
    }
}

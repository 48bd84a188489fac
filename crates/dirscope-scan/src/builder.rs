//! Recursive tree construction.

use std::path::Path;

use compact_str::CompactString;
use tracing::{debug, warn};

use dirscope_core::{
    FileFilter, InspectError, ProjectTree, ScanConfig, ScanWarning, TreeNode,
};

use crate::inspect::{MagicSniffer, MetadataInspector, TypeSniffer};
use crate::walk::VisitedSet;

/// Builds a [`ProjectTree`] by recursively walking a root directory.
///
/// Directories are always included regardless of filters; files pass
/// through the configured extension filter, and rejected files are omitted
/// entirely. A symlink cycle under the root aborts the build with
/// [`InspectError::CycleDetected`].
pub struct TreeBuilder {
    config: ScanConfig,
    filter: FileFilter,
    sniffer: Box<dyn TypeSniffer>,
}

impl TreeBuilder {
    /// Create a builder with the default magic-number sniffer.
    pub fn new(config: ScanConfig) -> Self {
        Self::with_sniffer(config, Box::new(MagicSniffer::new()))
    }

    /// Create a builder with an explicit content-type classifier.
    ///
    /// Tree nodes carry no type labels; the classifier is held so callers
    /// driving both this builder and a flat catalog can inject a single
    /// instance and reach it through [`TreeBuilder::sniffer`].
    pub fn with_sniffer(config: ScanConfig, sniffer: Box<dyn TypeSniffer>) -> Self {
        let filter = config.filter();
        Self {
            config,
            filter,
            sniffer,
        }
    }

    /// The classifier this builder was constructed with.
    pub fn sniffer(&self) -> &dyn TypeSniffer {
        self.sniffer.as_ref()
    }

    /// Perform the scan.
    pub fn build(&self) -> Result<ProjectTree, InspectError> {
        let root_path = self
            .config
            .root
            .canonicalize()
            .map_err(|e| InspectError::io(&self.config.root, e))?;

        if !root_path.is_dir() {
            return Err(InspectError::NotADirectory { path: root_path });
        }

        let mut visited = VisitedSet::new();
        let mut warnings = Vec::new();
        let root = self.build_node(&root_path, &mut visited, &mut warnings)?;

        debug!(
            root = %root_path.display(),
            files = root.file_count(),
            folders = root.folder_count(),
            warnings = warnings.len(),
            "scan complete"
        );

        Ok(ProjectTree::new(root, root_path, warnings))
    }

    fn build_node(
        &self,
        dir: &Path,
        visited: &mut VisitedSet,
        warnings: &mut Vec<ScanWarning>,
    ) -> Result<TreeNode, InspectError> {
        visited.enter(dir)?;

        let entries = std::fs::read_dir(dir).map_err(|e| InspectError::io(dir, e))?;
        let mut node = TreeNode::new_folder();

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    warn!(dir = %dir.display(), error = %err, "unreadable directory entry");
                    warnings.push(ScanWarning::read_error(dir, &err));
                    continue;
                }
            };

            let name = CompactString::new(entry.file_name().to_string_lossy());
            let path = entry.path();

            if path.is_dir() {
                let child = self.build_node(&path, visited, warnings)?;
                node.insert_child(name, child);
            } else if path.is_file() {
                if !self.filter.is_valid_file(&name) {
                    continue;
                }
                match MetadataInspector::inspect(&path) {
                    Ok(meta) => {
                        node.insert_child(name, TreeNode::new_file(meta.size, meta.modified));
                    }
                    Err(InspectError::NotFound { .. }) => {
                        warn!(path = %path.display(), "file vanished during scan");
                        warnings.push(ScanWarning::vanished(&path));
                    }
                    Err(err) => {
                        warn!(path = %path.display(), error = %err, "metadata read failed");
                        warnings.push(ScanWarning::new(
                            &path,
                            err.to_string(),
                            dirscope_core::WarningKind::MetadataError,
                        ));
                    }
                }
            }
        }

        Ok(node)
    }
}

/// Aggregate size over every file node in the tree.
///
/// Sizes are re-read from disk at aggregation time rather than trusting the
/// values captured during the walk; a file removed between build and
/// aggregation contributes zero instead of failing the whole sum.
pub fn total_size(tree: &ProjectTree) -> u64 {
    node_size(&tree.root, &tree.root_path)
}

fn node_size(node: &TreeNode, path: &Path) -> u64 {
    match node {
        TreeNode::File { .. } => std::fs::metadata(path).map(|m| m.len()).unwrap_or(0),
        TreeNode::Folder { children } => children
            .iter()
            .map(|(name, child)| node_size(child, &path.join(name.as_str())))
            .sum(),
    }
}

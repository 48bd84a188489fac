//! Shared cycle-safe directory traversal.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use tracing::debug;

use dirscope_core::InspectError;

/// Tracks canonicalized real paths of directories already entered.
///
/// A symlink that points back into an ancestor directory would otherwise
/// recurse forever; revisiting a real path fails fast with
/// [`InspectError::CycleDetected`].
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<PathBuf>,
}

impl VisitedSet {
    /// Create an empty visited set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record entry into a directory, resolving symlinks.
    pub fn enter(&mut self, dir: &Path) -> Result<(), InspectError> {
        let real = dir.canonicalize().map_err(|e| InspectError::io(dir, e))?;
        if !self.seen.insert(real) {
            return Err(InspectError::CycleDetected {
                path: dir.to_path_buf(),
            });
        }
        Ok(())
    }
}

/// Direct contents of one directory visited during a walk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirListing {
    /// The directory itself.
    pub path: PathBuf,
    /// Names of direct file children, in directory-listing order.
    pub files: Vec<CompactString>,
    /// Names of direct subdirectories, in directory-listing order.
    pub folders: Vec<CompactString>,
}

/// Depth-first, unfiltered enumeration of every directory under `root`.
///
/// Entries that vanish between listing and stat are silently skipped;
/// a symlink cycle aborts the whole walk.
pub fn walk(root: &Path) -> Result<Vec<DirListing>, InspectError> {
    let mut visited = VisitedSet::new();
    let mut listings = Vec::new();
    walk_into(root, &mut visited, &mut listings)?;
    Ok(listings)
}

fn walk_into(
    dir: &Path,
    visited: &mut VisitedSet,
    listings: &mut Vec<DirListing>,
) -> Result<(), InspectError> {
    visited.enter(dir)?;
    debug!(dir = %dir.display(), "walking directory");

    let entries = std::fs::read_dir(dir).map_err(|e| InspectError::io(dir, e))?;

    let mut files = Vec::new();
    let mut folders = Vec::new();
    let mut subdirs = Vec::new();

    for entry in entries {
        let Ok(entry) = entry else { continue };
        let name = CompactString::new(entry.file_name().to_string_lossy());
        let path = entry.path();

        if path.is_dir() {
            folders.push(name);
            subdirs.push(path);
        } else if path.is_file() {
            files.push(name);
        }
    }

    listings.push(DirListing {
        path: dir.to_path_buf(),
        files,
        folders,
    });

    for subdir in subdirs {
        walk_into(&subdir, visited, listings)?;
    }

    Ok(())
}

//! Catalog construction, listing, search, and statistics.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::SystemTime;

use compact_str::CompactString;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::EnumString;
use tracing::warn;

use dirscope_core::{FileRecord, InspectError};
use dirscope_scan::{MagicSniffer, MetadataInspector, TypeSniffer, walk};

/// Sort keys accepted by [`DirectoryCatalog::list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SortKey {
    Name,
    Size,
    Modified,
    Type,
}

/// Metadata for the catalog's working directory itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirInfo {
    /// Directory name.
    pub name: CompactString,
    /// Absolute path.
    pub path: PathBuf,
    /// Creation time (platform-dependent).
    pub created: Option<SystemTime>,
    /// Last modification time.
    pub modified: SystemTime,
}

/// Flat view of one working directory.
///
/// Holds no cache: every query re-reads the filesystem, so results reflect
/// live state at call time, and two sequential calls may differ if the
/// directory mutates between them.
pub struct DirectoryCatalog {
    dir: PathBuf,
    sniffer: Box<dyn TypeSniffer>,
}

impl DirectoryCatalog {
    /// Open a catalog over `dir` with the default magic-number sniffer.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, InspectError> {
        Self::with_sniffer(dir, Box::new(MagicSniffer::new()))
    }

    /// Open a catalog with an explicit content-type sniffer.
    pub fn with_sniffer(
        dir: impl Into<PathBuf>,
        sniffer: Box<dyn TypeSniffer>,
    ) -> Result<Self, InspectError> {
        let dir = dir.into();
        let dir = dir.canonicalize().map_err(|e| InspectError::io(&dir, e))?;
        if !dir.is_dir() {
            return Err(InspectError::NotADirectory { path: dir });
        }
        Ok(Self { dir, sniffer })
    }

    /// The current working directory of this catalog.
    pub fn current_dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve an entry name against the working directory.
    pub(crate) fn resolve(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub(crate) fn set_dir(&mut self, dir: PathBuf) {
        self.dir = dir;
    }

    /// Metadata for the working directory itself.
    pub fn current_dir_info(&self) -> Result<DirInfo, InspectError> {
        let metadata = std::fs::metadata(&self.dir).map_err(|e| InspectError::io(&self.dir, e))?;
        Ok(DirInfo {
            name: CompactString::new(
                self.dir
                    .file_name()
                    .map(|n| n.to_string_lossy())
                    .unwrap_or_default(),
            ),
            path: self.dir.clone(),
            created: metadata.created().ok(),
            modified: metadata.modified().map_err(|e| InspectError::io(&self.dir, e))?,
        })
    }

    /// Build a fresh record for one file via the shared inspector.
    fn record(&self, name: CompactString, path: PathBuf) -> Result<FileRecord, InspectError> {
        let (meta, file_type) = MetadataInspector::inspect_typed(&path, self.sniffer.as_ref())?;
        Ok(FileRecord {
            name,
            file_type,
            path,
            size: meta.size,
            created: meta.created,
            modified: meta.modified,
        })
    }

    /// Records for every direct file child, in directory-listing order.
    ///
    /// Entries that vanish or fail to stat mid-enumeration are skipped with
    /// a log line rather than aborting the survey.
    fn records(&self) -> Result<Vec<FileRecord>, InspectError> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| InspectError::io(&self.dir, e))?;
        let mut records = Vec::new();

        for entry in entries {
            let Ok(entry) = entry else { continue };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let name = CompactString::new(entry.file_name().to_string_lossy());
            match self.record(name, path) {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                }
            }
        }
        Ok(records)
    }

    /// List direct file children, optionally filtered by sniffed-type
    /// prefix, sorted ascending by the requested field.
    ///
    /// Unknown sort keys leave directory-listing order untouched instead of
    /// failing, preserving the historical lenient behavior.
    pub fn list(
        &self,
        sort_by: &str,
        type_filter: Option<&str>,
    ) -> Result<Vec<FileRecord>, InspectError> {
        let mut records = self.records()?;

        if let Some(prefix) = type_filter {
            records.retain(|r| r.file_type.starts_with(prefix));
        }

        match SortKey::from_str(sort_by) {
            Ok(SortKey::Name) => records.sort_by(|a, b| a.name.cmp(&b.name)),
            Ok(SortKey::Size) => records.sort_by_key(|r| r.size),
            Ok(SortKey::Modified) => records.sort_by_key(|r| r.modified),
            Ok(SortKey::Type) => records.sort_by(|a, b| a.file_type.cmp(&b.file_type)),
            Err(_) => {}
        }
        Ok(records)
    }

    /// Case-insensitive substring search over decoded file contents.
    ///
    /// Binary or undecodable files are skipped with a log line.
    pub fn search(&self, keyword: &str) -> Result<Vec<FileRecord>, InspectError> {
        let keyword = keyword.to_lowercase();
        let mut matches = Vec::new();

        for record in self.records()? {
            let bytes = match std::fs::read(&record.path) {
                Ok(bytes) => bytes,
                Err(err) => {
                    warn!(path = %record.path.display(), error = %err, "skipping unreadable file");
                    continue;
                }
            };
            if !content_inspector::inspect(&bytes).is_text() {
                warn!(path = %record.path.display(), "skipping binary file in search");
                continue;
            }
            let text = String::from_utf8_lossy(&bytes);
            if text.to_lowercase().contains(&keyword) {
                matches.push(record);
            }
        }
        Ok(matches)
    }

    /// Tally sniffed type labels across direct file children.
    pub fn type_statistics(&self) -> Result<IndexMap<String, usize>, InspectError> {
        let mut stats = IndexMap::new();
        for record in self.records()? {
            *stats.entry(record.file_type).or_insert(0) += 1;
        }
        Ok(stats)
    }

    /// The most recently modified files, newest first.
    pub fn recent_changes(&self, limit: usize) -> Result<Vec<FileRecord>, InspectError> {
        let mut records = self.records()?;
        records.sort_by(|a, b| b.modified.cmp(&a.modified));
        records.truncate(limit);
        Ok(records)
    }

    /// Raw permission mode bits for one entry.
    pub fn file_permissions(&self, name: &str) -> Result<u32, InspectError> {
        let path = self.resolve(name);
        let metadata = std::fs::metadata(&path).map_err(|e| InspectError::io(&path, e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            Ok(metadata.permissions().mode())
        }
        #[cfg(not(unix))]
        {
            Ok(if metadata.permissions().readonly() {
                0o444
            } else {
                0o666
            })
        }
    }

    /// Unfiltered recursive listing of files and folders under the working
    /// directory, formatted depth-first via the shared cycle-safe walker.
    pub fn recursive_list(&self) -> Result<Vec<String>, InspectError> {
        let mut lines = Vec::new();
        for listing in walk(&self.dir)? {
            lines.push(format!("Current Directory: {}", listing.path.display()));
            lines.push("Files:".to_string());
            for file in &listing.files {
                lines.push(format!("  - {file}"));
            }
            lines.push("Folders:".to_string());
            for folder in &listing.folders {
                lines.push(format!("  - {folder}"));
            }
            lines.push("-".repeat(40));
        }
        Ok(lines)
    }
}

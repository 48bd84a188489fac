//! Flat directory catalog for dirscope.
//!
//! [`DirectoryCatalog`] operates on the immediate contents of one working
//! directory (non-recursive unless explicitly delegated to the shared
//! walker): listing, sorting, type filtering, content search, per-type
//! statistics, preview/read with encoding detection, text analysis,
//! mutation operations, zip extraction, and file comparison.
//!
//! Inspection operations degrade gracefully (a bad entry is skipped and
//! logged, never aborting a directory-wide survey); mutation operations
//! surface a structured [`InspectError`] so callers know whether the write
//! happened and why not.

mod archive;
mod catalog;
mod compare;
mod content;
mod ops;

pub use catalog::{DirInfo, DirectoryCatalog, SortKey};
pub use content::TextReport;
pub use ops::validate_filename;

// Re-export core types
pub use dirscope_core::{FileRecord, InspectError};

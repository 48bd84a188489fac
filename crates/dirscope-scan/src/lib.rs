//! Recursive scanning engine for dirscope.
//!
//! This crate turns a directory into a typed [`ProjectTree`] and renders
//! it back out as indented text:
//!
//! - [`MetadataInspector`] - per-file size/timestamp extraction plus an
//!   injectable content-sniffing [`TypeSniffer`]
//! - [`TreeBuilder`] - cycle-safe recursive walk honoring extension filters
//! - [`TreeRenderer`] - pre-order indented rendering with an aggregate
//!   size summary
//! - [`walk`] - the shared cycle-safe traversal also used by the catalog's
//!   recursive listing
//!
//! ```rust,ignore
//! use dirscope_core::ScanConfig;
//! use dirscope_scan::{TreeBuilder, TreeRenderer};
//!
//! let config = ScanConfig::new("/path/to/project");
//! let tree = TreeBuilder::new(config.clone()).build()?;
//!
//! for line in TreeRenderer::new(config.show_content).render(&tree) {
//!     println!("{line}");
//! }
//! ```

mod builder;
mod inspect;
mod render;
mod walk;

pub use builder::{TreeBuilder, total_size};
pub use inspect::{FileMeta, MagicSniffer, MetadataInspector, TypeSniffer, format_timestamp};
pub use render::TreeRenderer;
pub use walk::{DirListing, VisitedSet, walk};

// Re-export core types
pub use dirscope_core::{InspectError, ProjectTree, ScanConfig, TreeNode};

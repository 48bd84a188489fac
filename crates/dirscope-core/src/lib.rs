//! Core types and traits for dirscope.
//!
//! This crate provides the fundamental data structures shared by the
//! recursive tree engine and the flat directory catalog: tree nodes,
//! file records, extension filters, scan configuration, and the error
//! taxonomy.

mod config;
mod error;
mod filter;
mod node;
mod record;
mod tree;

pub use config::{ScanConfig, ScanConfigBuilder};
pub use error::{InspectError, ScanWarning, WarningKind};
pub use filter::FileFilter;
pub use node::TreeNode;
pub use record::FileRecord;
pub use tree::ProjectTree;

//! Scan configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::filter::FileFilter;

/// Configuration for a recursive tree scan.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Root path to scan.
    pub root: PathBuf,

    /// Extensions a file must end with to be included (None = all).
    #[builder(default)]
    #[serde(default)]
    pub include_extensions: Option<Vec<String>>,

    /// Extensions that reject a file regardless of inclusion.
    #[builder(default)]
    #[serde(default)]
    pub exclude_extensions: Option<Vec<String>>,

    /// Include full file contents when rendering the tree.
    #[builder(default = "false")]
    #[serde(default)]
    pub show_content: bool,
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(root) = &self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a simple config for scanning a path with no filters.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_extensions: None,
            exclude_extensions: None,
            show_content: false,
        }
    }

    /// Build the extension filter described by this config.
    pub fn filter(&self) -> FileFilter {
        FileFilter::new(
            self.include_extensions.clone(),
            self.exclude_extensions.clone(),
        )
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

//! Textual file comparison.

use dirscope_core::InspectError;

use crate::catalog::DirectoryCatalog;

impl DirectoryCatalog {
    /// Compare two files' full text contents for equality.
    ///
    /// Both files are read in text mode with encoding detection, so a file
    /// with undecodable bytes fails the read with
    /// [`InspectError::DecodeFailure`] rather than being compared as
    /// binary. Binary-safe comparison is a documented non-feature.
    pub fn compare(&self, file_a: &str, file_b: &str) -> Result<bool, InspectError> {
        let a = self.read(file_a, None)?;
        let b = self.read(file_b, None)?;
        Ok(a == b)
    }
}

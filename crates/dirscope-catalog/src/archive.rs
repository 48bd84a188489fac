//! Zip archive extraction.

use std::fs::File;
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;
use zip::result::ZipError;

use dirscope_core::InspectError;

use crate::catalog::DirectoryCatalog;

impl DirectoryCatalog {
    /// Extract a zip archive from the working directory into
    /// `destination`, returning the number of entries extracted.
    ///
    /// A corrupt or non-zip file fails with
    /// [`InspectError::InvalidArchive`] before anything is written, leaving
    /// the destination untouched.
    pub fn extract_archive(
        &self,
        archive_name: &str,
        destination: &Path,
    ) -> Result<usize, InspectError> {
        let path = self.resolve(archive_name);
        let file = File::open(&path).map_err(|e| InspectError::io(&path, e))?;

        let mut archive = ZipArchive::new(file).map_err(|e| InspectError::InvalidArchive {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let count = archive.len();

        archive.extract(destination).map_err(|e| match e {
            ZipError::Io(source) => InspectError::io(destination, source),
            other => InspectError::InvalidArchive {
                path: path.clone(),
                message: other.to_string(),
            },
        })?;

        debug!(archive = %path.display(), entries = count, dest = %destination.display(), "extracted");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_test_zip(path: &Path) {
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        writer.start_file("hello.txt", options).unwrap();
        writer.write_all(b"hello from the archive").unwrap();
        writer.add_directory("nested", options).unwrap();
        writer.start_file("nested/inner.txt", options).unwrap();
        writer.write_all(b"inner").unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn test_extract_roundtrip() {
        let temp = TempDir::new().unwrap();
        write_test_zip(&temp.path().join("bundle.zip"));
        let dest = temp.path().join("out");

        let catalog = DirectoryCatalog::new(temp.path()).unwrap();
        let count = catalog.extract_archive("bundle.zip", &dest).unwrap();

        assert_eq!(count, 3);
        assert_eq!(
            fs::read_to_string(dest.join("hello.txt")).unwrap(),
            "hello from the archive"
        );
        assert_eq!(fs::read_to_string(dest.join("nested/inner.txt")).unwrap(), "inner");
    }

    #[test]
    fn test_corrupt_archive_leaves_destination_untouched() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("broken.zip"), "this is not a zip file").unwrap();
        let dest = temp.path().join("out");

        let catalog = DirectoryCatalog::new(temp.path()).unwrap();
        let err = catalog.extract_archive("broken.zip", &dest).unwrap_err();

        assert!(matches!(err, InspectError::InvalidArchive { .. }));
        assert!(!dest.exists(), "no partial extraction artifacts");
    }

    #[test]
    fn test_missing_archive() {
        let temp = TempDir::new().unwrap();
        let catalog = DirectoryCatalog::new(temp.path()).unwrap();
        let err = catalog
            .extract_archive("absent.zip", &temp.path().join("out"))
            .unwrap_err();
        assert!(matches!(err, InspectError::NotFound { .. }));
    }
}

//! Mutation operations on the working directory.
//!
//! Every operation returns a structured [`InspectError`] on failure so
//! callers can branch on the taxonomy kind instead of parsing printed
//! text. Multi-file operations are not atomic: a failure part-way leaves
//! earlier writes in place.

use std::path::{Path, PathBuf};

use tracing::debug;

use dirscope_core::InspectError;

use crate::catalog::DirectoryCatalog;

/// Validate an entry name for use within the working directory.
pub fn validate_filename(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Name cannot be empty".into());
    }
    if name.len() > 255 {
        return Err("Name is too long (max 255 characters)".into());
    }
    for c in ['/', '\0'] {
        if name.contains(c) {
            return Err(format!("Name cannot contain '{}'", c.escape_default()));
        }
    }
    if name.starts_with(' ') || name.ends_with(' ') {
        return Err("Name cannot start or end with spaces".into());
    }
    if name == "." || name == ".." {
        return Err("'.' and '..' are reserved names".into());
    }
    Ok(())
}

fn checked(name: &str, dir: &Path) -> Result<PathBuf, InspectError> {
    validate_filename(name).map_err(|message| InspectError::Io {
        path: dir.join(name),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, message),
    })?;
    Ok(dir.join(name))
}

impl DirectoryCatalog {
    /// Rename an entry within the working directory.
    pub fn rename(&self, old_name: &str, new_name: &str) -> Result<(), InspectError> {
        let old_path = self.resolve(old_name);
        let new_path = checked(new_name, self.current_dir())?;

        if !old_path.exists() {
            return Err(InspectError::NotFound { path: old_path });
        }
        if new_path.exists() && new_path != old_path {
            return Err(InspectError::AlreadyExists { path: new_path });
        }

        std::fs::rename(&old_path, &new_path).map_err(|e| InspectError::io(&old_path, e))?;
        debug!(from = %old_path.display(), to = %new_path.display(), "renamed");
        Ok(())
    }

    /// Create a new file, optionally with content. Fails if the name is
    /// already taken.
    pub fn create_file(&self, name: &str, content: Option<&str>) -> Result<(), InspectError> {
        let path = checked(name, self.current_dir())?;
        if path.exists() {
            return Err(InspectError::AlreadyExists { path });
        }
        std::fs::write(&path, content.unwrap_or_default())
            .map_err(|e| InspectError::io(&path, e))?;
        debug!(path = %path.display(), "created file");
        Ok(())
    }

    /// Create a folder; succeeds if it already exists.
    pub fn create_folder(&self, name: &str) -> Result<(), InspectError> {
        let path = checked(name, self.current_dir())?;
        std::fs::create_dir_all(&path).map_err(|e| InspectError::io(&path, e))?;
        debug!(path = %path.display(), "created folder");
        Ok(())
    }

    /// Delete a file in the working directory.
    pub fn delete_file(&self, name: &str) -> Result<(), InspectError> {
        let path = self.resolve(name);
        std::fs::remove_file(&path).map_err(|e| InspectError::io(&path, e))?;
        debug!(path = %path.display(), "deleted file");
        Ok(())
    }

    /// Delete a directory and everything beneath it.
    pub fn delete_directory(&self, name: &str) -> Result<(), InspectError> {
        let path = self.resolve(name);
        std::fs::remove_dir_all(&path).map_err(|e| InspectError::io(&path, e))?;
        debug!(path = %path.display(), "deleted directory");
        Ok(())
    }

    /// Re-root the catalog onto another directory.
    ///
    /// Relative paths resolve against the current working directory; the
    /// new root is canonicalized.
    pub fn change_directory(&mut self, path: impl AsRef<Path>) -> Result<(), InspectError> {
        let path = path.as_ref();
        let target = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current_dir().join(path)
        };
        let target = target.canonicalize().map_err(|e| InspectError::io(&target, e))?;
        if !target.is_dir() {
            return Err(InspectError::NotADirectory { path: target });
        }
        debug!(dir = %target.display(), "changed working directory");
        self.set_dir(target);
        Ok(())
    }

    /// Copy named files from the working directory into `destination`,
    /// creating it as needed. Not atomic across files.
    pub fn copy_files_to(&self, names: &[&str], destination: &Path) -> Result<(), InspectError> {
        std::fs::create_dir_all(destination).map_err(|e| InspectError::io(destination, e))?;
        for name in names {
            let source = self.resolve(name);
            let target = destination.join(name);
            std::fs::copy(&source, &target).map_err(|e| InspectError::io(&source, e))?;
        }
        debug!(count = names.len(), dest = %destination.display(), "copied files");
        Ok(())
    }
}

//! Host filesystem operations used by the instance lifecycle.
//!
//! Every mutation of instance artifacts goes through this port so commands
//! can run against an in-memory double in tests.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for filesystem operations on absolute host paths.
pub trait InstanceFilesystem {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Read a file's raw bytes.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError>;

    /// Overwrite a file, keeping its permissions if it exists.
    fn write_file(&self, path: &Path, content: &[u8]) -> Result<(), AppError>;

    /// Copy a single file, creating parent directories as needed.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    /// Recursively copy a directory tree to a new location.
    fn copy_dir_all(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    /// Remove a file. Returns `false` when nothing was there.
    fn remove_file(&self, path: &Path) -> Result<bool, AppError>;

    /// Remove a directory and all its contents. Returns `false` when absent.
    fn remove_dir_all(&self, path: &Path) -> Result<bool, AppError>;

    /// List the immediate children of a directory, sorted.
    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, AppError>;
}

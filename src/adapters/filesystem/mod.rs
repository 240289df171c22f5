//! `InstanceFilesystem` implementation backed by `std::fs`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::InstanceFilesystem;

/// Filesystem adapter operating directly on host paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl InstanceFilesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        // A dangling symlink still occupies the path.
        path.symlink_metadata().is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(AppError::from)
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        fs::read(path).map_err(AppError::from)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<(), AppError> {
        fs::write(path, content).map_err(AppError::from)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(from, to)?;
        Ok(())
    }

    fn copy_dir_all(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        if !from.is_dir() {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a directory", from.display()),
            )));
        }
        copy_tree(from, to).map_err(AppError::from)
    }

    fn remove_file(&self, path: &Path) -> Result<bool, AppError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(AppError::from(err)),
        }
    }

    fn remove_dir_all(&self, path: &Path) -> Result<bool, AppError> {
        let Ok(metadata) = path.symlink_metadata() else {
            return Ok(false);
        };
        if metadata.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            // A file or symlink sitting where a directory belongs is still instance state.
            fs::remove_file(path)?;
        }
        Ok(true)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, AppError> {
        let entries = fs::read_dir(path).map_err(AppError::from)?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(AppError::from)?;
            paths.push(entry.path());
        }
        paths.sort();
        Ok(paths)
    }
}

fn copy_tree(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;

    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let target = to.join(entry.file_name());

        if file_type.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else if file_type.is_symlink() {
            copy_symlink(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    // Applied last so a read-only template directory can still be filled.
    fs::set_permissions(to, fs::metadata(from)?.permissions())
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(fs::read_link(from)?, to)
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to).map(|_| ())
}

//! Filesystem operations used by the pipeline.
//!
//! All paths are absolute and come from the resolved `DirectoryLayout`.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for the filesystem side effects of fetching, staging and packaging.
pub trait BuildFilesystem {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Replace a file's entire content.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Create (or truncate) a file and return a writer for streaming into it.
    fn create_file(&self, path: &Path) -> Result<Box<dyn Write + '_>, AppError>;

    /// Move a file onto a new path, replacing any file already there.
    fn rename(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    /// Remove a file. No-op if the file does not exist.
    fn remove_file(&self, path: &Path) -> Result<(), AppError>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Remove a directory and all its contents. No-op if absent.
    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// List the direct entries of a directory, sorted by path.
    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Check whether a path is a regular file.
    fn is_file(&self, path: &Path) -> bool;
}

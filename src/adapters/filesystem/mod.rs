//! Local filesystem adapter for `BuildFilesystem`.
//!
//! Reads may target any path (an explicit config file can live elsewhere).
//! Every mutation is validated against the repository root so a bad layout can
//! never delete or overwrite files outside it.

mod build_filesystem;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at a repository directory.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

// ── Path safety ────────────────────────────────────────────────────────

impl LocalFilesystem {
    /// Reject mutations that land on the repository root or anywhere above it.
    pub(crate) fn validate_path_within_root(&self, path: &Path) -> Result<(), AppError> {
        let target = resolve_lexically(&self.root, path);
        let root = resolve_lexically(&self.root, Path::new(""));
        match target.strip_prefix(&root) {
            Ok(rest) if rest.components().next().is_some() => Ok(()),
            _ => Err(AppError::PathTraversal(path.display().to_string())),
        }
    }
}

/// Join `path` onto `base` and collapse `.` and `..` without touching the filesystem.
fn resolve_lexically(base: &Path, path: &Path) -> PathBuf {
    base.join(path).components().fold(PathBuf::new(), |mut resolved, component| {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
        resolved
    })
}

use std::path::Path;

use crate::domain::AppError;

/// Port for unpacking an archive into a directory.
pub trait ArchiveExtractor {
    /// Extract every entry of `archive` under `destination`, overwriting existing files.
    ///
    /// Returns the number of entries written.
    fn extract(&self, archive: &Path, destination: &Path) -> Result<usize, AppError>;
}

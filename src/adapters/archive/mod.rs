//! Zip extraction for the embeddable runtime archive.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use zip::ZipArchive;

use crate::domain::AppError;
use crate::ports::ArchiveExtractor;

#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiveExtractor;

impl ZipArchiveExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveExtractor for ZipArchiveExtractor {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<usize, AppError> {
        let archive_error =
            |details: String| AppError::Archive { path: archive.display().to_string(), details };

        let file = File::open(archive).map_err(|e| archive_error(e.to_string()))?;
        let mut zip = ZipArchive::new(file).map_err(|e| archive_error(e.to_string()))?;

        for index in 0..zip.len() {
            let mut entry = zip.by_index(index).map_err(|e| archive_error(e.to_string()))?;
            let relative = entry.enclosed_name().map(|p| p.to_path_buf()).ok_or_else(|| {
                archive_error(format!("entry '{}' escapes the destination", entry.name()))
            })?;
            let out_path = destination.join(relative);

            if entry.is_dir() {
                fs::create_dir_all(&out_path).map_err(|e| archive_error(e.to_string()))?;
                continue;
            }
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent).map_err(|e| archive_error(e.to_string()))?;
            }
            let mut out = File::create(&out_path).map_err(|e| {
                archive_error(format!("Failed to create {}: {}", out_path.display(), e))
            })?;
            io::copy(&mut entry, &mut out).map_err(|e| {
                archive_error(format!("Failed to extract {}: {}", entry.name(), e))
            })?;
        }

        tracing::debug!(
            archive = %archive.display(),
            destination = %destination.display(),
            entries = zip.len(),
            "archive extracted"
        );
        Ok(zip.len())
    }
}

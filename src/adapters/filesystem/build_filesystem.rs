//! `BuildFilesystem` implementation for `LocalFilesystem`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::BuildFilesystem;

use super::LocalFilesystem;

impl BuildFilesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(AppError::from)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.validate_path_within_root(path)?;
        fs::write(path, content).map_err(AppError::from)
    }

    fn create_file(&self, path: &Path) -> Result<Box<dyn Write + '_>, AppError> {
        self.validate_path_within_root(path)?;
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        self.validate_path_within_root(from)?;
        self.validate_path_within_root(to)?;
        fs::rename(from, to).map_err(AppError::from)
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        self.validate_path_within_root(path)?;
        if path.exists() {
            fs::remove_file(path).map_err(AppError::from)?;
        }
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.validate_path_within_root(path)?;
        fs::create_dir_all(path).map_err(AppError::from)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.validate_path_within_root(path)?;
        if path.exists() {
            fs::remove_dir_all(path).map_err(AppError::from)?;
        }
        Ok(())
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

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

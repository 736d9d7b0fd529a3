//! Test double for `BuildFilesystem`.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::BuildFilesystem;

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
}

impl State {
    fn add_dir_with_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    fn parent_exists(&self, path: &Path) -> bool {
        path.parent().is_none_or(|parent| self.dirs.contains(parent))
    }
}

/// In-memory implementation of `BuildFilesystem` for unit tests.
///
/// Clones share state, so a test can hand one clone to the code under test and
/// inspect the result through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryFilesystem {
    state: Arc<Mutex<State>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        let mut state = self.state.lock().unwrap();
        if let Some(parent) = path.parent() {
            state.add_dir_with_ancestors(parent);
        }
        state.files.insert(path.to_path_buf(), content.as_bytes().to_vec());
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        let state = self.state.lock().unwrap();
        state.files.get(path.as_ref()).map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().unwrap().dirs.contains(path.as_ref())
    }

    /// All file paths under `dir`, sorted.
    pub fn files_under(&self, dir: impl AsRef<Path>) -> Vec<PathBuf> {
        let dir = dir.as_ref();
        let state = self.state.lock().unwrap();
        state.files.keys().filter(|path| path.starts_with(dir)).cloned().collect()
    }
}

fn not_found(path: &Path) -> AppError {
    AppError::from(io::Error::new(
        io::ErrorKind::NotFound,
        format!("Mock path not found: {}", path.display()),
    ))
}

struct MemoryFileWriter {
    state: Arc<Mutex<State>>,
    path: PathBuf,
}

impl Write for MemoryFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.lock().unwrap();
        state.files.entry(self.path.clone()).or_default().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl BuildFilesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.file(path).ok_or_else(|| not_found(path))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if !state.parent_exists(path) {
            return Err(not_found(path));
        }
        state.files.insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    fn create_file(&self, path: &Path) -> Result<Box<dyn Write + '_>, AppError> {
        let mut state = self.state.lock().unwrap();
        if !state.parent_exists(path) {
            return Err(not_found(path));
        }
        state.files.insert(path.to_path_buf(), Vec::new());
        Ok(Box::new(MemoryFileWriter { state: Arc::clone(&self.state), path: path.to_path_buf() }))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        let content = state.files.remove(from).ok_or_else(|| not_found(from))?;
        state.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        self.state.lock().unwrap().files.remove(path);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.state.lock().unwrap().add_dir_with_ancestors(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.files.retain(|key, _| !key.starts_with(path));
        state.dirs.retain(|key| !key.starts_with(path));
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, AppError> {
        let state = self.state.lock().unwrap();
        if !state.dirs.contains(path) {
            return Err(not_found(path));
        }
        let entries: BTreeSet<PathBuf> = state
            .files
            .keys()
            .chain(state.dirs.iter())
            .filter(|entry| entry.parent() == Some(path))
            .cloned()
            .collect();
        Ok(entries.into_iter().collect())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.state.lock().unwrap().files.contains_key(path)
    }
}

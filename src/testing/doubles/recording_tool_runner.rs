//! Test double for `ToolRunner`.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{BuildFilesystem, ToolInvocation, ToolRunner};

use super::MemoryFilesystem;

/// Records invocations and emulates `7z a <archive> <dir>/*` against a `MemoryFilesystem`.
///
/// The emulated archive lists the files found under the source directory, so a
/// test can tell which staging contents were packaged.
#[derive(Debug)]
pub struct RecordingToolRunner {
    fs: MemoryFilesystem,
    exit_code: Option<i32>,
    pub invocations: Mutex<Vec<ToolInvocation>>,
}

impl RecordingToolRunner {
    pub fn new(fs: MemoryFilesystem) -> Self {
        Self { fs, exit_code: None, invocations: Mutex::new(Vec::new()) }
    }

    pub fn failing(fs: MemoryFilesystem, exit_code: i32) -> Self {
        Self { fs, exit_code: Some(exit_code), invocations: Mutex::new(Vec::new()) }
    }
}

impl ToolRunner for RecordingToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<(), AppError> {
        self.invocations.lock().unwrap().push(invocation.clone());

        if let Some(code) = self.exit_code {
            return Err(AppError::ExternalToolError {
                tool: invocation.program.display().to_string(),
                error: format!("command failed with exit status {}: {}", code, invocation),
            });
        }

        let target = PathBuf::from(&invocation.args[1]);
        let pattern = invocation.args[2].to_string_lossy().into_owned();
        let source = PathBuf::from(pattern.trim_end_matches("/*"));

        if self.fs.exists(&target) {
            // Emulates 7z updating an existing archive in place.
            let previous = self.fs.file(&target).unwrap_or_default();
            self.fs.add_file(&target, &format!("{previous}[appended]\n"));
            return Ok(());
        }

        let listing: String = self
            .fs
            .files_under(&source)
            .iter()
            .filter_map(|path| path.strip_prefix(&source).ok())
            .map(|relative| format!("{}\n", relative.display()))
            .collect();
        self.fs.add_file(&target, &listing);
        Ok(())
    }
}

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use crate::domain::AppError;

/// A single external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub working_dir: PathBuf,
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Port for running external tools.
pub trait ToolRunner {
    /// Run the program to completion with the caller's standard streams.
    ///
    /// A spawn failure or non-zero exit status is an error.
    fn run(&self, invocation: &ToolInvocation) -> Result<(), AppError>;
}

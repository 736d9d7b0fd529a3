//! External tool execution with inherited standard streams.

use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::{ToolInvocation, ToolRunner};

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessToolRunner;

impl ProcessToolRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ProcessToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<(), AppError> {
        let tool = invocation.program.display().to_string();
        tracing::debug!(
            command = %invocation,
            cwd = %invocation.working_dir.display(),
            "running external tool"
        );

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|err| AppError::ExternalToolError {
                tool: tool.clone(),
                error: format!("failed to start: {}", err),
            })?;

        if !status.success() {
            let code = status.code().map_or_else(|| "signal".to_string(), |c| c.to_string());
            return Err(AppError::ExternalToolError {
                tool,
                error: format!("command failed with exit status {}: {}", code, invocation),
            });
        }

        Ok(())
    }
}

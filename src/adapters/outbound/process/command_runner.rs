use crate::ports::outbound::{CommandInvocation, CommandRunner};
use crate::shared::error::SpdxError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Maximum number of stderr bytes quoted in an error message
const MAX_STDERR_EXCERPT: usize = 4 * 1024;

/// ProcessCommandRunner adapter for running external tools as child processes
///
/// This adapter implements the CommandRunner port with `std::process`.
/// The child's stdout is captured and written to the requested file only
/// once the process has exited successfully, so a failed run never leaves
/// a half-written graph document behind.
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Anchors a relative program path containing a directory component
    /// to our working directory, since its meaning would otherwise depend
    /// on the child's working directory
    fn resolve_program(program: &Path) -> Result<PathBuf> {
        if program.is_absolute() || program.components().count() < 2 {
            return Ok(program.to_path_buf());
        }
        Ok(std::env::current_dir()?.join(program))
    }

    fn spawn(invocation: &CommandInvocation) -> Result<Output> {
        let program = Self::resolve_program(&invocation.program)?;

        Command::new(&program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .output()
            .map_err(|e| {
                SpdxError::ExternalCommandFailed {
                    command: invocation.to_string(),
                    details: format!("Failed to start {}: {}", program.display(), e),
                }
                .into()
            })
    }

    fn failure_details(output: &Output) -> String {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if stderr.is_empty() {
            return output.status.to_string();
        }

        let excerpt: String = stderr.chars().take(MAX_STDERR_EXCERPT).collect();
        format!("{}\n{}", output.status, excerpt)
    }
}

impl Default for ProcessCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run_to_file(&self, invocation: &CommandInvocation, stdout_path: &Path) -> Result<()> {
        let output = Self::spawn(invocation)?;

        if !output.status.success() {
            return Err(SpdxError::ExternalCommandFailed {
                command: invocation.to_string(),
                details: Self::failure_details(&output),
            }
            .into());
        }

        fs::write(stdout_path, &output.stdout).map_err(|e| SpdxError::FileWriteError {
            path: stdout_path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}

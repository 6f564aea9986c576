use crate::shared::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// A fully specified external command: program, arguments and working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl CommandInvocation {
    pub fn new(program: PathBuf, args: Vec<String>, working_dir: PathBuf) -> Self {
        Self {
            program,
            args,
            working_dir,
        }
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// CommandRunner port for running external tools
///
/// This port abstracts process execution so the generation pipeline can
/// be exercised without a real vcpkg installation.
pub trait CommandRunner {
    /// Runs the command to completion and writes its stdout to `stdout_path`
    ///
    /// Blocks until the process exits. No timeout is applied.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The program cannot be started
    /// - The process exits with a non-zero status
    /// - The output file cannot be written
    fn run_to_file(&self, invocation: &CommandInvocation, stdout_path: &Path) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_display() {
        let invocation = CommandInvocation::new(
            PathBuf::from("../vcpkg/vcpkg"),
            vec![
                "depend-info".to_string(),
                "--overlay-ports=.".to_string(),
                "foo".to_string(),
                "--format=dgml".to_string(),
            ],
            PathBuf::from("."),
        );

        assert_eq!(
            invocation.to_string(),
            "\"../vcpkg/vcpkg\" depend-info --overlay-ports=. foo --format=dgml"
        );
    }
}

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use vcpkg_spdx::prelude::*;

/// Mock CommandRunner recording invocations instead of spawning processes
///
/// Optionally writes canned stdout to the requested file, or fails every run.
#[derive(Default, Clone)]
pub struct MockCommandRunner {
    stdout: Option<String>,
    fail: bool,
    pub invocations: Arc<Mutex<Vec<(CommandInvocation, PathBuf)>>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn with_stdout(mut self, stdout: &str) -> Self {
        self.stdout = Some(stdout.to_string());
        self
    }

    #[allow(dead_code)]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn recorded(&self) -> Vec<(CommandInvocation, PathBuf)> {
        self.invocations.lock().unwrap().clone()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run_to_file(&self, invocation: &CommandInvocation, stdout_path: &Path) -> Result<()> {
        self.invocations
            .lock()
            .unwrap()
            .push((invocation.clone(), stdout_path.to_path_buf()));

        if self.fail {
            anyhow::bail!("External command failed: {}", invocation);
        }
        if let Some(stdout) = &self.stdout {
            std::fs::write(stdout_path, stdout)?;
        }
        Ok(())
    }
}

//! External analyzer invocation.
//!
//! Runs the commit-recovery analyzer once per bug and captures its stdout.
//! The call blocks the pipeline until the child exits; there is deliberately
//! no timeout, so a hung analyzer hangs the run.

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

/// Command line for the external analyzer. Per bug it is invoked with
/// `-p <project> -i <index>` appended to `args`.
#[derive(Debug, Clone)]
pub struct AnalyzerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for AnalyzerCommand {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            args: vec!["main.py".to_string()],
        }
    }
}

impl AnalyzerCommand {
    /// Split a shell-style command line (`"python3 main.py"`) into program
    /// and arguments. Returns `None` for a blank command line.
    pub fn parse(cmdline: &str) -> Option<Self> {
        let mut parts = cmdline.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

/// Invokes the analyzer once per bug, strictly sequentially.
#[derive(Debug, Clone)]
pub struct ToolInvoker {
    command: AnalyzerCommand,
}

impl ToolInvoker {
    pub fn new(command: AnalyzerCommand) -> Self {
        Self { command }
    }

    /// Run the analyzer for one (project, bug index) pair and return its
    /// stdout verbatim as lossy UTF-8.
    ///
    /// Best-effort by design: a non-zero exit status or a spawn failure
    /// degrades to whatever output was produced (possibly empty) instead of
    /// aborting the run. Stderr is discarded.
    pub async fn run(&self, project: &str, index: u32) -> String {
        debug!(project, index, program = %self.command.program, "Invoking analyzer");

        let result = Command::new(&self.command.program)
            .args(&self.command.args)
            .arg("-p")
            .arg(project)
            .arg("-i")
            .arg(index.to_string())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await;

        match result {
            Ok(output) => {
                if !output.status.success() {
                    warn!(
                        project,
                        index,
                        status = %output.status,
                        "Analyzer exited with non-zero status (continuing with captured output)"
                    );
                }
                String::from_utf8_lossy(&output.stdout).to_string()
            }
            Err(e) => {
                warn!(
                    project,
                    index,
                    error = %e,
                    "Failed to spawn analyzer (continuing with empty output)"
                );
                String::new()
            }
        }
    }
}

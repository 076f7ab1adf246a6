//! Subprocess execution for the yt-dlp wrapper
//!
//! Everything streampick does externally goes through a single command
//! runner: spawn a program, wait for it, and hand back both output streams
//! as text together with the exit verdict.

use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// Captured result of one finished subprocess.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Core trait for subprocess execution
///
/// This trait isolates the rest of the application from real process
/// spawning, so the fetch and download paths can be exercised against a
/// scripted runner in tests.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args` to completion and captures its output.
    ///
    /// An `Err` means the process could not be spawned or waited on; a
    /// non-zero exit is reported through `CommandOutput::success`, with
    /// stderr preserved for the caller's error message.
    async fn run(&self, program: &Path, args: &[String]) -> std::io::Result<CommandOutput>;
}

/// Production runner backed by `tokio::process`.
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &Path, args: &[String]) -> std::io::Result<CommandOutput> {
        debug!("Running {} {:?}", program.display(), args);

        let output = Command::new(program).args(args).output().await?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        })
    }
}

use std::path::PathBuf;

use tokio::process::Command;

use crate::error::Result;

/// Captured result of one external tool invocation
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Seam between the fetcher and the metadata tool it shells out to.
///
/// `Err` means the process could not be run at all; a non-zero exit is
/// reported through [`ToolOutput::success`].
pub trait ToolRunner {
    async fn run(&self, args: &[String]) -> Result<ToolOutput>;
}

/// Runs the real yt-dlp binary
#[derive(Debug, Clone)]
pub struct YtDlp {
    bin: PathBuf,
}

impl YtDlp {
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }
}

impl ToolRunner for YtDlp {
    async fn run(&self, args: &[String]) -> Result<ToolOutput> {
        tracing::debug!(bin = %self.bin.display(), ?args, "running yt-dlp");

        let output = Command::new(&self.bin).args(args).output().await?;

        let result = ToolOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        tracing::debug!(
            code = ?result.code,
            stdout_bytes = result.stdout.len(),
            "yt-dlp finished"
        );

        Ok(result)
    }
}

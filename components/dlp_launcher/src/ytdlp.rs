// components/dlp_launcher/src/ytdlp.rs
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

use crate::types::{LaunchError, Result};

pub const DEFAULT_PROGRAM: &str = "yt-dlp";

/// Something that can run the external download tool
#[async_trait]
pub trait Runner {
    /// Name shown to the user in progress and error messages
    fn program(&self) -> &str;

    /// Locate the tool, then run it to completion with the given arguments.
    /// A missing tool is reported as `LaunchError::ToolNotFound`.
    async fn run(&self, args: &[String]) -> Result<()>;
}

/// Runs a yt-dlp compatible executable found on `PATH`
#[derive(Debug, Clone)]
pub struct YtDlp {
    program: String,
}

impl YtDlp {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn locate(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|source| LaunchError::ToolNotFound {
            program: self.program.clone(),
            source,
        })
    }
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

#[async_trait]
impl Runner for YtDlp {
    fn program(&self) -> &str {
        &self.program
    }

    async fn run(&self, args: &[String]) -> Result<()> {
        let path = self.locate()?;
        tracing::debug!(path = %path.display(), ?args, "running {}", self.program);

        // The child talks straight to our terminal.
        let status = Command::new(&path)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| LaunchError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            tracing::warn!(%status, "{} failed", self.program);
            return Err(LaunchError::ToolFailed {
                program: self.program.clone(),
                status,
            });
        }

        Ok(())
    }
}

// components/dlp_launcher/src/lib.rs
mod mode;
mod request;
mod types;
mod ytdlp;

use std::sync::Arc;

pub use mode::Mode;
pub use request::{Invocation, Request};
pub use types::{LaunchError, Result};
pub use ytdlp::{Runner, YtDlp, DEFAULT_PROGRAM};

pub struct Launcher {
    runner: Arc<dyn Runner + Send + Sync>,
}

impl Launcher {
    /// Create a Launcher that runs the given program from `PATH`
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_runner(Arc::new(YtDlp::new(program)))
    }

    /// Create a Launcher with a specific runner implementation
    pub fn with_runner(runner: Arc<dyn Runner + Send + Sync>) -> Self {
        Self { runner }
    }

    pub fn program(&self) -> &str {
        self.runner.program()
    }

    /// Run the download tool for a resolved invocation and wait for it to exit
    pub async fn launch(&self, invocation: &Invocation) -> Result<()> {
        self.runner.run(&invocation.args()).await
    }
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

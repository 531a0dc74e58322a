// components/dlp_launcher/src/types.rs
use std::process::ExitStatus;
use thiserror::Error;

use crate::mode::Mode;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("URL to the video is required")]
    MissingUrl,

    #[error("Mode '{mode}' not recognized. Available modes: {names}", names = Mode::names())]
    UnknownMode { mode: String },

    #[error("-url cannot be combined with the positional mode '{mode}'")]
    UrlWithPositionalMode { mode: String },

    #[error("{program} not found on PATH")]
    ToolNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to start {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    ToolFailed { program: String, status: ExitStatus },
}

impl LaunchError {
    pub fn unknown_mode(mode: impl Into<String>) -> Self {
        LaunchError::UnknownMode { mode: mode.into() }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;

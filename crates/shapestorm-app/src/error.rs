//! Startup errors of the application.

use std::path::PathBuf;

use shapestorm_core::error::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("font file not found: {} (set the Font section to an existing TrueType file)", .0.display())]
    MissingFont(PathBuf),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Usage(String),
}

impl AppError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

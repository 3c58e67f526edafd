use std::path::{ Path, PathBuf };
use thiserror::Error;

use crate::config::ConfigError;

/// Custom error types for the membprobe system
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Error in external tool {tool}: {message}")]
    ExternalTool { tool: String, message: String },

    #[error("Compilation failed: {0}")]
    CompileError(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ProbeError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        ProbeError::Io { path: path.to_path_buf(), source }
    }

    /// True for errors raised while reading or writing a file
    pub fn is_io(&self) -> bool {
        matches!(self, ProbeError::Io { .. })
    }
}

/// Result type specific to membprobe operations
pub type ProbeResult<T> = Result<T, ProbeError>;

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an analysis run. None of them produce a report.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Missing file name")]
    MissingInput,

    #[error("Failed to read log file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to compile pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern '{pattern}' has no capture group for the filter text")]
    MissingCaptureGroup { pattern: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

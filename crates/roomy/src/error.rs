//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::breakpoint::Breakpoint;

/// Error returned when a breakpoint table cannot be built.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A tier's threshold is not strictly greater than the previous tier's.
    #[error(
        "breakpoint {upper} ({upper_width}px) must be wider than {lower} ({lower_width}px)"
    )]
    NotAscending {
        lower: Breakpoint,
        lower_width: u32,
        upper: Breakpoint,
        upper_width: u32,
    },

    #[error("invalid breakpoint YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid breakpoint JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The config file could not be read.
    #[error("failed to read breakpoint config {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

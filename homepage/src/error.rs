//! Errors of the export layer.
//!
//! Rendering itself cannot fail; only reading config and writing output can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading options or writing rendered output.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    ReadConfig {
        /// Config path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::RenderOptions`]
    #[error("invalid config {}: {source}", .path.display())]
    ParseConfig {
        /// Config path
        path: PathBuf,
        /// Parser error
        #[source]
        source: toml::de::Error,
    },

    /// Parent directory of the output file could not be created
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Output could not be written
    #[error("failed to write {target}: {source}")]
    Write {
        /// File path or "stdout"
        target: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Layout summary could not be serialized
    #[error("failed to serialize page layout: {0}")]
    Layout(#[from] serde_json::Error),
}

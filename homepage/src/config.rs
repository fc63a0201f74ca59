//! Render options and their TOML form.
//!
//! ```toml
//! title = "llama-cpp-agent docs"
//! format = "fragment"
//! output = "build/index.html"
//! ```
//!
//! Every key is optional; missing keys fall back to [`RenderOptions::default`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Default `<title>` of the standalone document.
pub const DEFAULT_TITLE: &str = "llama-cpp-agent developer platform";

/// What to produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full HTML document with doctype, head and inline stylesheet
    #[default]
    Document,
    /// Page body only, for embedding into a host layout
    Fragment,
    /// Tier layout summary as JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Document => "document",
            OutputFormat::Fragment => "fragment",
            OutputFormat::Json => "json",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "document" | "html" => Ok(OutputFormat::Document),
            "fragment" => Ok(OutputFormat::Fragment),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown format '{other}' (expected document, fragment or json)"
            )),
        }
    }
}

/// Options controlling a render/export run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// `<title>` of the standalone document
    pub title: String,
    /// Output format
    pub format: OutputFormat,
    /// Destination file; `None` writes to stdout
    pub output: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            format: OutputFormat::default(),
            output: None,
        }
    }
}

impl RenderOptions {
    /// Read options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let raw = fs::read_to_string(path).map_err(|source| ExportError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ExportError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}

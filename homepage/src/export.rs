//! Writing rendered output to files or streams.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::config::{OutputFormat, RenderOptions};
use crate::error::ExportError;
use crate::layout::{page_layout, partition};
use crate::types::FeatureRecord;
use crate::{render_document, render_home};

/// What an export run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportSummary {
    /// Format that was written
    pub format: OutputFormat,
    /// File path or "stdout"
    pub target: String,
    /// Bytes written
    pub bytes: usize,
    /// Cards per tier, in page order
    pub tier_sizes: [usize; 3],
}

/// Render a catalog in the requested format, as written by the export
/// functions (newline-terminated).
pub fn render(catalog: &[FeatureRecord], options: &RenderOptions) -> Result<String, ExportError> {
    let mut content = match options.format {
        OutputFormat::Document => render_document(catalog, &options.title),
        OutputFormat::Fragment => render_home(catalog),
        OutputFormat::Json => serde_json::to_string_pretty(&page_layout(catalog))?,
    };
    content.push('\n');
    Ok(content)
}

/// Render and write to an arbitrary writer. `target` only labels the summary
/// and error messages.
pub fn export_to_writer<W: Write>(
    catalog: &[FeatureRecord],
    options: &RenderOptions,
    writer: &mut W,
    target: &str,
) -> Result<ExportSummary, ExportError> {
    let content = render(catalog, options)?;
    let write_err = |source: io::Error| ExportError::Write {
        target: target.to_string(),
        source,
    };
    writer.write_all(content.as_bytes()).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    Ok(summary(catalog, options.format, target, content.len()))
}

/// Render and write to a file, creating missing parent directories.
pub fn export_to_path(
    catalog: &[FeatureRecord],
    options: &RenderOptions,
    path: &Path,
) -> Result<ExportSummary, ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let content = render(catalog, options)?;
    let target = path.display().to_string();
    fs::write(path, &content).map_err(|source| ExportError::Write {
        target: target.clone(),
        source,
    })?;
    debug!(path = %target, bytes = content.len(), "wrote home page");

    Ok(summary(catalog, options.format, &target, content.len()))
}

/// Export to `options.output`, or to stdout when no output is set.
pub fn export(
    catalog: &[FeatureRecord],
    options: &RenderOptions,
) -> Result<ExportSummary, ExportError> {
    let summary = match &options.output {
        Some(path) => export_to_path(catalog, options, path)?,
        None => export_to_writer(catalog, options, &mut io::stdout().lock(), "stdout")?,
    };
    info!(
        format = %summary.format,
        target = %summary.target,
        bytes = summary.bytes,
        "home page exported"
    );
    Ok(summary)
}

fn summary(
    catalog: &[FeatureRecord],
    format: OutputFormat,
    target: &str,
    bytes: usize,
) -> ExportSummary {
    ExportSummary {
        format,
        target: target.to_string(),
        bytes,
        tier_sizes: partition(catalog).map(|tier| tier.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FEATURES;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_document_to_nested_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("site").join("index.html");

        let summary =
            export_to_path(FEATURES, &RenderOptions::default(), &path).expect("export");
        let written = fs::read_to_string(&path).expect("read back");

        assert!(written.starts_with("<!DOCTYPE html>"));
        assert_eq!(summary.bytes, written.len());
        assert_eq!(summary.tier_sizes, [2, 2, 8]);
        assert_eq!(summary.format, OutputFormat::Document);
    }

    #[test]
    fn writes_json_layout_to_writer() {
        let options = RenderOptions {
            format: OutputFormat::Json,
            ..Default::default()
        };
        let mut buf = Vec::new();

        let summary = export_to_writer(FEATURES, &options, &mut buf, "buffer").expect("export");
        let json: serde_json::Value = serde_json::from_slice(&buf).expect("valid json");

        assert_eq!(summary.target, "buffer");
        assert_eq!(summary.bytes, buf.len());
        assert_eq!(json["tiers"][2]["titles"][0], "Providers endpoints");
        assert_eq!(json["tiers"][2]["titles"].as_array().map(Vec::len), Some(8));
    }

    #[test]
    fn fragment_has_no_document_shell() {
        let options = RenderOptions {
            format: OutputFormat::Fragment,
            ..Default::default()
        };
        let html = render(FEATURES, &options).expect("render");

        assert!(!html.contains("<!DOCTYPE html>"));
        assert!(!html.contains("<html"));
        assert!(!html.contains("<head>"));
        assert!(html.starts_with(r#"<header class="home-header">"#));
        assert!(html.contains("Start with the basics"));
    }

    #[test]
    fn file_and_writer_receive_identical_bytes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("index.html");
        let options = RenderOptions::default();

        let file_summary = export_to_path(FEATURES, &options, &path).expect("export to file");
        let mut buf = Vec::new();
        let writer_summary =
            export_to_writer(FEATURES, &options, &mut buf, "buffer").expect("export to writer");

        let written = fs::read(&path).expect("read back");
        assert_eq!(written, buf);
        assert_eq!(file_summary.bytes, writer_summary.bytes);
        assert!(buf.ends_with(b"</html>\n"));
    }

    #[test]
    fn unwritable_target_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").expect("write blocker");

        let err = export_to_path(FEATURES, &RenderOptions::default(), &blocker.join("index.html"))
            .expect_err("parent is a file");
        assert!(matches!(err, ExportError::CreateDir { .. }));
    }
}

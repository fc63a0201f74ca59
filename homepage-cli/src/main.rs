//! # agent-homepage
//!
//! Renders the developer platform home page to a file or stdout.
//!
//! ```bash
//! agent-homepage --output build/index.html
//! agent-homepage --format json | jq '.tiers[].titles'
//! agent-homepage --config homepage.toml --log-level debug
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use homepage_leptos::catalog::FEATURES;
use homepage_leptos::{export, OutputFormat, RenderOptions};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "agent-homepage")]
#[command(about = "Render the llama-cpp-agent developer platform home page")]
#[command(version)]
struct Args {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (document, fragment, json)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// TOML file with render options; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Defaults, then the config file, then flags.
    fn resolve(&self) -> Result<RenderOptions> {
        let mut options = match &self.config {
            Some(path) => RenderOptions::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => RenderOptions::default(),
        };
        if let Some(output) = &self.output {
            options.output = Some(output.clone());
        }
        if let Some(format) = self.format {
            options.format = format;
        }
        if let Some(title) = &self.title {
            options.title = title.clone();
        }
        Ok(options)
    }
}

fn run(args: &Args) -> Result<()> {
    let options = args.resolve()?;
    info!(
        format = %options.format,
        records = FEATURES.len(),
        "rendering home page"
    );

    let summary = export(FEATURES, &options).context("exporting home page")?;
    let [basics, build, explore] = summary.tier_sizes;
    info!(basics, build, explore, "tiers rendered");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries the page, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_document_on_stdout() {
        let args = Args::try_parse_from(["agent-homepage"]).expect("parse");
        let options = args.resolve().expect("resolve");

        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = dir.path().join("homepage.toml");
        std::fs::write(&config, "title = \"From file\"\nformat = \"fragment\"\n")
            .expect("write config");

        let args = Args::try_parse_from([
            "agent-homepage",
            "--config",
            config.to_str().expect("utf-8 path"),
            "--format",
            "json",
        ])
        .expect("parse");
        let options = args.resolve().expect("resolve");

        assert_eq!(options.title, "From file");
        assert_eq!(options.format, OutputFormat::Json);
        assert_eq!(options.output, None);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["agent-homepage", "--format", "pdf"]).is_err());
    }

    #[test]
    fn missing_config_fails_with_context() {
        let args = Args::try_parse_from(["agent-homepage", "--config", "/nonexistent.toml"])
            .expect("parse");
        let err = args.resolve().expect_err("missing config");

        assert!(format!("{err:#}").contains("loading config"));
    }

    #[test]
    fn run_writes_output_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("index.html");
        let args = Args::try_parse_from([
            "agent-homepage",
            "--output",
            output.to_str().expect("utf-8 path"),
            "--title",
            "Agent docs",
        ])
        .expect("parse");

        run(&args).expect("run");
        let html = std::fs::read_to_string(&output).expect("read output");
        assert!(html.contains("<title>Agent docs</title>"));
    }
}

//! omni-edit CLI: apply one edit request to one file.
//!
//! Reads the request JSON from `--request <path>` (or `-` for stdin), takes
//! `content` from `--file`, and prints a summary or the JSON result.
//! `--write` persists the code only when the edit applied.
//!
//! Logging: set `RUST_LOG=omni_edit=debug` to see engine events on stderr.

mod cli;

use std::io::Read as _;
use std::path::Path;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use omni_edit::{AstEditor, EditConfig, EditRequest};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing: RUST_LOG overrides; --verbose => debug; else info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "omni_edit=debug"
        } else {
            "omni_edit=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = load_config(&cli)?;
    let request_json = read_request(&cli.request)?;
    let request = EditRequest::from_json(&request_json).context("invalid edit request")?;

    let edit = AstEditor::with_config(config).edit_file(&cli.file, &request, cli.write)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&edit.result)?);
    } else {
        let path = cli.file.display().to_string();
        print!(
            "{}",
            AstEditor::format_result(&edit.original, &edit.result, Some(&path))
        );
    }
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<EditConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => EditConfig::default(),
    };
    if let Some(max_bytes) = cli.max_bytes {
        config.max_content_bytes = max_bytes;
    }
    if let Some(lines) = cli.max_preview_lines {
        config.max_preview_lines = lines;
    }
    if let Some(quote) = cli.quote {
        config.print.quote_style = quote.into();
    }
    Ok(config)
}

fn read_config(path: &Path) -> anyhow::Result<EditConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn read_request(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read request from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("failed to read request {source}"))
    }
}

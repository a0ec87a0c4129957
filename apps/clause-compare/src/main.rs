//! Clause comparison CLI
//!
//! Compares two plain-text versions of an agreement and prints the risk
//! report as JSON or as readable text.

mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use clause_diff::{enhance_diffs, DiffEngine, EngineConfig, TemplateExplainer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "clause-compare")]
#[command(version, about = "Compare two versions of an agreement clause by clause")]
struct Args {
    /// Original version (plain text)
    file_a: PathBuf,

    /// Revised version (plain text)
    file_b: PathBuf,

    /// Engine configuration (TOML); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Attach plain-language explanations and suggestions to each diff
    #[arg(long)]
    explain: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let original = read_document(&args.file_a)?;
    let revised = read_document(&args.file_b)?;

    tracing::info!(
        original = %args.file_a.display(),
        revised = %args.file_b.display(),
        "comparing documents"
    );

    let engine = DiffEngine::with_config(config);
    tracing::debug!(
        materiality_threshold = engine.config().matching.materiality_threshold,
        acceptance_floor = engine.config().matching.acceptance_floor,
        "engine configured"
    );
    let mut report = engine
        .compare(&original, &revised)
        .context("Comparison failed")?;

    if args.explain {
        enhance_diffs(&mut report.diffs, &TemplateExplainer::new());
    }

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", render::render_text(&report)),
    }

    Ok(())
}

fn read_document(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if text.trim().is_empty() {
        bail!("{} is empty", path.display());
    }
    Ok(text)
}

mod batch;
mod config;
mod errors;
mod extract;
mod parser;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::batch::{run_batch, summarize};
use crate::config::{Config, Overrides};
use crate::parser::ResumeParser;
use crate::report::{render, OutputFormat};

#[derive(Parser)]
#[command(
    name = "resume-scraper",
    version,
    about = "Extract applicant identity and dated sections from a folder of résumés"
)]
struct Cli {
    /// Folder of .pdf / .docx résumés (default: $RESUME_DIR or ./static/)
    dir: Option<PathBuf>,

    /// Report format: text or json (default: $OUTPUT_FORMAT or text)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Exit with a failure status if any file could not be parsed
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env(Overrides {
        resume_dir: cli.dir,
        output_format: cli.format,
    })?;

    // Logs go to stderr so stdout stays a clean report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let t0 = Instant::now();
    let parser = ResumeParser::new().context("Failed to compile résumé patterns")?;
    let outcomes = run_batch(&config.resume_dir, &parser)?;

    let rendered = render(config.output_format, &outcomes).context("Failed to render report")?;
    print!("{rendered}");

    let summary = summarize(&outcomes);
    info!(
        "{} files: {} parsed, {} failed in {:.1}s",
        summary.total,
        summary.parsed,
        summary.failed,
        t0.elapsed().as_secs_f64()
    );

    if cli.strict && summary.failed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

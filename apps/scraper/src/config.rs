use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::report::OutputFormat;

const DEFAULT_RESUME_DIR: &str = "./static/";

/// Scraper configuration loaded from environment variables (and `.env`).
/// Every value has a default; CLI arguments override what is loaded here.
#[derive(Debug, Clone)]
pub struct Config {
    pub resume_dir: PathBuf,
    pub output_format: OutputFormat,
    pub rust_log: String,
}

/// Values given on the command line. A value set here wins over the
/// environment, and the matching variable is not read at all.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub resume_dir: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
}

impl Config {
    pub fn from_env(overrides: Overrides) -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::resolve(|key| std::env::var(key).ok(), overrides)
    }

    fn resolve(var: impl Fn(&str) -> Option<String>, overrides: Overrides) -> Result<Self> {
        let resume_dir = match overrides.resume_dir {
            Some(dir) => dir,
            None => var("RESUME_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESUME_DIR)),
        };

        let output_format = match overrides.output_format {
            Some(format) => format,
            None => var("OUTPUT_FORMAT")
                .unwrap_or_else(|| "text".to_string())
                .parse::<OutputFormat>()
                .context("OUTPUT_FORMAT must be 'text' or 'json'")?,
        };

        Ok(Config {
            resume_dir,
            output_format,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resume_dir: PathBuf::from(DEFAULT_RESUME_DIR),
            output_format: OutputFormat::Text,
            rust_log: "info".to_string(),
        }
    }
}

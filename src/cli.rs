//! CLI interface for the candidate matcher

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "candidate-matcher")]
#[command(about = "Score and rank candidate profiles against a job requirement")]
#[command(long_about = "Score candidate profiles against a job requirement on certifications, skills, education and experience, then keep and rank the candidates that qualify")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every candidate against a job requirement
    Score {
        /// Path to candidate profile(s) (JSON, TOML)
        #[arg(short = 'C', long)]
        candidate: PathBuf,

        /// Path to job requirement (JSON, TOML)
        #[arg(short, long)]
        job: PathBuf,

        /// Show per-criterion scores
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Keep qualifying candidates and order them best first
    Rank {
        /// Path to candidate profiles (JSON, TOML)
        #[arg(short = 'C', long)]
        candidates: PathBuf,

        /// Path to job requirement (JSON, TOML)
        #[arg(short, long)]
        job: PathBuf,

        /// Minimum normalized score (0-10) to qualify
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Show per-criterion scores
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

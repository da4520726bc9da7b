//! Candidate matcher: score and rank candidate profiles against a job requirement

use anyhow::Context;
use candidate_matcher::cli::{self, Cli, Commands, ConfigAction};
use candidate_matcher::config::{Config, OutputFormat, RankingConfig};
use candidate_matcher::input::manager::InputManager;
use candidate_matcher::output::formatter::{save_report_to_file, ReportGenerator};
use candidate_matcher::output::report::MatchReport;
use candidate_matcher::processing::ranker::CandidateRanker;
use candidate_matcher::processing::scorer::CandidateScorer;
use candidate_matcher::{CandidateProfile, JobRequirement};
use clap::Parser;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;

const INPUT_EXTENSIONS: &[&str] = &["json", "toml"];

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config) {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("reading configuration from {}", path.display())),
        None => Config::load().context("reading default configuration"),
    }
}

fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    match command {
        Commands::Score {
            candidate,
            job,
            detailed,
            output,
            save,
        } => {
            let (candidates, requirement) = load_inputs(&candidate, &job)?;
            info!("Scoring {} candidate(s)", candidates.len());

            let scorer = CandidateScorer::new(config.scoring.clone());
            let scored = candidates
                .iter()
                .map(|candidate| scorer.score(candidate, &requirement).map(|score| (candidate, score)))
                .collect::<candidate_matcher::Result<Vec<_>>>()
                .context("scoring candidates")?;

            let report = MatchReport::from_scores(&scored);
            emit(&report, &config, output.as_deref(), detailed, save.as_deref())?;
        }

        Commands::Rank {
            candidates,
            job,
            threshold,
            detailed,
            output,
            save,
        } => {
            let (candidates, requirement) = load_inputs(&candidates, &job)?;

            let ranking = RankingConfig {
                qualify_threshold: threshold.unwrap_or(config.ranking.qualify_threshold),
            };
            let ranker = CandidateRanker::new(config.scoring.clone(), ranking);
            let ranked = ranker
                .rank(&candidates, &requirement)
                .context("ranking candidates")?;

            let report = MatchReport::from_ranking(&ranked, candidates.len(), ranker.qualify_threshold());
            emit(&report, &config, output.as_deref(), detailed, save.as_deref())?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config).context("serializing configuration")?;
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                let path = config_path.unwrap_or_else(Config::config_path);
                Config::default()
                    .save_to(&path)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Configuration reset: {}", path.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.unwrap_or_else(Config::config_path).display());
            }
        },
    }

    Ok(())
}

fn load_inputs(candidates: &Path, job: &Path) -> anyhow::Result<(Vec<CandidateProfile>, JobRequirement)> {
    cli::validate_file_extension(candidates, INPUT_EXTENSIONS)
        .map_err(|e| anyhow::anyhow!("Candidates file: {}", e))?;
    cli::validate_file_extension(job, INPUT_EXTENSIONS)
        .map_err(|e| anyhow::anyhow!("Job requirement file: {}", e))?;

    let input_manager = InputManager::new();
    let candidates = input_manager
        .load_candidates(candidates)
        .with_context(|| format!("loading candidates from {}", candidates.display()))?;
    let requirement = input_manager
        .load_requirement(job)
        .with_context(|| format!("loading job requirement from {}", job.display()))?;

    Ok((candidates, requirement))
}

fn emit(
    report: &MatchReport,
    config: &Config,
    output: Option<&str>,
    detailed: bool,
    save: Option<&Path>,
) -> anyhow::Result<()> {
    let format = match output {
        Some(format) => cli::parse_output_format(format).map_err(anyhow::Error::msg)?,
        None => config.output.format,
    };

    // Saved console reports should not carry escape codes
    let use_colors = config.output.color_output && save.is_none() && format == OutputFormat::Console;
    let generator = ReportGenerator::with_options(use_colors, detailed || config.output.detailed, true);
    let content = generator.generate_report(report, format)?;

    match save {
        Some(path) => {
            save_report_to_file(&content, path).with_context(|| format!("saving report to {}", path.display()))?;
            info!("Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}

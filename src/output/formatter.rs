//! Output formatters for console and JSON presentation

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{MatchReport, ReportEntry, ReportKind};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors and per-criterion detail
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Report generator that dispatches to the formatter for a format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n{}\n", title)
        }
    }

    fn score_color(score: f64) -> Color {
        if score >= 9.0 {
            Color::Green
        } else if score >= 7.0 {
            Color::BrightGreen
        } else if score >= 5.0 {
            Color::Yellow
        } else {
            Color::Red
        }
    }

    fn format_entry(&self, entry: &ReportEntry) -> String {
        let score = format!("{:.2}/10", entry.normalized_score);
        let mut line = format!(
            "{:>3}. {} {} (raw {:.2} of {})",
            entry.position,
            self.colorize(&entry.name, Color::White),
            self.colorize(&score, Self::score_color(entry.normalized_score)),
            entry.raw_score,
            entry.max_score
        );

        if let Some(title) = &entry.title {
            line.push_str(&format!(" - {}", title));
        }
        line.push('\n');

        if self.detailed {
            for criterion in &entry.criteria {
                line.push_str(&format!(
                    "       • {}: {:.2} / {}\n",
                    criterion.criterion, criterion.contribution, criterion.weight
                ));
            }
        }

        line
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        let title = match report.kind {
            ReportKind::Scores => "CANDIDATE SCORES",
            ReportKind::Ranking => "QUALIFIED CANDIDATES",
        };
        output.push_str(&self.format_header(title));
        output.push_str(&format!(
            "Generated: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        if let Some(threshold) = report.qualify_threshold {
            output.push_str(&format!(
                "{} of {} candidates at or above {:.1}\n",
                report.entries.len(),
                report.evaluated,
                threshold
            ));
        }
        output.push('\n');

        if report.entries.is_empty() {
            output.push_str(&self.colorize("No candidates to show\n", Color::Yellow));
        }

        for entry in &report.entries {
            output.push_str(&self.format_entry(entry));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

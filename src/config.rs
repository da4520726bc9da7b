//! Configuration management for the candidate matcher

use crate::error::{MatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Minimum token-sort similarity (0-100) for a candidate degree to satisfy a required one
    pub education_min_similarity: u8,
    /// Cap every criterion's contribution at its weight. Off by default, so
    /// several matching required degrees can push education above 1.0.
    pub cap_subscores: bool,
    pub certification_threshold: CertificationThreshold,
}

/// How the similarity cut-off for certification matching is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum CertificationThreshold {
    /// `factor * total character length of all required certifications`,
    /// shared by every comparison. With long or numerous requirements the
    /// cut-off exceeds 100 and nothing can match.
    CombinedLength { factor: f64 },
    /// A fixed cut-off applied to each candidate/required pair
    PerPair { min_similarity: u8 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Candidates scoring below this (on the 0-10 scale) are dropped
    pub qualify_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            education_min_similarity: 80,
            cap_subscores: false,
            certification_threshold: CertificationThreshold::default(),
        }
    }
}

impl Default for CertificationThreshold {
    fn default() -> Self {
        CertificationThreshold::CombinedLength { factor: 0.8 }
    }
}

impl CertificationThreshold {
    /// Similarity cut-off for matching against `required` certifications
    pub fn threshold_for(&self, required: &[String]) -> f64 {
        match *self {
            CertificationThreshold::CombinedLength { factor } => {
                let total_chars: usize = required.iter().map(|c| c.chars().count()).sum();
                factor * total_chars as f64
            }
            CertificationThreshold::PerPair { min_similarity } => f64::from(min_similarity),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            qualify_threshold: 7.0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first use
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| MatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| MatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("candidate-matcher")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if !self.ranking.qualify_threshold.is_finite() {
            return Err(MatcherError::Configuration(
                "ranking.qualify_threshold must be a finite number".to_string(),
            ));
        }
        if self.scoring.education_min_similarity > 100 {
            return Err(MatcherError::Configuration(
                "scoring.education_min_similarity must be between 0 and 100".to_string(),
            ));
        }
        match self.scoring.certification_threshold {
            CertificationThreshold::CombinedLength { factor } if !factor.is_finite() || factor < 0.0 => {
                Err(MatcherError::Configuration(
                    "certification threshold factor must be a non-negative number".to_string(),
                ))
            }
            CertificationThreshold::PerPair { min_similarity } if min_similarity > 100 => {
                Err(MatcherError::Configuration(
                    "certification min_similarity must be between 0 and 100".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ranking.qualify_threshold, 7.0);
        assert_eq!(config.scoring.education_min_similarity, 80);
        assert!(!config.scoring.cap_subscores);
        assert_eq!(
            config.scoring.certification_threshold,
            CertificationThreshold::CombinedLength { factor: 0.8 }
        );
    }

    #[test]
    fn test_combined_length_threshold() {
        let required = vec!["PMI Agile Certified Practitioner".to_string()];
        let threshold = CertificationThreshold::default().threshold_for(&required);
        assert!((threshold - 25.6).abs() < 1e-9);

        let per_pair = CertificationThreshold::PerPair { min_similarity: 80 };
        assert_eq!(per_pair.threshold_for(&required), 80.0);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [scoring]
            cap_subscores = true

            [scoring.certification_threshold]
            policy = "per_pair"
            min_similarity = 85
            "#,
        )
        .unwrap();

        assert!(config.scoring.cap_subscores);
        assert_eq!(config.scoring.education_min_similarity, 80);
        assert_eq!(
            config.scoring.certification_threshold,
            CertificationThreshold::PerPair { min_similarity: 85 }
        );
        assert_eq!(config.ranking.qualify_threshold, 7.0);
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.ranking.qualify_threshold = 6.5;
        config.output.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_rejects_out_of_range_similarity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\neducation_min_similarity = 120\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, MatcherError::Configuration(_)));
    }
}

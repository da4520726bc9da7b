//! Error handling for the candidate matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Degenerate job requirement: no certifications, skills, education or experience specified")]
    DegenerateRequirement,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MatcherError>;

impl From<toml::de::Error> for MatcherError {
    fn from(err: toml::de::Error) -> Self {
        MatcherError::TomlParse(err.to_string())
    }
}

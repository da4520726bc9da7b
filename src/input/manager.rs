//! Input manager for loading candidate profiles and job requirements

use crate::error::{MatcherError, Result};
use crate::input::file_detector::FileType;
use crate::model::{CandidateProfile, JobRequirement};
use log::info;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// A candidates file holds a list, a `candidates` table array, or a single profile
#[derive(Deserialize)]
#[serde(untagged)]
enum CandidateDocument {
    List(Vec<CandidateProfile>),
    Wrapped { candidates: Vec<CandidateProfile> },
    Single(CandidateProfile),
}

impl From<CandidateDocument> for Vec<CandidateProfile> {
    fn from(document: CandidateDocument) -> Self {
        match document {
            CandidateDocument::List(candidates) | CandidateDocument::Wrapped { candidates } => candidates,
            CandidateDocument::Single(candidate) => vec![candidate],
        }
    }
}

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub fn load_candidates(&self, path: &Path) -> Result<Vec<CandidateProfile>> {
        let document: CandidateDocument = self.read_document(path)?;
        let candidates: Vec<CandidateProfile> = document.into();
        info!("Loaded {} candidate(s) from {}", candidates.len(), path.display());
        Ok(candidates)
    }

    pub fn load_requirement(&self, path: &Path) -> Result<JobRequirement> {
        let requirement = self.read_document(path)?;
        info!("Loaded job requirement from {}", path.display());
        Ok(requirement)
    }

    fn read_document<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        // Validate file exists
        if !path.exists() {
            return Err(MatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, file_type, path)
    }

    fn parse<T: DeserializeOwned>(content: &str, file_type: FileType, path: &Path) -> Result<T> {
        match file_type {
            FileType::Json => Ok(serde_json::from_str(content)?),
            FileType::Toml => Ok(toml::from_str(content)?),
            FileType::Unknown => Err(MatcherError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))),
        }
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                MatcherError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_candidates(content: &str, file_type: FileType) -> Vec<CandidateProfile> {
        let document: CandidateDocument =
            InputManager::parse(content, file_type, Path::new("inline")).unwrap();
        document.into()
    }

    #[test]
    fn test_candidate_document_shapes() {
        let list = parse_candidates(r#"[{ "candidate_name": "A" }, { "candidate_name": "B" }]"#, FileType::Json);
        assert_eq!(list.len(), 2);

        let wrapped = parse_candidates(r#"{ "candidates": [{ "candidate_name": "A" }] }"#, FileType::Json);
        assert_eq!(wrapped.len(), 1);

        let single = parse_candidates(r#"{ "candidate_name": "Solo", "certifications": [] }"#, FileType::Json);
        assert_eq!(single[0].display_name(), "Solo");
    }

    #[test]
    fn test_toml_candidates() {
        let candidates = parse_candidates(
            r#"
            [[candidates]]
            candidate_name = "Jane"
            certifications = ["CKA"]

            [[candidates.work_exp]]
            work_timeline = [2016, "Present"]

            [candidates.skills]
            Rust = 6
            "#,
            FileType::Toml,
        );

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].skills.get("Rust"), Some(&6));
        assert!(candidates[0].work_experience[0].timeline.is_open_ended());
    }

    #[test]
    fn test_unknown_format() {
        let result: Result<JobRequirement> = InputManager::parse("{}", FileType::Unknown, Path::new("job.xyz"));
        assert!(matches!(result, Err(MatcherError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let manager = InputManager::new();
        let result = manager.load_requirement(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(MatcherError::InvalidInput(_))));
    }
}

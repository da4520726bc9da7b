//! Job requirement structures

use crate::model::wire::{deserialize_degrees, deserialize_skills};
use serde::Deserialize;
use std::collections::BTreeMap;

/// What a job asks for. Every field is optional; an empty field leaves the
/// matching criterion inactive.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JobRequirement {
    #[serde(default)]
    pub certifications: Vec<String>,

    /// Skill name to minimum years of experience
    #[serde(default, deserialize_with = "deserialize_skills")]
    pub skills: BTreeMap<String, u32>,

    /// Required degree titles
    #[serde(default, deserialize_with = "deserialize_degrees")]
    pub education: Vec<String>,

    /// Required total years of experience
    #[serde(default)]
    pub experience: Option<u32>,
}

impl JobRequirement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_certification(mut self, certification: impl Into<String>) -> Self {
        self.certifications.push(certification.into());
        self
    }

    pub fn with_skill(mut self, skill: impl Into<String>, min_years: u32) -> Self {
        self.skills.insert(skill.into(), min_years);
        self
    }

    pub fn with_degree(mut self, degree: impl Into<String>) -> Self {
        self.education.push(degree.into());
        self
    }

    pub fn with_experience(mut self, years: u32) -> Self {
        self.experience = Some(years);
        self
    }

    /// Required years of experience, treating zero as unspecified
    pub fn required_experience(&self) -> Option<u32> {
        self.experience.filter(|&years| years > 0)
    }

    /// True when no criterion would be active
    pub fn is_degenerate(&self) -> bool {
        self.certifications.is_empty()
            && self.skills.is_empty()
            && self.education.is_empty()
            && self.required_experience().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_reference_shape() {
        let json = r#"{
            "certifications": ["PMI Agile Certified Practitioner"],
            "skills": [
                { "skill_name": "JavaScript", "yoe": 3 },
                { "skill_name": "React", "yoe": 2 }
            ],
            "education": [
                {
                    "edu_degree": "Bachelor of Marketing in International Business",
                    "edu_degree": "Bachelor of Science in Computer Science"
                },
                "Master of Science"
            ],
            "experience": 10
        }"#;

        let requirement: JobRequirement = serde_json::from_str(json).unwrap();

        assert_eq!(requirement.certifications.len(), 1);
        assert_eq!(requirement.skills.get("React"), Some(&2));
        assert_eq!(
            requirement.education,
            vec!["Bachelor of Science in Computer Science", "Master of Science"]
        );
        assert_eq!(requirement.required_experience(), Some(10));
        assert!(!requirement.is_degenerate());
    }

    #[test]
    fn test_empty_requirement_is_degenerate() {
        let requirement: JobRequirement = serde_json::from_str("{}").unwrap();
        assert!(requirement.is_degenerate());
    }

    #[test]
    fn test_zero_experience_is_unspecified() {
        let requirement = JobRequirement::new().with_experience(0);
        assert_eq!(requirement.required_experience(), None);
        assert!(requirement.is_degenerate());
    }
}

//! Candidate profile structures

use crate::model::timeline::WorkTimeline;
use crate::model::wire::deserialize_skills;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CandidateProfile {
    #[serde(default, rename = "candidate_name")]
    pub name: Option<String>,

    #[serde(default, rename = "candidate_title")]
    pub title: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub certifications: Vec<String>,

    /// Skill name to years of experience
    #[serde(default, deserialize_with = "deserialize_skills")]
    pub skills: BTreeMap<String, u32>,

    #[serde(default)]
    pub education: Vec<EducationRecord>,

    #[serde(default, rename = "work_exp")]
    pub work_experience: Vec<WorkRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EducationRecord {
    #[serde(default, rename = "edu_degree")]
    pub degree: String,

    #[serde(default, rename = "edu_school")]
    pub school: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WorkRecord {
    #[serde(default, rename = "work_timeline")]
    pub timeline: WorkTimeline,

    #[serde(default, rename = "work_company")]
    pub company: Option<String>,

    #[serde(default, rename = "work_title")]
    pub title: Option<String>,
}

impl CandidateProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_certification(mut self, certification: impl Into<String>) -> Self {
        self.certifications.push(certification.into());
        self
    }

    pub fn with_skill(mut self, skill: impl Into<String>, years: u32) -> Self {
        self.skills.insert(skill.into(), years);
        self
    }

    pub fn with_degree(mut self, degree: impl Into<String>) -> Self {
        self.education.push(EducationRecord {
            degree: degree.into(),
            school: None,
        });
        self
    }

    pub fn with_work(mut self, timeline: WorkTimeline) -> Self {
        self.work_experience.push(WorkRecord {
            timeline,
            ..WorkRecord::default()
        });
        self
    }

    /// Display name, falling back to a placeholder for anonymous profiles
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed candidate)")
    }

    pub fn degrees(&self) -> impl Iterator<Item = &str> {
        self.education.iter().map(|record| record.degree.as_str())
    }
}

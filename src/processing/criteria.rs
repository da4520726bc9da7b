//! The four independent matching criteria
//!
//! Each criterion is a pure function of the relevant slice of the candidate
//! profile and job requirement. It returns `None` when the requirement does
//! not ask for anything on that dimension, otherwise the partial score it
//! contributes together with the weight it adds to the maximum attainable
//! score.

use crate::config::CertificationThreshold;
use crate::model::{EducationRecord, WorkRecord, WorkTimeline};
use crate::processing::fuzzy;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criterion {
    Certifications,
    Skills,
    Education,
    Experience,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Certifications => write!(f, "Certifications"),
            Criterion::Skills => write!(f, "Skills"),
            Criterion::Education => write!(f, "Education"),
            Criterion::Experience => write!(f, "Experience"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub contribution: f64,
    pub weight: u32,
}

impl CriterionScore {
    pub fn new(contribution: f64, weight: u32) -> Self {
        Self { contribution, weight }
    }

    /// Clamp the contribution to the weight
    pub fn capped(self) -> Self {
        Self {
            contribution: self.contribution.min(f64::from(self.weight)),
            ..self
        }
    }
}

/// Fraction of required certifications held by the candidate.
pub fn score_certifications(
    held: &[String],
    required: &[String],
    policy: &CertificationThreshold,
) -> Option<CriterionScore> {
    if required.is_empty() {
        return None;
    }

    let threshold = policy.threshold_for(required);
    let matched = required
        .iter()
        .filter(|cert| fuzzy::any_matches(cert, held.iter().map(String::as_str), threshold))
        .count();

    debug!(
        "Certifications: {}/{} matched at threshold {:.1}",
        matched,
        required.len(),
        threshold
    );

    Some(CriterionScore::new(matched as f64 / required.len() as f64, 1))
}

/// Sum of `min(held / required, 1)` over every required skill; one weight per skill.
pub fn score_skills(held: &BTreeMap<String, u32>, required: &BTreeMap<String, u32>) -> Option<CriterionScore> {
    if required.is_empty() {
        return None;
    }

    let total: f64 = required
        .iter()
        .map(|(skill, &required_years)| {
            let held_years = held.get(skill).copied().unwrap_or(0);
            skill_ratio(held_years, required_years)
        })
        .sum();

    Some(CriterionScore::new(total, required.len() as u32))
}

fn skill_ratio(held_years: u32, required_years: u32) -> f64 {
    if required_years == 0 {
        return 1.0;
    }
    (f64::from(held_years) / f64::from(required_years)).min(1.0)
}

/// One point for every required degree that some held degree resembles.
///
/// The weight stays 1 however many degrees are required, so a candidate
/// matching two required degrees contributes 2.0.
pub fn score_education(
    held: &[EducationRecord],
    required: &[String],
    min_similarity: u8,
) -> Option<CriterionScore> {
    if required.is_empty() {
        return None;
    }

    let threshold = f64::from(min_similarity);
    let matched = required
        .iter()
        .filter(|degree| {
            fuzzy::any_matches(degree, held.iter().map(|record| record.degree.as_str()), threshold)
        })
        .count();

    Some(CriterionScore::new(matched as f64, 1))
}

/// Years between the earliest start and the latest end across all work records.
///
/// Absent and malformed timelines are skipped; `None` if no record has a usable timeline.
pub fn experience_span(work: &[WorkRecord], current_year: i32) -> Option<u32> {
    let (earliest, latest) = work
        .iter()
        .filter_map(|record| {
            if record.timeline == WorkTimeline::Malformed {
                debug!(
                    "Skipping malformed work timeline at {}",
                    record.company.as_deref().unwrap_or("unknown company")
                );
            }
            record.timeline.bounds(current_year)
        })
        .fold(None, |acc: Option<(i32, i32)>, (start, end)| match acc {
            None => Some((start, end)),
            Some((earliest, latest)) => Some((earliest.min(start), latest.max(end))),
        })?;

    let years = (i64::from(latest) - i64::from(earliest)).max(0);
    Some(u32::try_from(years).unwrap_or(u32::MAX))
}

/// Share of the required experience covered by the candidate's span, capped at 1.
pub fn score_experience(
    work: &[WorkRecord],
    required_years: Option<u32>,
    current_year: i32,
) -> Option<CriterionScore> {
    let required_years = required_years.filter(|&years| years > 0)?;

    let contribution = match experience_span(work, current_year) {
        Some(years) if years <= required_years => f64::from(years) / f64::from(required_years),
        Some(_) => 1.0,
        None => 0.0,
    };

    Some(CriterionScore::new(contribution, 1))
}

//! Aggregates the criterion scores into one normalized fitness score

use crate::config::ScoringConfig;
use crate::error::{MatcherError, Result};
use crate::model::{CandidateProfile, JobRequirement};
use crate::processing::clock::{Clock, SystemClock};
use crate::processing::criteria::{self, Criterion, CriterionScore};
use log::debug;
use serde::{Deserialize, Serialize};

/// Upper end of the normalized scale
pub const SCORE_SCALE: f64 = 10.0;

/// Per-criterion partial scores; `None` marks an inactive criterion
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub certifications: Option<CriterionScore>,
    pub skills: Option<CriterionScore>,
    pub education: Option<CriterionScore>,
    pub experience: Option<CriterionScore>,
}

impl ScoreBreakdown {
    /// Active criteria in evaluation order
    pub fn active(&self) -> impl Iterator<Item = (Criterion, CriterionScore)> {
        [
            (Criterion::Certifications, self.certifications),
            (Criterion::Skills, self.skills),
            (Criterion::Education, self.education),
            (Criterion::Experience, self.experience),
        ]
        .into_iter()
        .filter_map(|(criterion, score)| score.map(|score| (criterion, score)))
    }

    pub fn raw_score(&self) -> f64 {
        self.active().map(|(_, score)| score.contribution).sum()
    }

    pub fn max_score(&self) -> u32 {
        self.active().map(|(_, score)| score.weight).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub raw_score: f64,
    pub max_score: u32,
    /// `raw_score * 10 / max_score`
    pub normalized_score: f64,
    pub breakdown: ScoreBreakdown,
}

impl ScoreResult {
    fn from_breakdown(breakdown: ScoreBreakdown) -> Result<Self> {
        let max_score = breakdown.max_score();
        if max_score == 0 {
            return Err(MatcherError::DegenerateRequirement);
        }

        let raw_score = breakdown.raw_score();
        Ok(Self {
            raw_score,
            max_score,
            normalized_score: raw_score * SCORE_SCALE / f64::from(max_score),
            breakdown,
        })
    }

    /// `(normalized_score, max_score)`
    pub fn as_pair(&self) -> (f64, u32) {
        (self.normalized_score, self.max_score)
    }
}

/// Scores candidate profiles against a job requirement
#[derive(Debug, Clone)]
pub struct CandidateScorer<C: Clock = SystemClock> {
    config: ScoringConfig,
    clock: C,
}

impl CandidateScorer<SystemClock> {
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for CandidateScorer<SystemClock> {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl<C: Clock> CandidateScorer<C> {
    pub fn with_clock(config: ScoringConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Evaluate every active criterion and normalize onto the 0-10 scale.
    ///
    /// Fails with [`MatcherError::DegenerateRequirement`] when the requirement
    /// leaves all four criteria inactive.
    pub fn score(&self, candidate: &CandidateProfile, requirement: &JobRequirement) -> Result<ScoreResult> {
        let mut breakdown = self.breakdown(candidate, requirement);

        if self.config.cap_subscores {
            breakdown = ScoreBreakdown {
                certifications: breakdown.certifications.map(CriterionScore::capped),
                skills: breakdown.skills.map(CriterionScore::capped),
                education: breakdown.education.map(CriterionScore::capped),
                experience: breakdown.experience.map(CriterionScore::capped),
            };
        }

        let result = ScoreResult::from_breakdown(breakdown)?;
        debug!(
            "Scored {}: {:.3}/{} -> {:.2}",
            candidate.display_name(),
            result.raw_score,
            result.max_score,
            result.normalized_score
        );
        Ok(result)
    }

    fn breakdown(&self, candidate: &CandidateProfile, requirement: &JobRequirement) -> ScoreBreakdown {
        ScoreBreakdown {
            certifications: criteria::score_certifications(
                &candidate.certifications,
                &requirement.certifications,
                &self.config.certification_threshold,
            ),
            skills: criteria::score_skills(&candidate.skills, &requirement.skills),
            education: criteria::score_education(
                &candidate.education,
                &requirement.education,
                self.config.education_min_similarity,
            ),
            experience: criteria::score_experience(
                &candidate.work_experience,
                requirement.required_experience(),
                self.clock.current_year(),
            ),
        }
    }
}

/// Score with the default configuration and the system clock, returning
/// `(normalized_score, max_score)`.
pub fn score(candidate: &CandidateProfile, requirement: &JobRequirement) -> Result<(f64, u32)> {
    CandidateScorer::default()
        .score(candidate, requirement)
        .map(|result| result.as_pair())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WorkTimeline;
    use crate::processing::clock::FixedClock;

    fn scorer() -> CandidateScorer<FixedClock> {
        CandidateScorer::with_clock(ScoringConfig::default(), FixedClock(2024))
    }

    fn reference_candidate() -> CandidateProfile {
        CandidateProfile::new("John Doe")
            .with_certification("IELTS 9.0")
            .with_certification("2023: PMI Agile Certified Practitioner")
            .with_skill("JavaScript", 5)
            .with_skill("React", 3)
            .with_degree("Bachelor of Science in Computer Science")
            .with_work(WorkTimeline::Range(2018, Some(2023)))
            .with_work(WorkTimeline::Range(2015, Some(2018)))
    }

    fn reference_requirement() -> JobRequirement {
        JobRequirement::new()
            .with_certification("PMI Agile Certified Practitioner")
            .with_skill("JavaScript", 3)
            .with_skill("React", 2)
            .with_degree("Bachelor of Science in Computer Science")
            .with_experience(10)
    }

    #[test]
    fn test_reference_scenario() {
        let result = scorer().score(&reference_candidate(), &reference_requirement()).unwrap();

        // certifications 1 + skills 2 + education 1 + experience 0.8
        assert_eq!(result.max_score, 5);
        assert!((result.raw_score - 4.8).abs() < 1e-9);
        assert!((result.normalized_score - 9.6).abs() < 1e-9);
        assert_eq!(result.breakdown.active().count(), 4);
    }

    #[test]
    fn test_degenerate_requirement() {
        let err = scorer()
            .score(&reference_candidate(), &JobRequirement::new())
            .unwrap_err();
        assert!(matches!(err, MatcherError::DegenerateRequirement));

        let zero_experience = JobRequirement::new().with_experience(0);
        assert!(matches!(
            scorer().score(&reference_candidate(), &zero_experience),
            Err(MatcherError::DegenerateRequirement)
        ));
    }

    #[test]
    fn test_inactive_criteria_do_not_count() {
        let requirement = JobRequirement::new().with_skill("React", 3);
        let result = scorer().score(&reference_candidate(), &requirement).unwrap();

        assert_eq!(result.max_score, 1);
        assert_eq!(result.normalized_score, 10.0);
        assert!(result.breakdown.certifications.is_none());
        assert!(result.breakdown.experience.is_none());
    }

    #[test]
    fn test_single_skill_partial_credit() {
        let requirement = JobRequirement::new().with_skill("React", 3);
        let candidate = CandidateProfile::new("Junior").with_skill("React", 1);
        let (normalized, max_score) = scorer().score(&candidate, &requirement).unwrap().as_pair();

        assert_eq!(max_score, 1);
        assert!((normalized - 10.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_experience_only() {
        let requirement = JobRequirement::new().with_experience(10);
        let result = scorer().score(&reference_candidate(), &requirement).unwrap();
        assert!((result.normalized_score - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_open_ended_experience_uses_injected_clock() {
        let candidate = CandidateProfile::new("Current").with_work(WorkTimeline::Range(2019, None));
        let requirement = JobRequirement::new().with_experience(10);

        let early = CandidateScorer::with_clock(ScoringConfig::default(), FixedClock(2021));
        let late = CandidateScorer::with_clock(ScoringConfig::default(), FixedClock(2027));

        assert!((early.score(&candidate, &requirement).unwrap().normalized_score - 2.0).abs() < 1e-9);
        assert!((late.score(&candidate, &requirement).unwrap().normalized_score - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_education_over_count_exceeds_scale() {
        let requirement = JobRequirement::new()
            .with_degree("Bachelor of Science in Computer Science")
            .with_degree("Computer Science Bachelor of Science");

        let result = scorer().score(&reference_candidate(), &requirement).unwrap();
        assert_eq!(result.max_score, 1);
        assert_eq!(result.raw_score, 2.0);
        assert_eq!(result.normalized_score, 20.0);
    }

    #[test]
    fn test_cap_subscores_flag() {
        let config = ScoringConfig {
            cap_subscores: true,
            ..ScoringConfig::default()
        };
        let capped = CandidateScorer::with_clock(config, FixedClock(2024));
        let requirement = JobRequirement::new()
            .with_degree("Bachelor of Science in Computer Science")
            .with_degree("Computer Science Bachelor of Science");

        let result = capped.score(&reference_candidate(), &requirement).unwrap();
        assert_eq!(result.normalized_score, 10.0);
    }

    #[test]
    fn test_candidate_with_nothing_scores_zero() {
        let result = scorer()
            .score(&CandidateProfile::default(), &reference_requirement())
            .unwrap();

        assert_eq!(result.raw_score, 0.0);
        assert_eq!(result.max_score, 5);
        assert_eq!(result.normalized_score, 0.0);
    }

    #[test]
    fn test_free_function_uses_defaults() {
        let requirement = JobRequirement::new().with_skill("JavaScript", 5);
        let (normalized, max_score) = score(&reference_candidate(), &requirement).unwrap();
        assert_eq!((normalized, max_score), (10.0, 1));
    }
}

//! Threshold filtering and ordering of scored candidates

use crate::config::{RankingConfig, ScoringConfig};
use crate::error::Result;
use crate::model::{CandidateProfile, JobRequirement};
use crate::processing::clock::{Clock, SystemClock};
use crate::processing::scorer::{CandidateScorer, ScoreResult};
use log::{debug, info};

/// A qualifying candidate together with its score
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate<'a> {
    pub candidate: &'a CandidateProfile,
    pub score: ScoreResult,
}

impl RankedCandidate<'_> {
    pub fn normalized_score(&self) -> f64 {
        self.score.normalized_score
    }

    pub fn max_score(&self) -> u32 {
        self.score.max_score
    }
}

#[derive(Debug, Clone)]
pub struct CandidateRanker<C: Clock = SystemClock> {
    scorer: CandidateScorer<C>,
    config: RankingConfig,
}

impl CandidateRanker<SystemClock> {
    pub fn new(scoring: ScoringConfig, ranking: RankingConfig) -> Self {
        Self::with_scorer(CandidateScorer::new(scoring), ranking)
    }
}

impl Default for CandidateRanker<SystemClock> {
    fn default() -> Self {
        Self::new(ScoringConfig::default(), RankingConfig::default())
    }
}

impl<C: Clock> CandidateRanker<C> {
    pub fn with_scorer(scorer: CandidateScorer<C>, config: RankingConfig) -> Self {
        Self { scorer, config }
    }

    pub fn qualify_threshold(&self) -> f64 {
        self.config.qualify_threshold
    }

    /// Score every candidate, keep those at or above the qualifying threshold
    /// and order them best first.
    ///
    /// Ties keep their input order. The first scoring error aborts the whole
    /// batch; an empty batch never fails.
    pub fn rank<'a>(
        &self,
        candidates: &'a [CandidateProfile],
        requirement: &JobRequirement,
    ) -> Result<Vec<RankedCandidate<'a>>> {
        let threshold = self.config.qualify_threshold;
        let mut qualified = Vec::new();

        for candidate in candidates {
            let score = self.scorer.score(candidate, requirement)?;

            if score.normalized_score >= threshold {
                qualified.push(RankedCandidate { candidate, score });
            } else {
                debug!(
                    "Dropping {} ({:.2} < {:.2})",
                    candidate.display_name(),
                    score.normalized_score,
                    threshold
                );
            }
        }

        // Stable: equal scores stay in input order
        qualified.sort_by(|a, b| b.score.normalized_score.total_cmp(&a.score.normalized_score));

        info!(
            "{} of {} candidates qualified at threshold {:.1}",
            qualified.len(),
            candidates.len(),
            threshold
        );

        Ok(qualified)
    }
}

/// Rank with the default configuration and the system clock
pub fn rank<'a>(
    candidates: &'a [CandidateProfile],
    requirement: &JobRequirement,
) -> Result<Vec<RankedCandidate<'a>>> {
    CandidateRanker::default().rank(candidates, requirement)
}

//! Report structures for scoring and ranking runs

use crate::model::CandidateProfile;
use crate::processing::criteria::Criterion;
use crate::processing::ranker::RankedCandidate;
use crate::processing::scorer::ScoreResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    /// Every candidate scored, input order, no filtering
    Scores,
    /// Qualifying candidates only, best first
    Ranking,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub kind: ReportKind,

    /// Cut-off applied when ranking
    pub qualify_threshold: Option<f64>,

    /// How many candidates were scored
    pub evaluated: usize,

    pub entries: Vec<ReportEntry>,

    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    /// 1-based position in the report
    pub position: usize,
    pub name: String,
    pub title: Option<String>,
    pub normalized_score: f64,
    pub max_score: u32,
    pub raw_score: f64,
    pub criteria: Vec<CriterionLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionLine {
    pub criterion: Criterion,
    pub contribution: f64,
    pub weight: u32,
}

impl ReportEntry {
    fn new(position: usize, candidate: &CandidateProfile, score: &ScoreResult) -> Self {
        Self {
            position,
            name: candidate.display_name().to_string(),
            title: candidate.title.clone(),
            normalized_score: score.normalized_score,
            max_score: score.max_score,
            raw_score: score.raw_score,
            criteria: score
                .breakdown
                .active()
                .map(|(criterion, partial)| CriterionLine {
                    criterion,
                    contribution: partial.contribution,
                    weight: partial.weight,
                })
                .collect(),
        }
    }
}

impl MatchReport {
    pub fn from_scores(scored: &[(&CandidateProfile, ScoreResult)]) -> Self {
        Self {
            kind: ReportKind::Scores,
            qualify_threshold: None,
            evaluated: scored.len(),
            entries: scored
                .iter()
                .enumerate()
                .map(|(i, (candidate, score))| ReportEntry::new(i + 1, candidate, score))
                .collect(),
            generated_at: Utc::now(),
        }
    }

    pub fn from_ranking(ranked: &[RankedCandidate<'_>], evaluated: usize, qualify_threshold: f64) -> Self {
        Self {
            kind: ReportKind::Ranking,
            qualify_threshold: Some(qualify_threshold),
            evaluated,
            entries: ranked
                .iter()
                .enumerate()
                .map(|(i, ranked)| ReportEntry::new(i + 1, ranked.candidate, &ranked.score))
                .collect(),
            generated_at: Utc::now(),
        }
    }
}

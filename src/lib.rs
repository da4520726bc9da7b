//! Candidate matcher library
//!
//! Scores candidate profiles against a job requirement on four criteria
//! (certifications, skills, education, experience) and ranks the candidates
//! that reach a qualifying score.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{MatcherError, Result};
pub use model::{CandidateProfile, JobRequirement, WorkTimeline};
pub use processing::clock::{Clock, FixedClock, SystemClock};
pub use processing::ranker::{rank, CandidateRanker, RankedCandidate};
pub use processing::scorer::{score, CandidateScorer, ScoreResult};

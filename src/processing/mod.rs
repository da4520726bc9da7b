//! Candidate scoring and ranking

pub mod clock;
pub mod criteria;
pub mod fuzzy;
pub mod ranker;
pub mod scorer;

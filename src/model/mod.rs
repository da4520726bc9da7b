//! Candidate profiles, job requirements and the work timeline sum type

pub mod candidate;
pub mod requirement;
pub mod timeline;
mod wire;

pub use candidate::{CandidateProfile, EducationRecord, WorkRecord};
pub use requirement::JobRequirement;
pub use timeline::WorkTimeline;

//! Input processing module
//! Handles file detection and loading of candidate profiles and job requirements

pub mod file_detector;
pub mod manager;

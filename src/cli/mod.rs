//! Command-line entry layer
//!
//! Separates argument handling from the workflow itself so the run sequence
//! can be exercised programmatically in tests.

pub mod orchestration;

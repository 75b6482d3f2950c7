pub mod actions;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod conventional;
pub mod error;
pub mod git;
pub mod handoff;
pub mod ui;
pub mod version;

pub use error::{Result, VersionBumperError};

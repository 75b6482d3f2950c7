//! GitHub Actions runtime adapter.
//!
//! The workflow runner hands inputs to the step as `INPUT_*` environment
//! variables, delivers the triggering event as a JSON payload file, and
//! collects outputs through the file named by `GITHUB_OUTPUT`. This module
//! wraps those contracts so the rest of the crate never touches the process
//! environment directly.

use serde::Deserialize;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::boundary::BoundaryWarning;
use crate::error::{Result, VersionBumperError};
use crate::ui;

/// Read a workflow input.
///
/// Input names are mapped the way the runner maps them: spaces become
/// underscores, the name is uppercased and prefixed with `INPUT_`. The value
/// is trimmed; an empty value counts as absent.
pub fn get_input(name: &str) -> Option<String> {
    let key = format!("INPUT_{}", name.replace(' ', "_").to_uppercase());
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read a workflow input, failing with a configuration error when absent.
pub fn get_required_input(name: &str) -> Result<String> {
    get_input(name).ok_or_else(|| {
        VersionBumperError::config(format!("Input required and not supplied: {}", name))
    })
}

/// Read a boolean workflow input.
///
/// Accepts `true`/`false` case-insensitively; an absent input is `false`.
/// Any other value is a configuration error.
pub fn get_bool_input(name: &str) -> Result<bool> {
    match get_input(name) {
        None => Ok(false),
        Some(value) => match value.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(VersionBumperError::config(format!(
                "Input '{}' must be 'true' or 'false', got '{}'",
                name, other
            ))),
        },
    }
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequest>,
}

#[derive(Debug, Deserialize)]
struct PullRequest {
    title: Option<String>,
}

/// Read the pull request title from the workflow event payload.
///
/// A missing `GITHUB_EVENT_PATH`, a missing payload file, or a payload
/// without a pull request all yield `Ok(None)` - the caller decides whether
/// that deserves a diagnostic. An unreadable or malformed payload is a
/// configuration error.
pub fn pull_request_title() -> Result<Option<String>> {
    let path = match env::var("GITHUB_EVENT_PATH") {
        Ok(p) if !p.is_empty() => PathBuf::from(p),
        _ => return Ok(None),
    };

    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(&path).map_err(|e| {
        VersionBumperError::config(format!(
            "Cannot read event payload '{}': {}",
            path.display(),
            e
        ))
    })?;

    let payload: EventPayload = serde_json::from_str(&raw).map_err(|e| {
        VersionBumperError::config(format!(
            "Malformed event payload '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(payload.pull_request.and_then(|pr| pr.title))
}

/// Emit a workflow output as a `name=value` pair.
///
/// Appends to the file named by `GITHUB_OUTPUT`. When the variable is unset
/// (local runs), the pair is printed to stdout and a boundary warning names
/// the skipped sink; that is never fatal.
pub fn set_output(name: &str, value: &str) -> Result<()> {
    match env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.is_empty() => {
            let mut file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            writeln!(file, "{}={}", name, value)?;
            Ok(())
        }
        _ => {
            ui::display_boundary_warning(&BoundaryWarning::OutputUnavailable {
                name: name.to_string(),
            });
            println!("{}={}", name, value);
            Ok(())
        }
    }
}

/// Whether the process is running under a GitHub Actions runner.
pub fn is_actions_runtime() -> bool {
    env::var("GITHUB_ACTIONS").map(|v| v == "true").unwrap_or(false)
}

/// The checked-out workspace directory, when the runner provides one.
pub fn workspace_dir() -> Option<PathBuf> {
    env::var("GITHUB_WORKSPACE")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

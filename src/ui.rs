//! Pure display helpers for run output.
//!
//! The tool is non-interactive: everything here prints and returns. Under a
//! GitHub Actions runtime, errors and warnings are emitted as workflow
//! command annotations so they surface in the run summary; elsewhere they are
//! styled for a terminal.

use console::style;

use crate::actions;
use crate::boundary::BoundaryWarning;
use crate::version::{Version, VersionBump};

/// Escape message data for workflow command annotations.
///
/// Percent must be escaped first so already-escaped sequences survive.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Format and print an error message.
pub fn display_error(message: &str) {
    if actions::is_actions_runtime() {
        println!("::error::{}", escape_data(message));
    } else {
        eprintln!("{} {}", style("ERROR:").red().bold(), message);
    }
}

/// Format and print a warning message.
pub fn display_warning(message: &str) {
    if actions::is_actions_runtime() {
        println!("::warning::{}", escape_data(message));
    } else {
        eprintln!("{} {}", style("⚠ WARNING:").yellow().bold(), message);
    }
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the operator.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    display_warning(&warning.to_string());
}

/// Display the classified pull request title and the resulting bump category.
///
/// Long titles are truncated to keep the run log readable.
pub fn display_classification(title: &str, bump: VersionBump) {
    let shown = if title.is_empty() {
        "(empty)".to_string()
    } else if title.chars().count() > 60 {
        let truncated: String = title.chars().take(60).collect();
        format!("{}...", truncated)
    } else {
        title.to_string()
    };

    println!("PR title: {}", shown);
    display_status(&format!("Bump type determined: {}", bump));
}

/// Display the proposed version change (or that the version is unchanged).
pub fn display_proposed_version(current: Version, next: Version, bump: VersionBump) {
    if bump.requires_tag() {
        println!("\n{}", style("Proposed Version Change:").bold());
        println!("  From: {}", style(current).red());
        println!("  To:   {}", style(next).green());
    } else {
        println!(
            "\n{} {}",
            style("Version unchanged:").bold(),
            style(current).green()
        );
    }
}

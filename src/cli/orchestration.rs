//! Main workflow orchestration logic
//!
//! This module contains the run sequence: read and validate inputs, stage
//! and invoke the private core action, classify the pull request title,
//! compute the next version, perform the tagging side effect when required,
//! and emit the workflow outputs. It provides a clean separation between CLI
//! argument parsing and business logic.

use std::path::PathBuf;

use crate::actions;
use crate::boundary::BoundaryWarning;
use crate::config::{self, Config};
use crate::conventional;
use crate::error::{Result, VersionBumperError};
use crate::git::{Git2Repository, Repository};
use crate::handoff::{CoreAction, HandoffContext};
use crate::ui;
use crate::version::{Version, VersionBump};

/// Arguments for the run sequence
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// This decoupling allows the workflow to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Path to custom config file
    pub config_path: Option<String>,

    /// Baseline version, overriding the `initial_version` input
    pub initial_version: Option<String>,

    /// Pull request title, overriding the workflow event payload
    pub title: Option<String>,

    /// Repository to tag; defaults to GITHUB_WORKSPACE, then `.`
    pub workdir: Option<String>,

    /// Preview mode - don't clone, tag, push, or emit outputs
    pub dry_run: bool,
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// The bump category the title classified into
    pub bump: VersionBump,

    /// The computed next version
    pub new_version: Version,

    /// Whether a tag was created and pushed
    pub tagged: bool,
}

/// Classify a title against a validated baseline and compute the next version.
///
/// This is the whole core computation; everything around it is glue. The
/// baseline is validated here, before any side effect can run.
pub fn compute_next_version(baseline: &str, title: &str) -> Result<(VersionBump, Version)> {
    let current = Version::parse(baseline)?;
    let bump = conventional::determine_version_bump(title);

    Ok((bump, current.bump(bump)))
}

/// Create the annotated release tag and push it.
///
/// Sets the committer identity first so the annotated tag carries a tagger
/// signature. A tag that was created but failed to push stays in place; the
/// error is propagated as-is.
pub fn publish_tag<R: Repository>(repo: &R, config: &Config, version: Version) -> Result<()> {
    ui::display_status("Setting up git configuration...");
    repo.set_identity(&config.identity.name, &config.identity.email)?;

    let tag_name = config.tagging.tag_name(version);
    let message = config.tagging.tag_message(version);

    ui::display_status(&format!("Creating tag: {}", tag_name));
    let head = repo.head_oid()?;
    repo.create_annotated_tag(&tag_name, head, &message)?;

    ui::display_status("Pushing tag...");
    repo.push_tag(&config.tagging.remote, &tag_name)?;

    ui::display_success("Tag created and pushed successfully!");
    Ok(())
}

/// Main run sequence
///
/// Strict order, no concurrency:
/// 1. Load settings
/// 2. Pre-flight: credentials and inputs, then baseline validation - all
///    before any repository access
/// 3. Stage the core action and invoke it with the typed context
/// 4. Resolve the pull request title
/// 5. Classify and compute the next version
/// 6. Tag and push when the category requires it
/// 7. Emit the workflow outputs
pub fn run(args: RunArgs) -> anyhow::Result<RunSummary> {
    let config = config::load_config(args.config_path.as_deref())?;

    if args.dry_run {
        return dry_run(&args, &config);
    }

    // Pre-flight: everything that can fail by configuration fails here,
    // before the first repository access.
    let token = actions::get_required_input("token")?;
    let core_access_token = std::env::var("CORE_ACCESS_TOKEN")
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            VersionBumperError::config(
                "CORE_ACCESS_TOKEN environment variable is required. \
                 Please contact the action maintainer.",
            )
        })?;
    let baseline = resolve_baseline(&args)?;
    let force_initial = actions::get_bool_input("force_initial")?;

    ui::display_status("Validating inputs...");
    let current = Version::parse(&baseline)?;
    ui::display_status(&format!("Initial version: {}", current));
    ui::display_status(&format!("Force initial: {}", force_initial));

    let workdir = resolve_workdir(&args);

    // Stage the private core action and hand it the typed context.
    ui::display_status("Accessing private core action...");
    let core_action = CoreAction::from_config(&config.core_action);
    let checkout = core_action.stage(&core_access_token, &workdir)?;

    let context = HandoffContext {
        token: token.clone(),
        initial_version: baseline.clone(),
        force_initial,
    };

    ui::display_status("Running core version bump logic...");
    core_action.invoke(&checkout, &context)?;

    let title = resolve_title(&args)?;
    let bump = conventional::determine_version_bump(&title);
    let new_version = current.bump(bump);

    ui::display_classification(&title, bump);
    ui::display_proposed_version(current, new_version, bump);

    let tagged = if bump.requires_tag() {
        let repo = Git2Repository::open(&workdir)?.with_access_token(token);
        publish_tag(&repo, &config, new_version)?;
        true
    } else {
        ui::display_boundary_warning(&BoundaryWarning::NoVersionBump {
            title: title.clone(),
        });
        false
    };

    actions::set_output("new_version", &new_version.to_string())?;
    actions::set_output("bump_category", bump.name())?;

    ui::display_success(&format!(
        "Version bumping completed! New version: {}",
        new_version
    ));

    Ok(RunSummary {
        bump,
        new_version,
        tagged,
    })
}

/// Preview the run without side effects.
///
/// Validates the baseline, classifies the title, and prints the planned
/// steps. Credential checks, the clone, tagging, and output emission are
/// all skipped.
fn dry_run(args: &RunArgs, config: &Config) -> anyhow::Result<RunSummary> {
    let baseline = resolve_baseline(args)?;
    let current = Version::parse(&baseline)?;

    let title = resolve_title(args)?;
    let bump = conventional::determine_version_bump(&title);
    let new_version = current.bump(bump);

    ui::display_classification(&title, bump);
    ui::display_proposed_version(current, new_version, bump);

    ui::display_status("Dry run - no changes will be made:");
    if bump.requires_tag() {
        let tag_name = config.tagging.tag_name(new_version);
        ui::display_success(&format!(
            "  Step 1: would stage the core action from {}",
            config.core_action.repository
        ));
        ui::display_success(&format!(
            "  Step 2: would create annotated tag: {}",
            tag_name
        ));
        ui::display_success(&format!(
            "  Step 3: would push {} to {}",
            tag_name, config.tagging.remote
        ));
    } else {
        ui::display_success("  No tag would be created - bump category is none");
    }

    Ok(RunSummary {
        bump,
        new_version,
        tagged: false,
    })
}

fn resolve_baseline(args: &RunArgs) -> Result<String> {
    match &args.initial_version {
        Some(version) => Ok(version.clone()),
        None => actions::get_required_input("initial_version"),
    }
}

fn resolve_title(args: &RunArgs) -> Result<String> {
    if let Some(title) = &args.title {
        return Ok(title.clone());
    }

    match actions::pull_request_title()? {
        Some(title) => Ok(title),
        None => {
            ui::display_boundary_warning(&BoundaryWarning::MissingPullRequestContext);
            Ok(String::new())
        }
    }
}

fn resolve_workdir(args: &RunArgs) -> PathBuf {
    if let Some(dir) = &args.workdir {
        return PathBuf::from(dir);
    }

    actions::workspace_dir().unwrap_or_else(|| PathBuf::from("."))
}

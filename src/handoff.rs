//! Typed handoff to the private core action.
//!
//! The organization keeps its version bump follow-up logic in a private
//! repository. This step stages that repository and invokes its entry point
//! with a typed context mapped onto the `INPUT_*` environment variables the
//! core action expects. The invocation gets an explicit working directory;
//! the process-wide current directory is never changed.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::CoreActionConfig;
use crate::error::{Result, VersionBumperError};

/// Context information passed to the core action
#[derive(Debug, Clone, PartialEq)]
pub struct HandoffContext {
    /// User-supplied access token forwarded to the core action
    pub token: String,
    /// Validated baseline version string
    pub initial_version: String,
    /// Whether to force initial-version handling; semantics are delegated
    /// entirely to the core action
    pub force_initial: bool,
}

impl HandoffContext {
    /// Convert context to environment variables for the core action.
    ///
    /// Maps context fields to the INPUT_* variables the action reads.
    pub fn to_env_vars(&self) -> HashMap<String, String> {
        let mut env = HashMap::new();

        env.insert("INPUT_TOKEN".to_string(), self.token.clone());
        env.insert(
            "INPUT_INITIAL_VERSION".to_string(),
            self.initial_version.clone(),
        );
        env.insert(
            "INPUT_FORCE_INITIAL".to_string(),
            self.force_initial.to_string(),
        );

        env
    }
}

/// Stages and invokes the private core action
pub struct CoreAction {
    repository: String,
    checkout_dir: String,
    entry_point: String,
}

impl CoreAction {
    /// Create a core action handle
    pub fn new(
        repository: impl Into<String>,
        checkout_dir: impl Into<String>,
        entry_point: impl Into<String>,
    ) -> Self {
        CoreAction {
            repository: repository.into(),
            checkout_dir: checkout_dir.into(),
            entry_point: entry_point.into(),
        }
    }

    /// Create a core action handle from configuration
    pub fn from_config(config: &CoreActionConfig) -> Self {
        CoreAction::new(
            config.repository.clone(),
            config.checkout_dir.clone(),
            config.entry_point.clone(),
        )
    }

    /// Clone the core action repository into `parent_dir`.
    ///
    /// Authenticates as `x-access-token` with the provided token for HTTPS
    /// remotes. Single blocking call, no retry: any failure is the fatal
    /// auxiliary-repository-access error.
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - Path of the staged checkout
    /// * `Err` - If the clone fails
    pub fn stage(&self, access_token: &str, parent_dir: &Path) -> Result<PathBuf> {
        let target = parent_dir.join(&self.checkout_dir);
        let token = access_token.to_string();

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(move |_url, _username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::USER_PASS_PLAINTEXT) {
                return git2::Cred::userpass_plaintext("x-access-token", &token);
            }
            git2::Cred::default()
        });

        let mut fetch_options = git2::FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);

        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_options);

        builder.clone(&self.repository, &target).map_err(|e| {
            VersionBumperError::handoff(format!(
                "Cannot access core action repository '{}': {}",
                self.repository, e
            ))
        })?;

        Ok(target)
    }

    /// Run the entry point of a staged checkout with the given context.
    ///
    /// The context is passed as environment variables and the child runs
    /// with the checkout as its working directory. A missing entry point or
    /// a non-zero exit is a handoff error carrying the child's output.
    pub fn invoke(&self, checkout: &Path, context: &HandoffContext) -> Result<()> {
        let entry = checkout.join(&self.entry_point);

        if !entry.exists() {
            return Err(VersionBumperError::handoff(format!(
                "Core action entry point not found: {}",
                entry.display()
            )));
        }

        if !entry.is_file() {
            return Err(VersionBumperError::handoff(format!(
                "Core action entry point is not a file: {}",
                entry.display()
            )));
        }

        let mut cmd = Command::new(&entry);
        cmd.current_dir(checkout);

        for (key, value) in context.to_env_vars() {
            cmd.env(key, value);
        }

        let output = cmd.output().map_err(|e| {
            VersionBumperError::handoff(format!(
                "Failed to execute core action {}: {}",
                entry.display(),
                e
            ))
        })?;

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VersionBumperError::handoff(format!(
                "Core action {} failed with exit code {}\nStdout: {}\nStderr: {}",
                entry.display(),
                output.status.code().unwrap_or(-1),
                stdout,
                stderr
            )));
        }

        Ok(())
    }
}

use crate::error::{Result, VersionBumperError};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    access_token: Option<String>,
}

impl Git2Repository {
    /// Open or discover a git repository at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository {
            repo,
            access_token: None,
        })
    }

    /// Attach an access token used as `x-access-token` for HTTPS pushes
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

impl super::Repository for Git2Repository {
    fn head_oid(&self) -> Result<Oid> {
        let head = self.repo.head()?;

        head.target()
            .ok_or_else(|| VersionBumperError::tag("HEAD is detached or invalid".to_string()))
    }

    fn set_identity(&self, name: &str, email: &str) -> Result<()> {
        let mut config = self.repo.config()?;

        config.set_str("user.name", name)?;
        config.set_str("user.email", email)?;

        Ok(())
    }

    fn create_annotated_tag(&self, name: &str, target: Oid, message: &str) -> Result<Oid> {
        let object = self
            .repo
            .find_object(target, None)
            .map_err(|e| VersionBumperError::tag(format!("Cannot find object: {}", e)))?;

        let tagger = self
            .repo
            .signature()
            .map_err(|e| VersionBumperError::tag(format!("Cannot resolve tagger: {}", e)))?;

        let oid = self
            .repo
            .tag(name, &object, &tagger, message, false)
            .map_err(|e| VersionBumperError::tag(format!("Cannot create tag: {}", e)))?;

        Ok(oid)
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote)
            .map_err(|e| VersionBumperError::remote(format!("Cannot find remote: {}", e)))?;

        let mut push_options = git2::PushOptions::new();
        let mut callbacks = git2::RemoteCallbacks::new();

        callbacks.credentials(|_url, _username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::USER_PASS_PLAINTEXT) {
                if let Some(token) = &self.access_token {
                    return git2::Cred::userpass_plaintext("x-access-token", token);
                }
            }

            git2::Cred::default()
        });

        // Catch per-reference rejections during push
        callbacks.push_update_reference(|refname, status| {
            if let Some(status) = status {
                eprintln!(
                    "Warning: Could not update reference {}: {}",
                    refname, status
                );
                Err(git2::Error::from_str(&format!(
                    "Push failed for {}",
                    refname
                )))
            } else {
                Ok(())
            }
        });

        push_options.remote_callbacks(callbacks);

        let refspec = format!("refs/tags/{}:refs/tags/{}", tag_name, tag_name);

        match remote.push(&[refspec.as_str()], Some(&mut push_options)) {
            Ok(_) => Ok(()),
            Err(e) if e.class() == git2::ErrorClass::Net => Err(VersionBumperError::remote(
                format!("Network error during push: {}", e),
            )),
            Err(e) if e.class() == git2::ErrorClass::Reference => Err(
                VersionBumperError::remote(format!("Reference error during push: {}", e)),
            ),
            Err(e) => Err(VersionBumperError::remote(format!(
                "Failed to push tag '{}': {}",
                tag_name, e
            ))),
        }
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for Git2Repository {}

use crate::error::{Result, VersionBumperError};
use crate::git::Repository;
use git2::Oid;
use std::sync::Mutex;

/// A tag recorded by the mock repository
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedTag {
    pub name: String,
    pub target: Oid,
    pub message: String,
}

/// Mock repository for testing without actual git operations
///
/// Records identity, created tags, and pushes so tests can assert on the
/// exact side effects; failure injection covers the tag and push steps.
pub struct MockRepository {
    head: Oid,
    identity: Mutex<Option<(String, String)>>,
    created_tags: Mutex<Vec<CreatedTag>>,
    pushed_tags: Mutex<Vec<(String, String)>>,
    fail_tag: bool,
    fail_push: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            head: Oid::zero(),
            identity: Mutex::new(None),
            created_tags: Mutex::new(Vec::new()),
            pushed_tags: Mutex::new(Vec::new()),
            fail_tag: false,
            fail_push: false,
        }
    }

    /// Set the OID returned for HEAD
    pub fn with_head(mut self, oid: Oid) -> Self {
        self.head = oid;
        self
    }

    /// Make tag creation fail
    pub fn fail_on_tag(mut self) -> Self {
        self.fail_tag = true;
        self
    }

    /// Make pushes fail
    pub fn fail_on_push(mut self) -> Self {
        self.fail_push = true;
        self
    }

    /// Identity set through the trait, if any
    pub fn identity(&self) -> Option<(String, String)> {
        self.identity.lock().ok().and_then(|guard| guard.clone())
    }

    /// Tags created through the trait
    pub fn created_tags(&self) -> Vec<CreatedTag> {
        self.created_tags
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// `(remote, tag)` pairs pushed through the trait
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        self.pushed_tags
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_oid(&self) -> Result<Oid> {
        Ok(self.head)
    }

    fn set_identity(&self, name: &str, email: &str) -> Result<()> {
        let mut identity = self
            .identity
            .lock()
            .map_err(|_| VersionBumperError::tag("mock identity lock poisoned"))?;

        *identity = Some((name.to_string(), email.to_string()));
        Ok(())
    }

    fn create_annotated_tag(&self, name: &str, target: Oid, message: &str) -> Result<Oid> {
        if self.fail_tag {
            return Err(VersionBumperError::tag("Cannot create tag: injected failure"));
        }

        let mut tags = self
            .created_tags
            .lock()
            .map_err(|_| VersionBumperError::tag("mock tag lock poisoned"))?;

        tags.push(CreatedTag {
            name: name.to_string(),
            target,
            message: message.to_string(),
        });

        Ok(target)
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        if self.fail_push {
            return Err(VersionBumperError::remote(
                "Failed to push tag: injected failure",
            ));
        }

        let known = self.created_tags().iter().any(|tag| tag.name == tag_name);
        if !known {
            return Err(VersionBumperError::remote(format!(
                "Tag '{}' does not exist locally",
                tag_name
            )));
        }

        let mut pushes = self
            .pushed_tags
            .lock()
            .map_err(|_| VersionBumperError::remote("mock push lock poisoned"))?;

        pushes.push((remote.to_string(), tag_name.to_string()));
        Ok(())
    }
}

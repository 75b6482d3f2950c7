//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the git operations
//! the release workflow needs, allowing for a real implementation and a mock
//! implementation for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A recording mock implementation for testing
//!
//! # Usage
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations to enable easy testing.
//!
//! ```rust
//! # use version_bumper::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! repo.set_identity("github-actions[bot]", "github-actions[bot]@users.noreply.github.com")?;
//! let head = repo.head_oid()?;
//! repo.create_annotated_tag("1.2.0", head, "Release version 1.2.0")?;
//! repo.push_tag("origin", "1.2.0")?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Common git operation trait for abstraction
///
/// Abstracts the operations the tagging side effect needs so callers can be
/// exercised against [MockRepository](mock::MockRepository) in tests.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::VersionBumperError] variants.
pub trait Repository: Send + Sync {
    /// Get the OID of the commit at HEAD
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the HEAD commit
    /// * `Err` - If HEAD is unborn, detached to a non-commit, or a git error occurs
    fn head_oid(&self) -> Result<Oid>;

    /// Set the repository-local committer identity
    ///
    /// Annotated tags carry a tagger signature; the identity must be set
    /// before [create_annotated_tag](Repository::create_annotated_tag) on a
    /// repository without one.
    fn set_identity(&self, name: &str, email: &str) -> Result<()>;

    /// Create an annotated tag pointing at a commit
    ///
    /// # Arguments
    /// * `name` - Name for the new tag
    /// * `target` - Object ID of the commit to tag
    /// * `message` - Annotated tag message
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the created tag object
    /// * `Err` - If the tag already exists, the target is missing, or a git error occurs
    fn create_annotated_tag(&self, name: &str, target: Oid, message: &str) -> Result<Oid>;

    /// Push a tag to a remote
    ///
    /// Pushes `refs/tags/{tag_name}` to the matching reference on the remote.
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    /// * `tag_name` - Name of the tag to push
    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()>;
}

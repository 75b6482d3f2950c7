use thiserror::Error;

/// Unified error type for version-bumper operations
#[derive(Error, Debug)]
pub enum VersionBumperError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Core action handoff failed: {0}")]
    Handoff(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-bumper
pub type Result<T> = std::result::Result<T, VersionBumperError>;

impl VersionBumperError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionBumperError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        VersionBumperError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        VersionBumperError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        VersionBumperError::Remote(msg.into())
    }

    /// Create a handoff error with context
    pub fn handoff(msg: impl Into<String>) -> Self {
        VersionBumperError::Handoff(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VersionBumperError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VersionBumperError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(VersionBumperError::version("test")
            .to_string()
            .contains("Version"));
        assert!(VersionBumperError::tag("test").to_string().contains("Tag"));
        assert!(VersionBumperError::handoff("test")
            .to_string()
            .contains("handoff"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (VersionBumperError::config("x"), "Configuration error"),
            (VersionBumperError::version("x"), "Version parsing error"),
            (VersionBumperError::tag("x"), "Tag error"),
            (VersionBumperError::remote("x"), "Remote operation failed"),
            (VersionBumperError::handoff("x"), "Core action handoff failed"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_underlying_message_attached() {
        let err = VersionBumperError::remote("Push failed: connection reset");
        assert!(err.to_string().contains("connection reset"));
    }
}

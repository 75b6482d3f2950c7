use std::fmt;

/// Warnings for conditions at the edges of a workflow run.
/// These are non-fatal issues that should be reported to the operator.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The workflow event has no pull request context; the title is treated
    /// as empty and the run ends with a none bump instead of an error.
    MissingPullRequestContext,
    /// Classification yielded no bump; the tagging side effect is skipped
    NoVersionBump { title: String },
    /// GITHUB_OUTPUT is not set; the output pair is printed to stdout instead
    OutputUnavailable { name: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MissingPullRequestContext => {
                write!(
                    f,
                    "No pull request context in the workflow event - treating the title as empty"
                )
            }
            BoundaryWarning::NoVersionBump { title } => {
                if title.is_empty() {
                    write!(
                        f,
                        "No version bump needed - PR title does not match conventional commit format"
                    )
                } else {
                    write!(
                        f,
                        "No version bump needed - PR title '{}' does not match conventional commit format",
                        title
                    )
                }
            }
            BoundaryWarning::OutputUnavailable { name } => {
                write!(
                    f,
                    "GITHUB_OUTPUT is not set - printing output '{}' to stdout instead",
                    name
                )
            }
        }
    }
}

use crate::error::{Result, VersionBumperError};
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string in strict `x.y.z` form.
    ///
    /// Exactly three dot-separated groups of decimal digits, anchored at both
    /// ends: no surrounding whitespace, no `v` prefix, no sign, no extra
    /// segments. Leading zeros are accepted on input but never reproduced by
    /// [Display](fmt::Display).
    ///
    /// # Returns
    /// * `Ok(Version)` - Successfully parsed version
    /// * `Err` - If the string does not match the `x.y.z` pattern
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionBumperError::version(format!(
                "Invalid version format: '{}' - expected x.y.z (e.g., 1.0.0)",
                input
            )));
        }

        let major = parse_component(parts[0], "major", input)?;
        let minor = parse_component(parts[1], "minor", input)?;
        let patch = parse_component(parts[2], "patch", input)?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Bump version according to bump type.
    ///
    /// Never mutates the receiver; a new value is returned:
    /// - **Major**: `(major+1, 0, 0)`
    /// - **Minor**: `(major, minor+1, 0)`
    /// - **Patch**: `(major, minor, patch+1)`
    /// - **None**: identical version
    pub fn bump(self, bump_type: VersionBump) -> Self {
        match bump_type {
            VersionBump::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
            VersionBump::None => self,
        }
    }
}

fn parse_component(part: &str, label: &str, input: &str) -> Result<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionBumperError::version(format!(
            "Invalid {} version component '{}' in '{}'",
            label, part, input
        )));
    }

    part.parse::<u32>().map_err(|_| {
        VersionBumperError::version(format!(
            "Version component '{}' is out of range in '{}'",
            part, input
        ))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version bump category decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
    None,
}

impl VersionBump {
    /// Get the bump category name as a string
    pub fn name(&self) -> &'static str {
        match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
            VersionBump::None => "none",
        }
    }

    /// Whether this category triggers the tagging side effect
    pub fn requires_tag(&self) -> bool {
        !matches!(self, VersionBump::None)
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

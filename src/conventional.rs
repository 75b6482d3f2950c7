pub use crate::version::VersionBump;
use regex::Regex;

/// Determine the version bump category from a pull request title.
///
/// Rules are evaluated in priority order, first match wins, prefixes are
/// case-sensitive:
/// 1. Starts with `feat!:` -> Major
/// 2. Starts with `fix!:` -> Major
/// 3. Contains `BREAKING` followed by whitespace and `CHANGE` -> Major
/// 4. Starts with `feat:` -> Minor
/// 5. Starts with `fix:` -> Patch
/// 6. Otherwise -> None
///
/// Total function: an empty or non-matching title yields `None`, never an
/// error. The breaking rules must run before the plain `feat:`/`fix:` rules
/// so that a breaking title is never downgraded to a minor or patch bump.
pub fn determine_version_bump(title: &str) -> VersionBump {
    if title.starts_with("feat!:") || title.starts_with("fix!:") {
        return VersionBump::Major;
    }

    // `\s+` covers newlines, so a BREAKING CHANGE footer in a multi-line
    // title body still forces a major bump.
    if let Ok(re) = Regex::new(r"BREAKING\s+CHANGE") {
        if re.is_match(title) {
            return VersionBump::Major;
        }
    }

    if title.starts_with("feat:") {
        return VersionBump::Minor;
    }

    if title.starts_with("fix:") {
        return VersionBump::Patch;
    }

    VersionBump::None
}

//! Semantic version matching for platform and package requirements

use semver::{Version, VersionReq};

use crate::error::{PlatmanError, Result};

/// Parse a requirement string
///
/// Empty and `*` match anything; a bare version such as `1.2.3` matches
/// exactly that version; anything else is a `semver` range (`^1.2`, `~1.4`,
/// `>=2, <3`).
pub fn parse_requirement(requirement: &str) -> Result<VersionReq> {
    let trimmed = requirement.trim();
    if trimmed.is_empty() || trimmed == "*" {
        return Ok(VersionReq::STAR);
    }

    let source = if Version::parse(trimmed).is_ok() {
        format!("={trimmed}")
    } else {
        trimmed.to_string()
    };

    VersionReq::parse(&source).map_err(|e| invalid(requirement, e))
}

/// Parse a concrete version
pub fn parse_version(version: &str) -> Result<Version> {
    Version::parse(version.trim()).map_err(|e| invalid(version, e))
}

/// Whether `version` satisfies `requirement`
pub fn satisfies(version: &str, requirement: &str) -> Result<bool> {
    let requirement = parse_requirement(requirement)?;
    Ok(requirement.matches(&parse_version(version)?))
}

/// Whether `candidate` is a strictly higher version than `current`
pub fn is_newer(candidate: &str, current: &str) -> Result<bool> {
    Ok(parse_version(candidate)? > parse_version(current)?)
}

fn invalid(requirement: &str, err: semver::Error) -> PlatmanError {
    PlatmanError::InvalidVersionRequirement {
        requirement: requirement.to_string(),
        reason: err.to_string(),
    }
}

//! Platform and package resolution errors

use super::PlatmanError;

/// Creates an unknown platform error
pub fn unknown_platform(name: impl Into<String>) -> PlatmanError {
    PlatmanError::UnknownPlatform { name: name.into() }
}

/// Creates a "not installed yet" error for a declined install prompt
pub fn not_installed_yet(name: impl Into<String>) -> PlatmanError {
    PlatmanError::PlatformNotInstalledYet { name: name.into() }
}

/// Creates an error for a platform version that no catalog entry satisfies
pub fn version_not_found(name: impl Into<String>, requirement: impl Into<String>) -> PlatmanError {
    PlatmanError::PlatformVersionNotFound {
        name: name.into(),
        requirement: requirement.into(),
    }
}

/// Creates a package not found error
pub fn package_not_found(name: impl Into<String>, requirement: impl Into<String>) -> PlatmanError {
    PlatmanError::PackageNotFound {
        name: name.into(),
        requirement: requirement.into(),
    }
}

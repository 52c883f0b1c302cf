//! Error types and handling for platman
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Convenience constructors live in sub-modules by error domain:
//! - [`platform`]: Platform and package resolution errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod platform;

#[allow(unused_imports)]
pub use config::{invalid as config_invalid, parse_failed as config_parse_failed};
#[allow(unused_imports)]
pub use fs::{read_failed as file_read_failed, write_failed as file_write_failed};
#[allow(unused_imports)]
pub use platform::{
    not_installed_yet, package_not_found, unknown_platform, version_not_found,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for platman operations
#[derive(Error, Diagnostic, Debug)]
pub enum PlatmanError {
    // Platform errors
    #[error("Unknown development platform '{name}'")]
    #[diagnostic(
        code(platman::platform::unknown),
        help("Run 'platman search {name}' to look it up in the catalog")
    )]
    UnknownPlatform { name: String },

    #[error("The platform '{name}' has not been installed yet")]
    #[diagnostic(
        code(platman::platform::not_installed_yet),
        help("Use 'platman install {name}' command")
    )]
    PlatformNotInstalledYet { name: String },

    #[error("No version of platform '{name}' satisfies '{requirement}'")]
    #[diagnostic(code(platman::platform::version_not_found))]
    PlatformVersionNotFound { name: String, requirement: String },

    #[error("Failed to parse platform manifest: {path}: {reason}")]
    #[diagnostic(code(platman::platform::manifest_parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    // Package errors
    #[error("Could not find package '{name}' matching '{requirement}'")]
    #[diagnostic(
        code(platman::package::not_found),
        help("Check that the catalog lists a compatible version of the package")
    )]
    PackageNotFound { name: String, requirement: String },

    #[error("Invalid version requirement '{requirement}': {reason}")]
    #[diagnostic(
        code(platman::version::invalid_requirement),
        help("Use a semantic version such as 1.2.3 or a range such as ^1.2")
    )]
    InvalidVersionRequirement { requirement: String, reason: String },

    // Catalog errors
    #[error("Failed to read platform catalog: {path}: {reason}")]
    #[diagnostic(
        code(platman::catalog::read_failed),
        help("Point PLATMAN_CATALOG or the 'catalog' setting at a valid catalog.json")
    )]
    CatalogReadFailed { path: String, reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(platman::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(platman::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(platman::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(platman::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(platman::fs::io_error))]
    IoError { message: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(platman::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // Interactive errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(
        code(platman::prompt::failed),
        help("Set PLATMAN_ENABLE_PROMPTS=0 to run without interactive prompts")
    )]
    PromptFailed { message: String },
}

impl From<std::io::Error> for PlatmanError {
    fn from(err: std::io::Error) -> Self {
        PlatmanError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PlatmanError {
    fn from(err: serde_yaml::Error) -> Self {
        PlatmanError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PlatmanError {
    fn from(err: serde_json::Error) -> Self {
        PlatmanError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PlatmanError>;

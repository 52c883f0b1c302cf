//! Configuration errors

use super::PlatmanError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PlatmanError {
    PlatmanError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> PlatmanError {
    PlatmanError::ConfigInvalid {
        message: message.into(),
    }
}

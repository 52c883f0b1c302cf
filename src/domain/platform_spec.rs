//! Parsing of `platform[@version]` specifiers
//!
//! Commands such as `install` and `uninstall` accept tokens like `atmelavr`,
//! `atmelavr@1.2.3` or `atmelavr@^1.2`. The identifier is everything before the
//! last `@`, the version constraint everything after it.

/// A platform identifier with an optional version constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSpec {
    /// Platform name (or path) as typed by the user
    pub id: String,
    /// Version constraint following the last `@`, never empty
    pub version: Option<String>,
}

impl PlatformSpec {
    /// Parse a user supplied token. Never fails; any string is accepted.
    ///
    /// An `@` with nothing after it (`foo@`) carries no constraint.
    pub fn parse(token: &str) -> Self {
        match token.rsplit_once('@') {
            Some((id, version)) => Self {
                id: id.to_string(),
                version: (!version.is_empty()).then(|| version.to_string()),
            },
            None => Self {
                id: token.to_string(),
                version: None,
            },
        }
    }

    /// Version constraint as a borrowed str
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

//! Platform manifest and package records
//!
//! `PlatformManifest` is the on-disk `platform.json` shape shared by the
//! catalog and installed platforms. `InstalledPackage` is what an install
//! records for each package actually present.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A platform definition (`platform.json`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformManifest {
    pub name: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,

    /// Frameworks supported by the platform, keyed by framework name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub frameworks: BTreeMap<String, serde_json::Value>,

    /// Declared packages, keyed by package name
    #[serde(default)]
    pub packages: BTreeMap<String, PackageDecl>,
}

impl PlatformManifest {
    /// Names of the declared packages
    pub fn package_names(&self) -> Vec<String> {
        self.packages.keys().cloned().collect()
    }
}

/// License block of a platform manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    #[serde(rename = "type")]
    pub kind: String,
}

/// A package declared by a platform
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackageDecl {
    /// Package classification (toolchain, framework, uploader, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Version requirement
    #[serde(default)]
    pub version: String,

    /// Optional packages are only installed on request
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
}

/// Metadata recorded for a package that is actually installed
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InstalledPackage {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Any other metadata the installer kept
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl InstalledPackage {
    /// All metadata as `(key, value)` pairs, known fields first
    pub fn fields(&self) -> Vec<(String, String)> {
        let known = [
            ("type", &self.kind),
            ("version", &self.version),
            ("url", &self.url),
            ("description", &self.description),
        ];

        let mut fields: Vec<(String, String)> = known
            .into_iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
            .collect();

        fields.extend(self.extra.iter().map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), value)
        }));

        fields
    }
}

/// A row of the installed platform listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledManifest {
    pub name: String,
    pub version: String,
    /// Location of the installed `platform.json`
    pub manifest_path: PathBuf,
}

/// Outcome of a packages-only update that changed something
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackagesUpdate {
    /// Names of the packages moved to a new version
    pub updated: Vec<String>,
}

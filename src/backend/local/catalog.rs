//! Catalog file (`catalog.json`) loading and version selection
//!
//! The catalog lists platform definitions (several versions of a platform may
//! appear) and the package versions those platforms can pull in.

use std::collections::HashMap;
use std::path::Path;

use semver::{Version, VersionReq};
use serde::Deserialize;

use super::versions;
use crate::domain::{CatalogEntry, PlatformManifest};
use crate::error::{PlatmanError, Result, package_not_found, unknown_platform, version_not_found};

/// A downloadable package version listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogPackage {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Parsed catalog file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub platforms: Vec<PlatformManifest>,
    #[serde(default)]
    pub packages: Vec<CatalogPackage>,
}

impl Catalog {
    /// Load the catalog from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PlatmanError::CatalogReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let catalog: Self =
            serde_json::from_str(&content).map_err(|e| PlatmanError::CatalogReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            platforms = catalog.platforms.len(),
            packages = catalog.packages.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// One search row per platform name, using its highest version
    ///
    /// Rows come out in the order each name first appears in the catalog.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        let mut order: Vec<&PlatformManifest> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for platform in &self.platforms {
            match index.get(platform.name.as_str()) {
                Some(&idx) => {
                    if sort_key(&platform.version) > sort_key(&order[idx].version) {
                        order[idx] = platform;
                    }
                }
                None => {
                    index.insert(platform.name.as_str(), order.len());
                    order.push(platform);
                }
            }
        }

        order
            .into_iter()
            .map(|platform| CatalogEntry {
                type_id: platform.name.clone(),
                display_name: platform.title.clone(),
                description: platform.description.clone(),
                packages: platform.package_names(),
            })
            .collect()
    }

    /// Highest platform version named `name` satisfying `requirement`
    pub fn best_platform(&self, name: &str, requirement: Option<&str>) -> Result<&PlatformManifest> {
        let req = versions::parse_requirement(requirement.unwrap_or("*"))?;
        let candidates: Vec<&PlatformManifest> =
            self.platforms.iter().filter(|p| p.name == name).collect();

        if candidates.is_empty() {
            return Err(unknown_platform(name));
        }

        highest(candidates, |p| p.version.as_str(), &req)
            .ok_or_else(|| version_not_found(name, requirement.unwrap_or("*")))
    }

    /// Highest package version satisfying `requirement`, if the catalog has one
    pub fn find_package(&self, name: &str, requirement: &str) -> Result<Option<&CatalogPackage>> {
        let req = versions::parse_requirement(requirement)?;
        let candidates: Vec<&CatalogPackage> =
            self.packages.iter().filter(|p| p.name == name).collect();
        Ok(highest(candidates, |p| p.version.as_str(), &req))
    }

    /// Like [`Catalog::find_package`] but a miss is an error
    pub fn best_package(&self, name: &str, requirement: &str) -> Result<&CatalogPackage> {
        self.find_package(name, requirement)?
            .ok_or_else(|| package_not_found(name, requirement))
    }
}

fn sort_key(version: &str) -> Option<Version> {
    Version::parse(version.trim()).ok()
}

fn highest<'a, T, F>(candidates: Vec<&'a T>, version_of: F, req: &VersionReq) -> Option<&'a T>
where
    F: Fn(&T) -> &str,
{
    candidates
        .into_iter()
        .filter_map(|candidate| match Version::parse(version_of(candidate).trim()) {
            Ok(version) => Some((version, candidate)),
            Err(e) => {
                tracing::warn!(
                    version = version_of(candidate),
                    "Skipping catalog entry with invalid version: {}",
                    e
                );
                None
            }
        })
        .filter(|(version, _)| req.matches(version))
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, candidate)| candidate)
}

//! On-disk layout of installed platforms
//!
//! ```text
//! <home>/platforms/<name>/platform.json   installed definition
//! <home>/platforms/<name>/packages.json   installed package records
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::domain::{InstalledManifest, InstalledPackage, PlatformManifest};
use crate::error::{PlatmanError, Result, file_read_failed, file_write_failed};

/// Installed platform definition file
pub const MANIFEST_FILE: &str = "platform.json";

/// Installed package records file
pub const PACKAGES_FILE: &str = "packages.json";

/// An installed platform read back from disk
#[derive(Debug, Clone)]
pub struct StoredPlatform {
    pub manifest: PlatformManifest,
    pub packages: BTreeMap<String, InstalledPackage>,
}

/// Installed platforms under one directory
#[derive(Debug, Clone)]
pub struct PlatformStore {
    root: PathBuf,
}

impl PlatformStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory of an installed platform, `None` for names that are not a
    /// single path component
    pub fn platform_dir(&self, name: &str) -> Option<PathBuf> {
        let valid = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\']);
        valid.then(|| self.root.join(name))
    }

    /// Load an installed platform by name
    pub fn load(&self, name: &str) -> Result<Option<StoredPlatform>> {
        match self.platform_dir(name) {
            Some(dir) if dir.join(MANIFEST_FILE).is_file() => {
                Ok(Some(Self::load_file(&dir.join(MANIFEST_FILE))?))
            }
            _ => Ok(None),
        }
    }

    /// Load an installed platform from its manifest file; package records are
    /// read from the sibling `packages.json`
    pub fn load_file(manifest_path: &Path) -> Result<StoredPlatform> {
        let manifest: PlatformManifest = read_json(manifest_path)?;
        let packages_path = manifest_path.with_file_name(PACKAGES_FILE);
        let packages = if packages_path.is_file() {
            read_json(&packages_path)?
        } else {
            BTreeMap::new()
        };

        Ok(StoredPlatform { manifest, packages })
    }

    /// Write (or overwrite) an installed platform
    pub fn save(
        &self,
        manifest: &PlatformManifest,
        packages: &BTreeMap<String, InstalledPackage>,
    ) -> Result<()> {
        let dir = self.dir_for(&manifest.name)?;
        std::fs::create_dir_all(&dir)
            .map_err(|e| file_write_failed(dir.display().to_string(), e.to_string()))?;

        write_json_atomic(&dir.join(MANIFEST_FILE), manifest)?;
        write_json_atomic(&dir.join(PACKAGES_FILE), packages)
    }

    /// Replace the package records of an installed platform
    pub fn save_packages(
        &self,
        name: &str,
        packages: &BTreeMap<String, InstalledPackage>,
    ) -> Result<()> {
        let dir = self.dir_for(name)?;
        write_json_atomic(&dir.join(PACKAGES_FILE), packages)
    }

    /// Delete an installed platform
    pub fn remove(&self, name: &str) -> Result<()> {
        let dir = self.dir_for(name)?;
        std::fs::remove_dir_all(&dir)
            .map_err(|e| file_write_failed(dir.display().to_string(), e.to_string()))
    }

    /// Every installed platform, sorted by name
    pub fn list(&self) -> Result<Vec<InstalledManifest>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.root)
            .map_err(|e| file_read_failed(self.root.display().to_string(), e.to_string()))?;

        let mut installed = Vec::new();
        for entry in entries {
            let manifest_path = entry?.path().join(MANIFEST_FILE);
            if !manifest_path.is_file() {
                continue;
            }
            let manifest: PlatformManifest = read_json(&manifest_path)?;
            installed.push(InstalledManifest {
                name: manifest.name,
                version: manifest.version,
                manifest_path,
            });
        }

        installed.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(installed)
    }

    fn dir_for(&self, name: &str) -> Result<PathBuf> {
        self.platform_dir(name).ok_or_else(|| PlatmanError::ManifestParseFailed {
            path: self.root.display().to_string(),
            reason: format!("invalid platform name '{name}'"),
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| PlatmanError::ManifestParseFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Write JSON next to `path` and rename it into place
fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(parent).map_err(|e| write_failed_at(path, e))?;
    serde_json::to_writer_pretty(&mut file, value).map_err(|e| write_failed_at(path, e))?;
    file.persist(path).map_err(|e| write_failed_at(path, e.error))?;
    Ok(())
}

fn write_failed_at(path: &Path, err: impl std::fmt::Display) -> PlatmanError {
    file_write_failed(path.display().to_string(), err.to_string())
}

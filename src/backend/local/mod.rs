//! Filesystem backend
//!
//! Implements [`Registry`], [`Installer`] and [`PlatformFactory`] on top of a
//! home directory: the catalog is a JSON file, installed platforms live under
//! `<home>/platforms`. Installing a package records the catalog entry it
//! resolved to; nothing is downloaded.

pub mod catalog;
pub mod platform;
pub mod store;
pub mod versions;

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use console::Style;

use super::{Installer, PackageSelection, Platform, PlatformFactory, Registry};
use crate::config::Settings;
use crate::domain::{
    CatalogEntry, InstalledManifest, InstalledPackage, PackageDecl, PlatformManifest,
};
use crate::error::{Result, unknown_platform};
use crate::ui::progress::{InteractiveProgressReporter, ProgressReporter, SilentProgressReporter};

pub use catalog::Catalog;
pub use platform::LocalPlatform;
pub use store::{MANIFEST_FILE, PlatformStore};

/// Backend rooted at the configured home directory
#[derive(Debug, Clone)]
pub struct LocalBackend {
    catalog_path: PathBuf,
    store: PlatformStore,
    show_progress: bool,
}

impl LocalBackend {
    pub fn new(settings: &Settings) -> Self {
        Self {
            catalog_path: settings.catalog_path.clone(),
            store: PlatformStore::new(settings.platforms_dir()),
            show_progress: true,
        }
    }

    /// Enable or disable the package progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    fn catalog(&self) -> Result<Catalog> {
        Catalog::load(&self.catalog_path)
    }

    fn reporter(&self) -> Box<dyn ProgressReporter> {
        if self.show_progress {
            Box::new(InteractiveProgressReporter::new())
        } else {
            Box::new(SilentProgressReporter)
        }
    }

    /// Resolve `wanted` packages against the catalog and add them to `packages`
    fn install_packages(
        &self,
        catalog: &Catalog,
        platform: &str,
        wanted: &[(&String, &PackageDecl)],
        packages: &mut BTreeMap<String, InstalledPackage>,
    ) -> Result<()> {
        let mut reporter = self.reporter();
        reporter.start(platform, wanted.len() as u64);

        for (name, decl) in wanted {
            let package = match catalog.best_package(name, &decl.version) {
                Ok(package) => package,
                Err(e) => {
                    reporter.abandon();
                    return Err(e);
                }
            };
            tracing::debug!(package = %name, version = %package.version, "Installing package");
            packages.insert((*name).clone(), platform::package_record(decl, package));
            reporter.package(name);
        }

        reporter.finish();
        Ok(())
    }

    /// Manifest file named by `id_or_path`, when it is a path rather than a name
    fn manifest_file(id_or_path: &str) -> Option<PathBuf> {
        let looks_like_path = id_or_path.contains(['/', '\\']) || id_or_path.ends_with(".json");
        if !looks_like_path {
            return None;
        }

        let path = Path::new(id_or_path);
        if path.is_file() {
            Some(path.to_path_buf())
        } else if path.join(MANIFEST_FILE).is_file() {
            Some(path.join(MANIFEST_FILE))
        } else {
            None
        }
    }
}

impl Registry for LocalBackend {
    fn search(&self) -> Result<Vec<CatalogEntry>> {
        Ok(self.catalog()?.entries())
    }
}

impl Installer for LocalBackend {
    fn install(
        &self,
        id: &str,
        version: Option<&str>,
        selection: &PackageSelection,
    ) -> Result<bool> {
        let catalog = self.catalog()?;

        // An installed version that already satisfies the request is kept; only
        // the package selection is merged into it
        let requirement = version.unwrap_or("*");
        let existing = match self.store.load(id)? {
            Some(stored) if versions::satisfies(&stored.manifest.version, requirement)? => {
                Some(stored)
            }
            _ => None,
        };
        let already_installed = existing.is_some();
        let (manifest, mut packages) = match existing {
            Some(stored) => (stored.manifest, stored.packages),
            None => (catalog.best_platform(id, version)?.clone(), BTreeMap::new()),
        };

        for name in &selection.with_packages {
            if !manifest.packages.contains_key(name) {
                tracing::warn!(
                    platform = %manifest.name,
                    package = %name,
                    "Platform does not declare package, ignoring"
                );
            }
        }

        let wanted: Vec<(&String, &PackageDecl)> = manifest
            .packages
            .iter()
            .filter(|(name, decl)| selection.includes(name, decl) && !packages.contains_key(*name))
            .collect();
        let dropped: Vec<String> = selection
            .without_packages
            .iter()
            .filter(|name| packages.contains_key(*name))
            .cloned()
            .collect();

        if already_installed && wanted.is_empty() && dropped.is_empty() {
            tracing::debug!(
                platform = %manifest.name,
                version = %manifest.version,
                "Platform is already installed"
            );
            return Ok(false);
        }

        self.install_packages(&catalog, &manifest.name, &wanted, &mut packages)?;
        for name in &dropped {
            packages.remove(name);
        }

        self.store.save(&manifest, &packages)?;
        tracing::info!(
            platform = %manifest.name,
            version = %manifest.version,
            packages = packages.len(),
            "Installed platform"
        );
        Ok(true)
    }

    fn uninstall(&self, id: &str, version: Option<&str>) -> Result<bool> {
        let stored = self.store.load(id)?.ok_or_else(|| unknown_platform(id))?;

        if let Some(requirement) = version {
            if !versions::satisfies(&stored.manifest.version, requirement)? {
                tracing::warn!(
                    platform = %id,
                    installed = %stored.manifest.version,
                    requirement = %requirement,
                    "Installed version does not match, nothing to uninstall"
                );
                return Ok(false);
            }
        }

        self.store.remove(id)?;
        tracing::info!(platform = %id, "Uninstalled platform");
        Ok(true)
    }

    fn installed(&self) -> Result<Vec<InstalledManifest>> {
        self.store.list()
    }

    fn update(&self, name: &str, version: &str, out: &mut dyn Write) -> Result<()> {
        let catalog = self.catalog()?;
        let stored = self
            .store
            .load(name)?
            .filter(|stored| stored.manifest.version == version)
            .ok_or_else(|| unknown_platform(format!("{name}@{version}")))?;
        let latest = catalog.best_platform(name, None)?;

        let (manifest, packages): (PlatformManifest, BTreeMap<String, InstalledPackage>) =
            if versions::is_newer(&latest.version, version)? {
                writeln!(
                    out,
                    "Updating {} {} -> {}",
                    Style::new().cyan().apply_to(name),
                    version,
                    latest.version
                )?;
                let selection = PackageSelection {
                    with_packages: stored.packages.keys().cloned().collect(),
                    ..Default::default()
                };
                let wanted: Vec<(&String, &PackageDecl)> = latest
                    .packages
                    .iter()
                    .filter(|(name, decl)| selection.includes(name, decl))
                    .collect();

                let mut packages = BTreeMap::new();
                self.install_packages(&catalog, name, &wanted, &mut packages)?;
                self.store.save(latest, &packages)?;
                (latest.clone(), packages)
            } else {
                writeln!(
                    out,
                    "{} is {}",
                    Style::new().cyan().apply_to(name),
                    Style::new().green().apply_to("up-to-date")
                )?;
                (stored.manifest, stored.packages)
            };

        if let Some(update) =
            platform::refresh_packages(&self.store, &catalog, &manifest, &packages)?
        {
            writeln!(out, "Updated packages: {}", update.updated.join(", "))?;
        }

        Ok(())
    }
}

impl PlatformFactory for LocalBackend {
    fn resolve(&self, id_or_path: &str, version: Option<&str>) -> Result<Box<dyn Platform>> {
        let stored = match Self::manifest_file(id_or_path) {
            Some(path) => PlatformStore::load_file(&path)?,
            None => self
                .store
                .load(id_or_path)?
                .ok_or_else(|| unknown_platform(id_or_path))?,
        };

        if let Some(requirement) = version {
            if !versions::satisfies(&stored.manifest.version, requirement)? {
                return Err(unknown_platform(format!("{id_or_path}@{requirement}")));
            }
        }

        Ok(Box::new(LocalPlatform::new(
            stored,
            self.store.clone(),
            self.catalog_path.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlatmanError;
    use crate::test_fixtures::output;
    use tempfile::TempDir;

    const CATALOG: &str = r#"{
        "platforms": [
            {"name": "atmelavr", "title": "Atmel AVR", "description": "8-bit MCUs", "version": "1.0.0",
             "packages": {
                "toolchain-atmelavr": {"type": "toolchain", "version": "~1.50400.0"},
                "framework-arduinoavr": {"type": "framework", "version": "^4.0", "optional": true}
             }},
            {"name": "atmelavr", "title": "Atmel AVR", "description": "8-bit MCUs", "version": "1.1.0",
             "packages": {
                "toolchain-atmelavr": {"type": "toolchain", "version": "~1.50400.0"},
                "framework-arduinoavr": {"type": "framework", "version": "^4.0", "optional": true},
                "tool-avrdude": {"type": "uploader", "version": "^1.60300.0"}
             }},
            {"name": "native", "title": "Native", "description": "Host machine", "version": "1.0.0"}
        ],
        "packages": [
            {"name": "toolchain-atmelavr", "version": "1.50400.190710", "url": "https://dl.example.com/gcc"},
            {"name": "framework-arduinoavr", "version": "4.2.0", "description": "Arduino core"},
            {"name": "tool-avrdude", "version": "1.60300.0"}
        ]
    }"#;

    struct Fixture {
        _temp: TempDir,
        backend: LocalBackend,
        home: PathBuf,
    }

    fn fixture() -> Fixture {
        let temp = TempDir::new().unwrap();
        let home = temp.path().to_path_buf();
        std::fs::write(home.join("catalog.json"), CATALOG).unwrap();
        let backend = LocalBackend::new(&Settings::new(&home)).with_progress(false);
        Fixture {
            _temp: temp,
            backend,
            home,
        }
    }

    fn with(packages: &[&str]) -> PackageSelection {
        PackageSelection {
            with_packages: packages.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_search_lists_latest_versions() {
        let fx = fixture();
        let entries = fx.backend.search().unwrap();
        let ids: Vec<&str> = entries.iter().map(|e| e.type_id.as_str()).collect();
        assert_eq!(ids, vec!["atmelavr", "native"]);
        assert!(entries[0].packages.contains(&"tool-avrdude".to_string()));
    }

    #[test]
    fn test_install_latest_with_default_packages() {
        let fx = fixture();
        assert!(fx.backend.install("atmelavr", None, &PackageSelection::default()).unwrap());

        let platform = fx.backend.resolve("atmelavr", None).unwrap();
        assert_eq!(platform.version(), "1.1.0");
        let installed: Vec<&String> = platform.installed_packages().keys().collect();
        assert_eq!(installed, vec!["tool-avrdude", "toolchain-atmelavr"]);
    }

    #[test]
    fn test_install_is_idempotent() {
        let fx = fixture();
        let selection = PackageSelection::default();
        assert!(fx.backend.install("atmelavr", Some("1.0.0"), &selection).unwrap());
        assert!(!fx.backend.install("atmelavr", Some("1.0.0"), &selection).unwrap());
    }

    #[test]
    fn test_install_same_version_adds_requested_package() {
        let fx = fixture();
        fx.backend
            .install("atmelavr", None, &PackageSelection::default())
            .unwrap();
        assert!(
            fx.backend
                .install("atmelavr", None, &with(&["framework-arduinoavr"]))
                .unwrap()
        );

        let platform = fx.backend.resolve("atmelavr", None).unwrap();
        let framework = &platform.installed_packages()["framework-arduinoavr"];
        assert_eq!(framework.version.as_deref(), Some("4.2.0"));
        assert_eq!(framework.description.as_deref(), Some("Arduino core"));
    }

    #[test]
    fn test_install_skip_default_and_without() {
        let fx = fixture();
        let selection = PackageSelection {
            with_packages: vec!["framework-arduinoavr".to_string()],
            without_packages: vec!["tool-avrdude".to_string()],
            skip_default_package: true,
        };
        fx.backend.install("atmelavr", None, &selection).unwrap();

        let platform = fx.backend.resolve("atmelavr", None).unwrap();
        let installed: Vec<&String> = platform.installed_packages().keys().collect();
        assert_eq!(installed, vec!["framework-arduinoavr"]);
    }

    #[test]
    fn test_install_unknown_platform() {
        let fx = fixture();
        let err = fx
            .backend
            .install("riscv", None, &PackageSelection::default())
            .unwrap_err();
        assert!(matches!(err, PlatmanError::UnknownPlatform { .. }));
    }

    #[test]
    fn test_install_missing_package_fails_without_saving() {
        let fx = fixture();
        std::fs::write(
            fx.home.join("catalog.json"),
            r#"{"platforms": [{"name": "broken", "version": "1.0.0",
                "packages": {"tool-missing": {"version": "*"}}}]}"#,
        )
        .unwrap();

        let err = fx
            .backend
            .install("broken", None, &PackageSelection::default())
            .unwrap_err();
        assert!(matches!(err, PlatmanError::PackageNotFound { .. }));
        assert!(fx.backend.installed().unwrap().is_empty());
    }

    #[test]
    fn test_uninstall() {
        let fx = fixture();
        fx.backend
            .install("native", None, &PackageSelection::default())
            .unwrap();

        assert!(!fx.backend.uninstall("native", Some("^2")).unwrap());
        assert!(fx.backend.uninstall("native", Some("1.0.0")).unwrap());
        assert!(fx.backend.installed().unwrap().is_empty());
    }

    #[test]
    fn test_uninstall_not_installed() {
        let fx = fixture();
        let err = fx.backend.uninstall("native", None).unwrap_err();
        assert!(matches!(err, PlatmanError::UnknownPlatform { .. }));
    }

    #[test]
    fn test_resolve_by_manifest_path() {
        let fx = fixture();
        fx.backend
            .install("native", None, &PackageSelection::default())
            .unwrap();

        let listed = fx.backend.installed().unwrap();
        let path = listed[0].manifest_path.to_string_lossy().to_string();
        let platform = fx.backend.resolve(&path, None).unwrap();
        assert_eq!(platform.name(), "native");
        assert_eq!(platform.title(), "Native");
    }

    #[test]
    fn test_resolve_version_mismatch_is_unknown() {
        let fx = fixture();
        fx.backend
            .install("atmelavr", Some("1.0.0"), &PackageSelection::default())
            .unwrap();

        assert!(fx.backend.resolve("atmelavr", Some("1.0.0")).is_ok());
        let err = fx.backend.resolve("atmelavr", Some("1.1.0")).err().unwrap();
        assert!(matches!(err, PlatmanError::UnknownPlatform { ref name } if name == "atmelavr@1.1.0"));
    }

    #[test]
    fn test_update_moves_to_latest_and_keeps_optional_packages() {
        let fx = fixture();
        fx.backend
            .install("atmelavr", Some("1.0.0"), &with(&["framework-arduinoavr"]))
            .unwrap();

        let mut out = Vec::new();
        fx.backend.update("atmelavr", "1.0.0", &mut out).unwrap();
        assert!(output(out).starts_with("Updating atmelavr 1.0.0 -> 1.1.0\n"));

        let platform = fx.backend.resolve("atmelavr", None).unwrap();
        assert_eq!(platform.version(), "1.1.0");
        let installed: Vec<&String> = platform.installed_packages().keys().collect();
        assert_eq!(
            installed,
            vec!["framework-arduinoavr", "tool-avrdude", "toolchain-atmelavr"]
        );
    }

    #[test]
    fn test_update_requires_recorded_version() {
        let fx = fixture();
        fx.backend
            .install("native", None, &PackageSelection::default())
            .unwrap();
        let mut out = Vec::new();
        assert!(fx.backend.update("native", "0.9.0", &mut out).is_err());
        assert!(fx.backend.update("native", "1.0.0", &mut out).is_ok());
        assert_eq!(output(out), "native is up-to-date\n");
    }

    #[test]
    fn test_install_keeps_installed_version_that_satisfies_request() {
        let fx = fixture();
        fx.backend
            .install("atmelavr", Some("1.0.0"), &with(&["framework-arduinoavr"]))
            .unwrap();

        assert!(
            !fx.backend
                .install("atmelavr", Some("^1"), &PackageSelection::default())
                .unwrap()
        );

        let platform = fx.backend.resolve("atmelavr", None).unwrap();
        assert_eq!(platform.version(), "1.0.0");
        let installed: Vec<&String> = platform.installed_packages().keys().collect();
        assert_eq!(installed, vec!["framework-arduinoavr", "toolchain-atmelavr"]);
    }

    #[test]
    fn test_install_replaces_installed_version_outside_request() {
        let fx = fixture();
        fx.backend
            .install("atmelavr", Some("1.0.0"), &PackageSelection::default())
            .unwrap();

        assert!(
            fx.backend
                .install("atmelavr", Some("1.1.0"), &PackageSelection::default())
                .unwrap()
        );
        let platform = fx.backend.resolve("atmelavr", None).unwrap();
        assert_eq!(platform.version(), "1.1.0");
    }
}

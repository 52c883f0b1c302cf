//! In-memory collaborators for operation tests
//!
//! `FakeBackend` implements every backend trait over plain maps and records
//! each call as a short string (`"install atmelavr 1.2.3"`, `"resolve native *"`),
//! so tests can assert both output and the exact sequence of collaborator calls.
//!
//! ```ignore
//! let backend = FakeBackend::new().installable(manifest("atmelavr", "1.2.0"));
//! InstallOperation::new(&backend).execute(&["atmelavr".into()], &options, &mut out)?;
//! assert_eq!(backend.calls(), vec!["install atmelavr *"]);
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

use crate::backend::{
    Installer, PackageSelection, Platform, PlatformFactory, Registry, UserPrompt,
};
use crate::domain::{
    CatalogEntry, InstalledManifest, InstalledPackage, PackagesUpdate, PlatformManifest,
};
use crate::error::{Result, package_not_found, unknown_platform};

type CallLog = Rc<RefCell<Vec<String>>>;

/// Minimal manifest with one required package
pub fn manifest(name: &str, version: &str) -> PlatformManifest {
    let mut packages = serde_json::Map::new();
    packages.insert(
        format!("toolchain-{name}"),
        serde_json::json!({"type": "toolchain", "version": "*"}),
    );

    serde_json::from_value(serde_json::json!({
        "name": name,
        "title": name.to_uppercase(),
        "description": format!("{name} platform"),
        "version": version,
        "packages": packages,
    }))
    .unwrap()
}

/// Catalog row
pub fn entry(type_id: &str, display_name: &str, packages: &[&str]) -> CatalogEntry {
    CatalogEntry {
        type_id: type_id.to_string(),
        display_name: display_name.to_string(),
        description: format!("{display_name} boards"),
        packages: packages.iter().map(|p| p.to_string()).collect(),
    }
}

/// Render captured output without styling
pub fn output(out: Vec<u8>) -> String {
    console::strip_ansi_codes(&String::from_utf8(out).unwrap()).to_string()
}

#[derive(Default)]
pub struct FakeBackend {
    entries: Vec<CatalogEntry>,
    installable: BTreeMap<String, PlatformManifest>,
    installed: RefCell<BTreeMap<String, PlatformManifest>>,
    packages_update: Option<PackagesUpdate>,
    failing: Option<String>,
    calls: CallLog,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(mut self, entries: Vec<CatalogEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// A platform `install` can succeed for
    pub fn installable(mut self, manifest: PlatformManifest) -> Self {
        self.installable.insert(manifest.name.clone(), manifest);
        self
    }

    /// A platform that is already installed
    pub fn with_installed(self, manifest: PlatformManifest) -> Self {
        self.installed
            .borrow_mut()
            .insert(manifest.name.clone(), manifest);
        self
    }

    /// What `Platform::update_packages` reports for every resolved platform
    pub fn with_packages_update(mut self, update: PackagesUpdate) -> Self {
        self.packages_update = Some(update);
        self
    }

    /// Make `install` of `id` fail
    pub fn failing_install(mut self, id: &str) -> Self {
        self.failing = Some(id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.installed.borrow().contains_key(name)
    }

    fn record(&self, call: &str, id: &str, version: Option<&str>) {
        self.calls
            .borrow_mut()
            .push(format!("{call} {id} {}", version.unwrap_or("*")));
    }
}

impl Registry for FakeBackend {
    fn search(&self) -> Result<Vec<CatalogEntry>> {
        self.calls.borrow_mut().push("search".to_string());
        Ok(self.entries.clone())
    }
}

impl Installer for FakeBackend {
    fn install(
        &self,
        id: &str,
        version: Option<&str>,
        _selection: &PackageSelection,
    ) -> Result<bool> {
        self.record("install", id, version);
        if self.failing.as_deref() == Some(id) {
            return Err(package_not_found(format!("toolchain-{id}"), "*"));
        }
        if self.installed.borrow().contains_key(id) {
            return Ok(false);
        }

        let manifest = self
            .installable
            .get(id)
            .cloned()
            .ok_or_else(|| unknown_platform(id))?;
        self.installed.borrow_mut().insert(id.to_string(), manifest);
        Ok(true)
    }

    fn uninstall(&self, id: &str, version: Option<&str>) -> Result<bool> {
        self.record("uninstall", id, version);
        Ok(self.installed.borrow_mut().remove(id).is_some())
    }

    fn installed(&self) -> Result<Vec<InstalledManifest>> {
        Ok(self
            .installed
            .borrow()
            .values()
            .map(|m| InstalledManifest {
                name: m.name.clone(),
                version: m.version.clone(),
                manifest_path: PathBuf::from("/fake").join(&m.name).join("platform.json"),
            })
            .collect())
    }

    fn update(&self, name: &str, version: &str, _out: &mut dyn Write) -> Result<()> {
        self.record("update", name, Some(version));
        Ok(())
    }
}

impl PlatformFactory for FakeBackend {
    fn resolve(&self, id_or_path: &str, version: Option<&str>) -> Result<Box<dyn Platform>> {
        self.record("resolve", id_or_path, version);
        let manifest = self
            .installed
            .borrow()
            .get(id_or_path)
            .filter(|m| version.is_none_or(|v| v == m.version))
            .cloned()
            .ok_or_else(|| unknown_platform(id_or_path))?;

        let installed = manifest
            .packages
            .iter()
            .filter(|(_, decl)| !decl.optional)
            .map(|(name, decl)| {
                let package = InstalledPackage {
                    kind: decl.kind.clone(),
                    version: Some("1.0.0".to_string()),
                    ..Default::default()
                };
                (name.clone(), package)
            })
            .collect();

        Ok(Box::new(FakePlatform {
            manifest,
            installed,
            update: self.packages_update.clone(),
            calls: Rc::clone(&self.calls),
        }))
    }
}

struct FakePlatform {
    manifest: PlatformManifest,
    installed: BTreeMap<String, InstalledPackage>,
    update: Option<PackagesUpdate>,
    calls: CallLog,
}

impl Platform for FakePlatform {
    fn manifest(&self) -> &PlatformManifest {
        &self.manifest
    }

    fn installed_packages(&self) -> &BTreeMap<String, InstalledPackage> {
        &self.installed
    }

    fn update_packages(&self) -> Result<Option<PackagesUpdate>> {
        self.calls.borrow_mut().push(format!(
            "update_packages {} {}",
            self.manifest.name, self.manifest.version
        ));
        Ok(self.update.clone())
    }
}

/// Scripted answer to every confirmation
pub struct FakePrompt {
    answer: bool,
    asked: RefCell<Vec<String>>,
}

impl FakePrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl UserPrompt for FakePrompt {
    fn confirm(&self, message: &str) -> Result<bool> {
        self.asked.borrow_mut().push(message.to_string());
        Ok(self.answer)
    }
}

//! Installed platform backed by the local store

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::catalog::{Catalog, CatalogPackage};
use super::store::{PlatformStore, StoredPlatform};
use super::versions;
use crate::backend::Platform;
use crate::domain::{InstalledPackage, PackageDecl, PackagesUpdate, PlatformManifest};
use crate::error::Result;

/// A platform read from `<home>/platforms/<name>`
#[derive(Debug, Clone)]
pub struct LocalPlatform {
    manifest: PlatformManifest,
    packages: BTreeMap<String, InstalledPackage>,
    store: PlatformStore,
    catalog_path: PathBuf,
}

impl LocalPlatform {
    pub fn new(stored: StoredPlatform, store: PlatformStore, catalog_path: PathBuf) -> Self {
        Self {
            manifest: stored.manifest,
            packages: stored.packages,
            store,
            catalog_path,
        }
    }
}

impl Platform for LocalPlatform {
    fn manifest(&self) -> &PlatformManifest {
        &self.manifest
    }

    fn installed_packages(&self) -> &BTreeMap<String, InstalledPackage> {
        &self.packages
    }

    fn update_packages(&self) -> Result<Option<PackagesUpdate>> {
        let catalog = Catalog::load(&self.catalog_path)?;
        refresh_packages(&self.store, &catalog, &self.manifest, &self.packages)
    }
}

/// Record kept for a package installed from the catalog
pub fn package_record(decl: &PackageDecl, package: &CatalogPackage) -> InstalledPackage {
    InstalledPackage {
        kind: decl.kind.clone(),
        version: Some(package.version.clone()),
        url: package.url.clone(),
        description: package.description.clone(),
        extra: BTreeMap::new(),
    }
}

/// Move installed packages to the highest catalog version their declared
/// requirement allows
///
/// Returns `None` when every package is already current. Packages the catalog
/// no longer lists are left untouched.
pub fn refresh_packages(
    store: &PlatformStore,
    catalog: &Catalog,
    manifest: &PlatformManifest,
    installed: &BTreeMap<String, InstalledPackage>,
) -> Result<Option<PackagesUpdate>> {
    let mut packages = installed.clone();
    let mut updated = Vec::new();

    for (name, record) in packages.iter_mut() {
        let decl = manifest.packages.get(name).cloned().unwrap_or_default();
        let Some(latest) = catalog.find_package(name, &decl.version)? else {
            tracing::warn!(package = %name, "Package is no longer in the catalog");
            continue;
        };

        let newer = match record.version.as_deref() {
            Some(current) => versions::is_newer(&latest.version, current).unwrap_or(true),
            None => true,
        };
        if !newer {
            continue;
        }

        tracing::info!(
            package = %name,
            from = ?record.version,
            to = %latest.version,
            "Updating package"
        );
        *record = InstalledPackage {
            extra: std::mem::take(&mut record.extra),
            ..package_record(&decl, latest)
        };
        updated.push(name.clone());
    }

    if updated.is_empty() {
        return Ok(None);
    }

    store.save_packages(&manifest.name, &packages)?;
    Ok(Some(PackagesUpdate { updated }))
}

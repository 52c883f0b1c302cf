//! Collaborator interfaces consumed by the operations
//!
//! The operations never touch the filesystem or the terminal prompt directly.
//! They talk to a [`Registry`] (the catalog), an [`Installer`], a
//! [`PlatformFactory`] and a [`UserPrompt`]. [`local`] implements the first
//! three on top of a home directory; [`prompt`] implements the last one.

use std::collections::BTreeMap;
use std::io::Write;

use crate::domain::{
    CatalogEntry, InstalledManifest, InstalledPackage, PackageDecl, PackagesUpdate,
    PlatformManifest,
};
use crate::error::Result;

pub mod local;
pub mod prompt;

pub use local::LocalBackend;
pub use prompt::InquirePrompt;

/// Which packages an install should pull in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSelection {
    /// Install these even when optional
    pub with_packages: Vec<String>,
    /// Never install these
    pub without_packages: Vec<String>,
    /// Skip the non-optional (default) packages
    pub skip_default_package: bool,
}

impl PackageSelection {
    /// Whether a declared package is selected
    ///
    /// Exclusion wins over inclusion.
    pub fn includes(&self, name: &str, decl: &PackageDecl) -> bool {
        if self.without_packages.iter().any(|p| p == name) {
            return false;
        }
        self.with_packages.iter().any(|p| p == name)
            || !(self.skip_default_package || decl.optional)
    }
}

/// Catalog of installable platforms
pub trait Registry {
    /// Every platform the catalog offers, in catalog order
    fn search(&self) -> Result<Vec<CatalogEntry>>;
}

/// Installs, removes and updates platforms
pub trait Installer {
    /// Install a platform. Returns `true` iff something was actually installed.
    fn install(
        &self,
        id: &str,
        version: Option<&str>,
        selection: &PackageSelection,
    ) -> Result<bool>;

    /// Remove a platform. Returns `true` iff something was removed.
    fn uninstall(&self, id: &str, version: Option<&str>) -> Result<bool>;

    /// Installed platforms in listing order
    fn installed(&self) -> Result<Vec<InstalledManifest>>;

    /// Full update of the platform installed as `name` at `version`, reporting
    /// progress lines to `out`
    fn update(&self, name: &str, version: &str, out: &mut dyn Write) -> Result<()>;
}

/// Resolves names or manifest paths to platform objects
pub trait PlatformFactory {
    /// Fails with `PlatmanError::UnknownPlatform` when nothing matches
    fn resolve(&self, id_or_path: &str, version: Option<&str>) -> Result<Box<dyn Platform>>;
}

/// Read-only view of a resolved platform
pub trait Platform {
    fn manifest(&self) -> &PlatformManifest;

    /// Packages present on disk, keyed by package name
    fn installed_packages(&self) -> &BTreeMap<String, InstalledPackage>;

    /// Refresh installed packages without touching the platform itself
    ///
    /// `Ok(None)` means everything was already current.
    fn update_packages(&self) -> Result<Option<PackagesUpdate>>;

    fn name(&self) -> &str {
        &self.manifest().name
    }

    fn title(&self) -> &str {
        &self.manifest().title
    }

    fn description(&self) -> &str {
        &self.manifest().description
    }

    fn version(&self) -> &str {
        &self.manifest().version
    }

    /// Declared packages, keyed by package name
    fn packages(&self) -> &BTreeMap<String, PackageDecl> {
        &self.manifest().packages
    }

    fn package_type(&self, name: &str) -> Option<&str> {
        self.packages().get(name).and_then(|decl| decl.kind.as_deref())
    }
}

/// Yes/no questions to the user
pub trait UserPrompt {
    fn confirm(&self, message: &str) -> Result<bool>;
}

//! Update operation
//!
//! Walks the installed platforms in listing order. A full update hands each
//! platform to [`Installer::update`]; `--only-packages` resolves the platform at
//! its exact installed version and refreshes its packages instead.

use std::io::Write;

use console::Style;

use crate::backend::{Installer, PlatformFactory};
use crate::cli::UpdateArgs;
use crate::domain::InstalledManifest;
use crate::error::Result;

/// Configuration options for update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    pub only_packages: bool,
}

impl From<&UpdateArgs> for UpdateOptions {
    fn from(args: &UpdateArgs) -> Self {
        Self {
            only_packages: args.only_packages,
        }
    }
}

/// High-level update operation
pub struct UpdateOperation<'a, B: PlatformFactory + Installer + ?Sized> {
    backend: &'a B,
}

impl<'a, B: PlatformFactory + Installer + ?Sized> UpdateOperation<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Update every installed platform
    pub fn execute(&self, options: &UpdateOptions, out: &mut dyn Write) -> Result<()> {
        let installed = self.backend.installed()?;
        tracing::debug!(count = installed.len(), "Updating installed platforms");

        for manifest in &installed {
            self.update_one(manifest, options, out)?;
        }
        Ok(())
    }

    fn update_one(
        &self,
        manifest: &InstalledManifest,
        options: &UpdateOptions,
        out: &mut dyn Write,
    ) -> Result<()> {
        writeln!(
            out,
            "Platform {} @ {}",
            Style::new().cyan().apply_to(&manifest.name),
            manifest.version
        )?;
        writeln!(out, "--------")?;

        if options.only_packages {
            let platform = self
                .backend
                .resolve(&manifest.name, Some(&manifest.version))?;
            if platform.update_packages()?.is_none() {
                writeln!(out, "{}", Style::new().green().apply_to("Packages are up-to-date"))?;
            }
        } else {
            self.backend.update(&manifest.name, &manifest.version, out)?;
        }

        writeln!(out)?;
        Ok(())
    }
}

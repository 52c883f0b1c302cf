//! Install operation
//!
//! Installs each `platform[@version]` token in order. Tokens are independent:
//! an error stops the batch, platforms installed before it stay installed.

use std::io::Write;

use console::Style;

use crate::backend::{Installer, PackageSelection};
use crate::cli::InstallArgs;
use crate::domain::PlatformSpec;
use crate::error::Result;

/// Configuration options for install
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallOptions {
    pub selection: PackageSelection,
}

impl From<&InstallArgs> for InstallOptions {
    fn from(args: &InstallArgs) -> Self {
        Self {
            selection: PackageSelection {
                with_packages: args.with_packages.clone(),
                without_packages: args.without_packages.clone(),
                skip_default_package: args.skip_default_package,
            },
        }
    }
}

/// High-level install operation
pub struct InstallOperation<'a, I: Installer + ?Sized> {
    installer: &'a I,
}

impl<'a, I: Installer + ?Sized> InstallOperation<'a, I> {
    pub fn new(installer: &'a I) -> Self {
        Self { installer }
    }

    /// Install every token, reporting each platform that was actually installed
    pub fn execute(
        &self,
        tokens: &[String],
        options: &InstallOptions,
        out: &mut dyn Write,
    ) -> Result<()> {
        for token in tokens {
            self.install_one(token, options, out)?;
        }
        Ok(())
    }

    /// Install a single token; `Ok(false)` when the installer had nothing to do
    pub fn install_one(
        &self,
        token: &str,
        options: &InstallOptions,
        out: &mut dyn Write,
    ) -> Result<bool> {
        let spec = PlatformSpec::parse(token);
        tracing::debug!(platform = %spec.id, version = ?spec.version, "Installing platform");

        let installed = self
            .installer
            .install(&spec.id, spec.version(), &options.selection)?;
        if installed {
            writeln!(
                out,
                "The platform '{}' has been successfully installed!",
                Style::new().cyan().apply_to(token)
            )?;
            writeln!(
                out,
                "The rest of packages will be installed automatically depending on your build \
                 environment."
            )?;
        }

        Ok(installed)
    }
}

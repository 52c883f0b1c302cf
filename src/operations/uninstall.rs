//! Uninstall operation

use std::io::Write;

use console::Style;

use crate::backend::Installer;
use crate::domain::PlatformSpec;
use crate::error::Result;

/// High-level uninstall operation
pub struct UninstallOperation<'a, I: Installer + ?Sized> {
    installer: &'a I,
}

impl<'a, I: Installer + ?Sized> UninstallOperation<'a, I> {
    pub fn new(installer: &'a I) -> Self {
        Self { installer }
    }

    /// Uninstall every token in order, stopping at the first error
    pub fn execute(&self, tokens: &[String], out: &mut dyn Write) -> Result<()> {
        for token in tokens {
            let spec = PlatformSpec::parse(token);
            tracing::debug!(platform = %spec.id, version = ?spec.version, "Uninstalling platform");

            if self.installer.uninstall(&spec.id, spec.version())? {
                writeln!(
                    out,
                    "The platform '{}' has been successfully uninstalled!",
                    Style::new().cyan().apply_to(token)
                )?;
            }
        }
        Ok(())
    }
}

//! Show operation
//!
//! Resolves an installed platform and prints its details. When the platform is
//! unknown the user is offered to install it first (or it is installed right
//! away when prompts are disabled); declining ends with
//! `PlatmanError::PlatformNotInstalledYet`.

use std::io::Write;

use super::install::{InstallOperation, InstallOptions};
use crate::backend::{Installer, Platform, PlatformFactory, UserPrompt};
use crate::domain::PlatformSpec;
use crate::error::{PlatmanError, Result, not_installed_yet};
use crate::ui::display_platform;

/// High-level show operation
pub struct ShowOperation<'a, B: PlatformFactory + Installer + ?Sized, P: UserPrompt + ?Sized> {
    backend: &'a B,
    prompt: &'a P,
    enable_prompts: bool,
}

impl<'a, B, P> ShowOperation<'a, B, P>
where
    B: PlatformFactory + Installer + ?Sized,
    P: UserPrompt + ?Sized,
{
    pub fn new(backend: &'a B, prompt: &'a P, enable_prompts: bool) -> Self {
        Self {
            backend,
            prompt,
            enable_prompts,
        }
    }

    /// Execute show operation
    pub fn execute(&self, token: &str, out: &mut dyn Write) -> Result<()> {
        let platform = self.resolve_or_install(token, out)?;
        display_platform(platform.as_ref(), out)
    }

    fn resolve_or_install(&self, token: &str, out: &mut dyn Write) -> Result<Box<dyn Platform>> {
        let spec = PlatformSpec::parse(token);

        match self.backend.resolve(&spec.id, spec.version()) {
            Err(PlatmanError::UnknownPlatform { .. }) => {}
            resolved => return resolved,
        }

        if !self.confirm_install(token)? {
            return Err(not_installed_yet(token));
        }

        InstallOperation::new(self.backend).install_one(token, &InstallOptions::default(), out)?;
        self.backend.resolve(&spec.id, spec.version())
    }

    fn confirm_install(&self, token: &str) -> Result<bool> {
        if !self.enable_prompts {
            tracing::debug!(platform = %token, "Prompts disabled, installing without asking");
            return Ok(true);
        }

        self.prompt.confirm(&format!(
            "The platform '{token}' has not been installed yet. Would you like to install it now?"
        ))
    }
}

//! List operation

use std::io::Write;

use crate::backend::{Installer, PlatformFactory};
use crate::config::Settings;
use crate::error::Result;
use crate::ui::{PlatformSummary, summary_formatter};

/// High-level list operation
pub struct ListOperation<'a, B: PlatformFactory + Installer + ?Sized> {
    backend: &'a B,
    settings: &'a Settings,
}

impl<'a, B: PlatformFactory + Installer + ?Sized> ListOperation<'a, B> {
    pub fn new(backend: &'a B, settings: &'a Settings) -> Self {
        Self { backend, settings }
    }

    /// Summaries of the installed platforms, in listing order
    pub fn summaries(&self) -> Result<Vec<PlatformSummary>> {
        self.backend
            .installed()?
            .iter()
            .map(|manifest| -> Result<PlatformSummary> {
                let platform = self
                    .backend
                    .resolve(&manifest.name, Some(&manifest.version))?;
                Ok(PlatformSummary::from_platform(platform.as_ref(), self.settings))
            })
            .collect()
    }

    /// Execute list operation
    pub fn execute(&self, json_output: bool, out: &mut dyn Write) -> Result<()> {
        let summaries = self.summaries()?;
        summary_formatter(json_output).format(&summaries, out)
    }
}

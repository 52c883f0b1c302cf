//! Search operation

use std::io::Write;

use crate::backend::Registry;
use crate::config::Settings;
use crate::domain::filter_catalog;
use crate::error::Result;
use crate::ui::{PlatformSummary, summary_formatter};

/// High-level search operation
pub struct SearchOperation<'a, R: Registry + ?Sized> {
    registry: &'a R,
    settings: &'a Settings,
}

impl<'a, R: Registry + ?Sized> SearchOperation<'a, R> {
    pub fn new(registry: &'a R, settings: &'a Settings) -> Self {
        Self { registry, settings }
    }

    /// Catalog rows matching `query`, in catalog order
    pub fn matches(&self, query: Option<&str>) -> Result<Vec<PlatformSummary>> {
        let entries = self.registry.search()?;
        let summaries: Vec<PlatformSummary> = filter_catalog(&entries, query)
            .map(|entry| PlatformSummary::from_entry(entry, self.settings))
            .collect();

        tracing::debug!(
            query = ?query,
            total = entries.len(),
            matched = summaries.len(),
            "Filtered catalog"
        );
        Ok(summaries)
    }

    /// Print the matching rows
    pub fn execute(
        &self,
        query: Option<&str>,
        json_output: bool,
        out: &mut dyn Write,
    ) -> Result<()> {
        let summaries = self.matches(query)?;
        summary_formatter(json_output).format(&summaries, out)
    }
}

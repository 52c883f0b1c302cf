//! Formatters for platform summaries
//!
//! `search` and `list` print the same summary block per platform, either as
//! styled text or as a JSON array.

use std::io::Write;

use console::Style;
use serde::Serialize;

use crate::backend::Platform;
use crate::config::Settings;
use crate::domain::CatalogEntry;
use crate::error::Result;

/// Structured view of one platform, as serialized by `--json-output`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformSummary {
    pub name: String,
    pub title: String,
    pub description: String,
    /// Text output only
    #[serde(skip)]
    pub homepage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Package names only
    pub packages: Vec<String>,
}

impl PlatformSummary {
    /// Summary of a catalog row; catalog rows carry no version
    pub fn from_entry(entry: &CatalogEntry, settings: &Settings) -> Self {
        Self {
            name: entry.type_id.clone(),
            title: entry.display_name.clone(),
            description: entry.description.clone(),
            homepage: settings.homepage_url(&entry.type_id),
            version: None,
            packages: entry.packages.clone(),
        }
    }

    /// Summary of an installed platform, listing the packages present on disk
    pub fn from_platform(platform: &dyn Platform, settings: &Settings) -> Self {
        Self {
            name: platform.name().to_string(),
            title: platform.title().to_string(),
            description: platform.description().to_string(),
            homepage: settings.homepage_url(platform.name()),
            version: Some(platform.version().to_string()),
            packages: platform.installed_packages().keys().cloned().collect(),
        }
    }
}

/// Output strategy for a list of platform summaries
pub trait SummaryFormatter {
    fn format(&self, platforms: &[PlatformSummary], out: &mut dyn Write) -> Result<()>;
}

/// Human readable blocks
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFormatter;

impl SummaryFormatter for TextFormatter {
    fn format(&self, platforms: &[PlatformSummary], out: &mut dyn Write) -> Result<()> {
        for platform in platforms {
            write_summary(platform, out)?;
        }
        Ok(())
    }
}

/// One JSON array of summaries
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl SummaryFormatter for JsonFormatter {
    fn format(&self, platforms: &[PlatformSummary], out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer(&mut *out, platforms)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Pick the formatter for a `--json-output` flag
pub fn summary_formatter(json_output: bool) -> Box<dyn SummaryFormatter> {
    if json_output {
        Box::new(JsonFormatter)
    } else {
        Box::new(TextFormatter)
    }
}

/// `name ~ title` followed by a `=` rule as wide as the line
pub fn write_heading(name: &str, title: &str, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "{} ~ {}",
        Style::new().cyan().apply_to(name),
        title
    )?;
    writeln!(out, "{}", "=".repeat(3 + name.len() + title.len()))?;
    Ok(())
}

fn write_summary(platform: &PlatformSummary, out: &mut dyn Write) -> Result<()> {
    write_heading(&platform.name, &platform.title, out)?;
    writeln!(out, "{}", platform.description)?;
    writeln!(out)?;

    let label = Style::new().bold();
    writeln!(out, "{} {}", label.apply_to("Home:"), platform.homepage)?;
    if !platform.packages.is_empty() {
        writeln!(
            out,
            "{} {}",
            label.apply_to("Packages:"),
            platform.packages.join(", ")
        )?;
    }
    if let Some(ref version) = platform.version {
        writeln!(out, "{} {}", label.apply_to("Version:"), version)?;
    }
    writeln!(out)?;
    Ok(())
}

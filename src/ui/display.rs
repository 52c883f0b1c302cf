//! Detailed platform display used by `show`

use std::io::Write;

use console::Style;

use super::formatter::write_heading;
use crate::backend::Platform;
use crate::error::Result;

/// Installed package metadata that `show` prints
const SHOWN_PACKAGE_FIELDS: [&str; 3] = ["url", "version", "description"];

/// Write the full description of a resolved platform and its packages
pub fn display_platform(platform: &dyn Platform, out: &mut dyn Write) -> Result<()> {
    let label = Style::new().bold();
    let manifest = platform.manifest();

    write_heading(platform.name(), platform.title(), out)?;
    writeln!(out, "{}", platform.description())?;
    writeln!(out)?;
    writeln!(out, "{} {}", label.apply_to("Version:"), platform.version())?;
    if let Some(ref homepage) = manifest.homepage {
        writeln!(out, "{} {}", label.apply_to("Home:"), homepage)?;
    }
    if let Some(ref license) = manifest.license {
        writeln!(out, "{} {}", label.apply_to("License:"), license.kind)?;
    }
    if !manifest.frameworks.is_empty() {
        let frameworks: Vec<&str> = manifest.frameworks.keys().map(String::as_str).collect();
        writeln!(out, "{} {}", label.apply_to("Frameworks:"), frameworks.join(", "))?;
    }

    let installed = platform.installed_packages();
    for (name, decl) in platform.packages() {
        writeln!(out)?;
        writeln!(out, "Package {}", Style::new().cyan().apply_to(name))?;
        writeln!(out, "{}", "-".repeat(8 + name.len()))?;
        if let Some(kind) = platform.package_type(name) {
            writeln!(out, "{} {}", label.apply_to("Type:"), kind)?;
        }
        writeln!(out, "{} {}", label.apply_to("Requirements:"), decl.version)?;

        match installed.get(name) {
            Some(package) => {
                writeln!(
                    out,
                    "{} {}",
                    label.apply_to("Installed:"),
                    Style::new().green().apply_to("Yes")
                )?;
                for (key, value) in package.fields() {
                    if SHOWN_PACKAGE_FIELDS.contains(&key.as_str()) {
                        let field = format!("{}:", title_case(&key));
                        writeln!(out, "{} {}", label.apply_to(field), value)?;
                    }
                }
            }
            None => writeln!(out, "{} No (optional)", label.apply_to("Installed:"))?,
        }
    }

    Ok(())
}

/// Uppercase the first letter of each word
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

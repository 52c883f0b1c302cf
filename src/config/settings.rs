//! Process-wide settings (`settings.yaml` plus environment overrides)

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, config_invalid, config_parse_failed, file_read_failed};

/// Environment variable overriding the catalog location
pub const CATALOG_ENV: &str = "PLATMAN_CATALOG";

/// Environment variable toggling interactive prompts
pub const PROMPTS_ENV: &str = "PLATMAN_ENABLE_PROMPTS";

/// Directory under the user's home directory used when no home is given
const HOME_DIR: &str = ".platman";

/// Settings file inside the home directory
pub const SETTINGS_FILE: &str = "settings.yaml";

/// Default catalog file inside the home directory
pub const CATALOG_FILE: &str = "catalog.json";

/// Installed platforms live under this subdirectory of the home directory
pub const PLATFORMS_DIR: &str = "platforms";

/// Base of the generated `Home:` links
pub const DEFAULT_HOMEPAGE_BASE: &str = "https://platman.dev/platforms";

/// Shape of `settings.yaml`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    enable_prompts: Option<bool>,
    catalog: Option<PathBuf>,
    homepage_base: Option<String>,
}

/// Resolved settings for one process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root of everything platman stores
    pub home_dir: PathBuf,
    /// Catalog file consulted by search and install
    pub catalog_path: PathBuf,
    /// Ask before installing a missing platform from `show`
    pub enable_prompts: bool,
    /// Base URL for the `Home:` line of summaries
    pub homepage_base: String,
}

impl Settings {
    /// Default settings rooted at `home_dir`
    pub fn new(home_dir: impl Into<PathBuf>) -> Self {
        let home_dir = home_dir.into();
        Self {
            catalog_path: home_dir.join(CATALOG_FILE),
            home_dir,
            enable_prompts: true,
            homepage_base: DEFAULT_HOMEPAGE_BASE.to_string(),
        }
    }

    /// Load settings from the process environment
    pub fn load(home: Option<PathBuf>) -> Result<Self> {
        Self::load_with(home, |key| std::env::var(key).ok())
    }

    /// Load settings with an explicit environment lookup
    pub fn load_with<F>(home: Option<PathBuf>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let home_dir = match home {
            Some(path) => path,
            None => default_home()?,
        };

        let mut settings = Self::new(home_dir);
        settings.apply_file()?;

        if let Some(catalog) = env(CATALOG_ENV).filter(|v| !v.is_empty()) {
            settings.catalog_path = PathBuf::from(catalog);
        }
        if let Some(value) = env(PROMPTS_ENV) {
            settings.enable_prompts = parse_bool(PROMPTS_ENV, &value)?;
        }

        tracing::debug!(?settings, "Loaded settings");
        Ok(settings)
    }

    fn apply_file(&mut self) -> Result<()> {
        let path = self.home_dir.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;
        let file: SettingsFile = serde_yaml::from_str(&content)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))?;

        if let Some(enable_prompts) = file.enable_prompts {
            self.enable_prompts = enable_prompts;
        }
        if let Some(catalog) = file.catalog {
            self.catalog_path = resolve_relative(&self.home_dir, catalog);
        }
        if let Some(base) = file.homepage_base {
            self.homepage_base = base;
        }

        Ok(())
    }

    /// Directory holding installed platforms
    pub fn platforms_dir(&self) -> PathBuf {
        self.home_dir.join(PLATFORMS_DIR)
    }

    /// Homepage link derived from a platform identifier
    pub fn homepage_url(&self, id: &str) -> String {
        format!("{}/{}", self.homepage_base.trim_end_matches('/'), id)
    }
}

fn default_home() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(HOME_DIR))
        .ok_or_else(|| config_invalid("Could not determine home directory; pass --home"))
}

fn resolve_relative(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(config_invalid(format!(
            "{key} must be a boolean (true/false), got '{other}'"
        ))),
    }
}

//! Common test utilities for platman integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Catalog shipped with the tests
pub const CATALOG_FIXTURE: &str = include_str!("fixtures/catalog.json");

/// A platman home directory seeded with the catalog fixture
pub struct TestHome {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the home directory
    pub path: PathBuf,
}

impl TestHome {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let home = Self { temp, path };
        home.write_file("catalog.json", CATALOG_FIXTURE);
        home
    }

    /// platman command running against this home, with prompts disabled
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("platman").expect("Failed to find platman binary");
        cmd.env("PLATMAN_HOME", &self.path)
            .env("PLATMAN_ENABLE_PROMPTS", "0")
            .env_remove("PLATMAN_CATALOG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the home directory
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the home directory
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Whether a platform directory exists
    #[allow(dead_code)]
    pub fn is_installed(&self, name: &str) -> bool {
        self.path
            .join("platforms")
            .join(name)
            .join("platform.json")
            .is_file()
    }

    /// Parsed `packages.json` of an installed platform
    #[allow(dead_code)]
    pub fn installed_packages(&self, name: &str) -> serde_json::Value {
        let content = self.read_file(&format!("platforms/{name}/packages.json"));
        serde_json::from_str(&content).expect("Failed to parse packages.json")
    }

    /// Install platforms, asserting success
    #[allow(dead_code)]
    pub fn install(&self, args: &[&str]) {
        self.cmd().arg("install").args(args).assert().success();
    }
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

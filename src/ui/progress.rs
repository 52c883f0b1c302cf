//! Progress reporting for package installation
//!
//! All progress reporting goes through the [`ProgressReporter`] trait so the
//! installer can draw an `indicatif` bar on a terminal and stay silent
//! otherwise.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for installing the packages of one platform
pub trait ProgressReporter {
    /// Begin installing `total_packages` packages for `platform`
    fn start(&mut self, platform: &str, total_packages: u64);

    /// One package has been installed
    fn package(&mut self, name: &str);

    /// All packages are installed
    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Progress bar on stderr; hidden automatically when stderr is not a terminal
#[derive(Default)]
pub struct InteractiveProgressReporter {
    pb: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start(&mut self, platform: &str, total_packages: u64) {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let pb = ProgressBar::new(total_packages);
        pb.set_style(style);
        pb.set_message(format!("Installing {platform}"));
        self.pb = Some(pb);
    }

    fn package(&mut self, name: &str) {
        if let Some(ref pb) = self.pb {
            pb.set_message(name.to_string());
            pb.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(pb) = self.pb.take() {
            pb.abandon();
        }
    }
}

/// No-op reporter
#[derive(Debug, Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _platform: &str, _total_packages: u64) {}

    fn package(&mut self, _name: &str) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

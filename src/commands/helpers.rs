//! Command helper utilities

use std::path::PathBuf;

use console::Term;

use crate::backend::LocalBackend;
use crate::config::Settings;
use crate::error::Result;

/// Load settings for the given home directory and open the backend on top of them
///
/// The package progress bar is only drawn when stderr is a terminal.
pub fn open_backend(home: Option<PathBuf>) -> Result<(Settings, LocalBackend)> {
    let settings = Settings::load(home)?;
    let backend = LocalBackend::new(&settings).with_progress(Term::stderr().is_term());
    Ok((settings, backend))
}

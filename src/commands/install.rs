//! Install command implementation

use std::path::PathBuf;

use super::helpers::open_backend;
use crate::cli::InstallArgs;
use crate::error::Result;
use crate::operations::{InstallOperation, InstallOptions};

/// Run install command
pub fn run(home: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let (_settings, backend) = open_backend(home)?;
    let options = InstallOptions::from(&args);
    let mut stdout = std::io::stdout().lock();

    InstallOperation::new(&backend).execute(&args.platforms, &options, &mut stdout)
}

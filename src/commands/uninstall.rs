//! Uninstall command implementation

use std::path::PathBuf;

use super::helpers::open_backend;
use crate::cli::UninstallArgs;
use crate::error::Result;
use crate::operations::UninstallOperation;

/// Run uninstall command
pub fn run(home: Option<PathBuf>, args: UninstallArgs) -> Result<()> {
    let (_settings, backend) = open_backend(home)?;
    let mut stdout = std::io::stdout().lock();

    UninstallOperation::new(&backend).execute(&args.platforms, &mut stdout)
}

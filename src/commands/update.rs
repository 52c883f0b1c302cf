//! Update command implementation

use std::path::PathBuf;

use super::helpers::open_backend;
use crate::cli::UpdateArgs;
use crate::error::Result;
use crate::operations::{UpdateOperation, UpdateOptions};

/// Run update command
pub fn run(home: Option<PathBuf>, args: UpdateArgs) -> Result<()> {
    let (_settings, backend) = open_backend(home)?;
    let options = UpdateOptions::from(&args);
    let mut stdout = std::io::stdout();

    UpdateOperation::new(&backend).execute(&options, &mut stdout)
}

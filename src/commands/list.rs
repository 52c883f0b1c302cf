//! List command implementation

use std::path::PathBuf;

use super::helpers::open_backend;
use crate::cli::ListArgs;
use crate::error::Result;
use crate::operations::ListOperation;

/// Run list command
pub fn run(home: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let (settings, backend) = open_backend(home)?;
    let mut stdout = std::io::stdout().lock();

    ListOperation::new(&backend, &settings).execute(args.json_output, &mut stdout)
}

//! Search command implementation

use std::path::PathBuf;

use super::helpers::open_backend;
use crate::cli::SearchArgs;
use crate::error::Result;
use crate::operations::SearchOperation;

/// Run search command
pub fn run(home: Option<PathBuf>, args: SearchArgs) -> Result<()> {
    let (settings, backend) = open_backend(home)?;
    let mut stdout = std::io::stdout().lock();

    SearchOperation::new(&backend, &settings).execute(
        args.query.as_deref(),
        args.json_output,
        &mut stdout,
    )
}

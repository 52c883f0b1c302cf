//! Show command implementation

use std::path::PathBuf;

use super::helpers::open_backend;
use crate::backend::InquirePrompt;
use crate::cli::ShowArgs;
use crate::error::Result;
use crate::operations::ShowOperation;

/// Run show command
pub fn run(home: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let (settings, backend) = open_backend(home)?;
    let prompt = InquirePrompt;
    let mut stdout = std::io::stdout();

    ShowOperation::new(&backend, &prompt, settings.enable_prompts)
        .execute(&args.platform, &mut stdout)
}

use clap::Parser;

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update every installed platform:\n    platman update\n\n\
                  Refresh packages without changing platform versions:\n    platman update --only-packages")]
pub struct UpdateArgs {
    /// Only refresh packages, keep the installed platform versions
    #[arg(long)]
    pub only_packages: bool,
}

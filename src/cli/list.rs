use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List installed platforms:\n    platman list\n\n\
                  Machine readable output:\n    platman list --json-output")]
pub struct ListArgs {
    /// Print a JSON array instead of text
    #[arg(long)]
    pub json_output: bool,
}

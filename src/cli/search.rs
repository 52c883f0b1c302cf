use clap::Parser;

/// Arguments for the search command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List every platform in the catalog:\n    platman search\n    platman search all\n\n\
                  Find platforms mentioning a word:\n    platman search arduino\n\n\
                  Machine readable output:\n    platman search stm32 --json-output")]
pub struct SearchArgs {
    /// Case-insensitive text to look for; `all` or nothing lists everything
    pub query: Option<String>,

    /// Print a JSON array instead of text
    #[arg(long)]
    pub json_output: bool,
}

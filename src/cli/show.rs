use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show an installed platform:\n    platman show atmelavr\n\n\
                  Show a platform from its manifest:\n    platman show ./platforms/atmelavr/platform.json")]
pub struct ShowArgs {
    /// Platform name, or path to an installed platform.json, optionally pinned with @version
    #[arg(value_name = "PLATFORM")]
    pub platform: String,
}

use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    platman completions --shell bash > ~/.bash_completion.d/platman\n\n\
                  Generate zsh completions:\n    platman completions --shell zsh > ~/.zfunc/_platman\n\n\
                  Generate fish completions:\n    platman completions --shell fish > ~/.config/fish/completions/platman.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

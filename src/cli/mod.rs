//! CLI definitions using clap derive API
//!
//! Each command's argument type lives in its own submodule.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod list;
pub mod search;
pub mod show;
pub mod uninstall;
pub mod update;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use search::SearchArgs;
pub use show::ShowArgs;
pub use uninstall::UninstallArgs;
pub use update::UpdateArgs;

/// platman - development platform manager
///
/// Discover, install, inspect, update and remove development platforms.
#[derive(Parser, Debug)]
#[command(
    name = "platman",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Manage development platforms and their packages",
    long_about = "platman installs development platforms (a toolchain and framework description \
                  plus the packages it needs) from a catalog, and keeps them up to date.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  platman search arduino                 \x1b[90m# Find platforms in the catalog\x1b[0m\n   \
                  platman install atmelavr@1.2.0         \x1b[90m# Install a pinned version\x1b[0m\n   \
                  platman show atmelavr                  \x1b[90m# Show platform and package details\x1b[0m\n   \
                  platman update --only-packages         \x1b[90m# Refresh packages only\x1b[0m\n   \
                  platman uninstall atmelavr             \x1b[90m# Remove a platform\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Home directory holding settings, catalog and installed platforms
    /// (defaults to ~/.platman)
    #[arg(long, global = true, env = "PLATMAN_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the platform catalog
    Search(SearchArgs),

    /// Install platforms
    Install(InstallArgs),

    /// List installed platforms
    List(ListArgs),

    /// Show details of an installed platform
    Show(ShowArgs),

    /// Uninstall platforms
    Uninstall(UninstallArgs),

    /// Update installed platforms
    Update(UpdateArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

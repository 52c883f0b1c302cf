//! platman - development platform manager
//!
//! A command line tool to discover, install, inspect, update and remove
//! development platforms (a toolchain and framework description plus the
//! versioned packages it needs).

use clap::Parser;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod backend;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod operations;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

/// Route diagnostics to stderr so stdout stays machine readable
fn init_tracing(verbose: bool) {
    let builder = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_target(verbose);

    let result = if verbose {
        tracing::subscriber::set_global_default(builder.with_max_level(Level::DEBUG).finish())
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing::subscriber::set_global_default(builder.with_env_filter(filter).finish())
    };

    if let Err(e) = result {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!("Verbose mode enabled");

    let result = match cli.command {
        Commands::Search(args) => commands::search::run(cli.home, args),
        Commands::Install(args) => commands::install::run(cli.home, args),
        Commands::List(args) => commands::list::run(cli.home, args),
        Commands::Show(args) => commands::show::run(cli.home, args),
        Commands::Uninstall(args) => commands::uninstall::run(cli.home, args),
        Commands::Update(args) => commands::update::run(cli.home, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

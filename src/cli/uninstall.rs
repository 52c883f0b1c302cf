use clap::Parser;

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Uninstall a platform:\n    platman uninstall atmelavr\n\n\
                  Uninstall only if the installed version matches:\n    platman uninstall atmelavr@1.2.0")]
pub struct UninstallArgs {
    /// Platforms to uninstall, each optionally pinned with @version
    #[arg(required = true, value_name = "PLATFORM[@VERSION]")]
    pub platforms: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_uninstall() {
        let cli = Cli::try_parse_from(["platman", "uninstall", "atmelavr", "native@1.0.0"]).unwrap();
        match cli.command {
            Commands::Uninstall(args) => {
                assert_eq!(args.platforms, vec!["atmelavr", "native@1.0.0"]);
            }
            _ => panic!("Expected Uninstall command"),
        }
    }

    #[test]
    fn test_cli_parsing_uninstall_requires_platform() {
        assert!(Cli::try_parse_from(["platman", "uninstall"]).is_err());
    }
}

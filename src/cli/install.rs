use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install the latest version:\n    platman install atmelavr\n\n\
                   Install a specific version:\n    platman install atmelavr@1.2.0\n    \
                   platman install 'ststm32@^2'\n\n\
                   Pull in an optional package:\n    platman install atmelavr --with-package framework-arduinoavr\n\n\
                   Install only the listed packages:\n    platman install atmelavr --skip-default-package --with-package tool-avrdude")]
pub struct InstallArgs {
    /// Platforms to install, each optionally pinned with @version
    #[arg(required = true, value_name = "PLATFORM[@VERSION]")]
    pub platforms: Vec<String>,

    /// Also install this package, even when it is optional (repeatable)
    #[arg(long = "with-package", value_name = "PACKAGE")]
    pub with_packages: Vec<String>,

    /// Never install this package (repeatable)
    #[arg(long = "without-package", value_name = "PACKAGE")]
    pub without_packages: Vec<String>,

    /// Skip the packages a platform installs by default
    #[arg(long)]
    pub skip_default_package: bool,
}

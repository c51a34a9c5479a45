use clap::{Args, Parser, Subcommand, ValueEnum};
use renumber_core::{AppConfig, OrderPolicy};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "renumber")]
#[command(about = "Renumber name_<n>.ext files into contiguous, zero-padded sequences", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub options: RunOptions,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Renumber the files directly inside PATH
    Run {
        path: PathBuf,
    },
    /// Ask for a directory path, then renumber it
    Prompt,
    /// Print configuration values
    PrintConfig,
}

/// Flags that override values from Config.toml.
#[derive(Debug, Default, Args)]
pub struct RunOptions {
    /// Report what would be renamed without renaming anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Order in which files receive numbers
    #[arg(long, value_enum, global = true)]
    pub order: Option<OrderArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Sort by file name
    Name,
    /// Keep the order the filesystem lists entries in
    Filesystem,
}

impl From<OrderArg> for OrderPolicy {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Name => OrderPolicy::Name,
            OrderArg::Filesystem => OrderPolicy::Filesystem,
        }
    }
}

impl RunOptions {
    pub fn apply(&self, config: &mut AppConfig) {
        if self.dry_run {
            config.dry_run = true;
        }
        if let Some(order) = self.order {
            config.order = order.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_with_flags() {
        let cli = Cli::parse_from(["renumber", "run", "/tmp/shots", "--dry-run", "--order", "filesystem"]);
        match cli.command {
            Some(Commands::Run { path }) => assert_eq!(path, PathBuf::from("/tmp/shots")),
            other => panic!("unexpected command: {:?}", other),
        }

        let mut config = AppConfig::default();
        cli.options.apply(&mut config);
        assert!(config.dry_run);
        assert_eq!(config.order, OrderPolicy::Filesystem);
    }

    #[test]
    fn test_no_command_keeps_config_values() {
        let cli = Cli::parse_from(["renumber"]);
        assert!(cli.command.is_none());

        let mut config = AppConfig {
            order: OrderPolicy::Filesystem,
            ignore_patterns: vec![],
            dry_run: true,
        };
        cli.options.apply(&mut config);
        assert!(config.dry_run);
        assert_eq!(config.order, OrderPolicy::Filesystem);
    }
}

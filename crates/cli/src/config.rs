//! CLI configuration and entry point.

use crate::commands::Command;
use clap::Parser;

/// Inspect rendezvous-hash replica placement from the command line.
#[derive(Debug, Parser)]
#[command(name = "rendezvous", version, about)]
pub struct CliConfig {
    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Initialize logging and execute the selected command.
    pub fn run(self) -> anyhow::Result<()> {
        let level = match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();

        self.command.execute()
    }
}

pub mod check;

use clap::{ArgAction, Parser};
use hostcheck_common::config::Config;

#[derive(Parser, Debug)]
#[command(name = "hostcheck")]
#[command(version)]
#[command(about = "Checks that this machine resolves and answers pings under its own names.")]
pub struct CommandLine {
    /// Print the report without colors
    #[arg(long)]
    pub no_color: bool,
    /// Show more diagnostics on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            no_color: self.no_color,
            verbosity: self.verbose,
        }
    }
}

mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, check};
use terminal::{logging, print};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();
    let cfg = commands.to_config();

    logging::init_logging(cfg.verbosity);
    print::initialize(&cfg);

    check::check().await
}

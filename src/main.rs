use clap::Parser;
use std::process::ExitCode;
use trierouter::cli::{run_cli, Cli};
use trierouter::logging::{init_logging_with_config, LogConfig};

fn main() -> anyhow::Result<ExitCode> {
    init_logging_with_config(&LogConfig::from_env())?;
    run_cli(Cli::parse())
}

use anyhow::Result;
use clap::Parser;

mod carp_cmd;
mod check_cmd;
mod cli;
mod logging;
mod render_cmd;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_tracing(cli.verbose);

    match cli.command {
        Command::Render(args) => render_cmd::run_render(args),
        Command::Check(args) => check_cmd::run_check(args),
        Command::Carp(args) => carp_cmd::run_carp(args),
    }
}

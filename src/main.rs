mod cli;
mod config;
mod convert;
mod date_cmd;
mod logging;
mod occasions_cmd;
mod parasha_cmd;
mod plan_cmd;
mod roster;
mod suggest_cmd;
mod yahrzeits_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::HebrewDate(args) => date_cmd::run(args),
        Command::Occasions(args) => occasions_cmd::run(args),
        Command::Parasha(args) => parasha_cmd::run(args),
        Command::Suggest(args) => suggest_cmd::run(args),
        Command::Plan(args) => plan_cmd::run(args),
        Command::Yahrzeits(args) => yahrzeits_cmd::run(args),
    }
}

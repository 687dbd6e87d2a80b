use std::process::ExitCode;

use clap::Parser;
use wordlist_engine::cli::{self, parsers::CliParser};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    cli::run(CliParser::parse())
}

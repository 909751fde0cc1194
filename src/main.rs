#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

use std::process::ExitCode;

use clap::Parser;

mod cli;
use cli::{Cli, Command};

mod client;
use client::{InputClient, InputSource};

mod config;
use crate::config::Config;

mod errors;
use errors::Error;

mod logging;

mod puzzle;

mod puzzles;

mod runner;
use runner::Runner;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    if let Command::List(filter) = &cli.command {
        for solution in runner::selection(filter.year()) {
            println!("{}: {}", solution.id(), solution.title());
        }

        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let runner = Runner::new(InputClient::new(&config)?);

    match cli.command {
        Command::Run(run) => {
            let id = run.id();
            let answers = runner.run(id, &InputSource::new(id, run.input())).await?;

            print!("{answers}");
            Ok(())
        }
        Command::All(filter) => runner.run_all(filter.year()).await,
        Command::List(_) => Ok(()),
    }
}

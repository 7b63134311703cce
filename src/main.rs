#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;
extern crate env_logger;
extern crate thiserror;

mod anger;
mod bundle;
mod config;
mod error;
mod problem;
mod read_words;

use crate::config::Command;
use crate::error::Error;
use crate::problem::Problem;
use std::io::{self, Write};
use std::process;

/// Builds CLI app metadata, especially command line arguments format
/// and parses given arguments.
fn build_app<'a, 'b>() -> clap::App<'a, 'b> {
    let settings = {
        use clap::AppSettings::*;
        [GlobalVersion, SubcommandRequiredElseHelp]
    };
    let solvers = Problem::ALL.iter().map(|&problem| {
        clap::SubCommand::with_name(problem.slug())
            .alias(problem.number())
            .about("Solves a test case read from stdin")
    });
    clap::App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .settings(&settings)
        .subcommands(solvers)
        .subcommand(clap::SubCommand::with_name("list").about("Lists solved problems"))
}

fn run(command: Command) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::List => {
            for &problem in &Problem::ALL {
                writeln!(out, "{}\t{}\t{}", problem.number(), problem.slug(), problem.url())?;
            }
        }
        Command::Solve(problem) => {
            let input = read_words::read_input()?;
            let answer = problem.solve(&input)?;
            write!(out, "{}", answer)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = build_app().get_matches();
    let config = config::Config::from_matches(&matches);
    let command = match config.command {
        Some(command) => command,
        None => {
            eprintln!("{}", matches.usage());
            process::exit(2);
        }
    };

    if let Err(err) = run(command) {
        match err {
            // The judge expects this diagnostic on stdout.
            Error::ZeroDivisor => println!("{}", err),
            _ => error!("{}", err),
        }
        process::exit(err.exit_code());
    }
}

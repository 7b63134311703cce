//! Defines data structures of command line arguments.

use crate::problem::Problem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Read a test case from stdin and print the answer.
    Solve(Problem),
    /// Print the catalogue of solved problems.
    List,
}

#[derive(Debug)]
pub struct Config {
    pub command: Option<Command>,
}

impl Config {
    pub fn from_matches(gm: &clap::ArgMatches) -> Self {
        let command = match gm.subcommand_name() {
            Some("list") => Some(Command::List),
            Some(name) => match Problem::from_name(name) {
                Some(problem) => {
                    trace!("solve {:?}", problem);
                    Some(Command::Solve(problem))
                }
                None => {
                    error!("unknown subcommand {}", name);
                    None
                }
            },
            None => {
                warn!("Nothing to solve");
                None
            }
        };

        Config { command }
    }
}

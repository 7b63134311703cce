//! Whitespace-separated token scanning over the whole input.

use crate::error::Error;
use std::io::{stdin, Read};
use std::str::{FromStr, SplitWhitespace};

/// Reads all of standard input.
pub fn read_input() -> Result<String, Error> {
    let mut input = String::new();
    stdin().read_to_string(&mut input)?;
    trace!("read {} bytes", input.len());
    Ok(input)
}

pub struct Words<'a> {
    words: SplitWhitespace<'a>,
}

impl<'a> Words<'a> {
    pub fn new(input: &'a str) -> Self {
        Words {
            words: input.split_whitespace(),
        }
    }

    /// Parses the next token. `expected` names the value for diagnostics.
    pub fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, Error> {
        let word = self.words.next().ok_or(Error::UnexpectedEof { expected })?;
        word.parse().map_err(|_| Error::Parse {
            token: word.to_owned(),
        })
    }
}

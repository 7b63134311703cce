//! Catalogue of solved problems.

use crate::anger;
use crate::bundle;
use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Problem {
    /// 30802: t-shirt and pen bundles.
    Bundle,
    /// 32642: running anger total.
    Anger,
}

impl Problem {
    pub const ALL: [Problem; 2] = [Problem::Bundle, Problem::Anger];

    /// Problem number on the judge.
    pub fn number(self) -> &'static str {
        match self {
            Problem::Bundle => "30802",
            Problem::Anger => "32642",
        }
    }

    /// Subcommand name.
    pub fn slug(self) -> &'static str {
        match self {
            Problem::Bundle => "bundle",
            Problem::Anger => "anger",
        }
    }

    pub fn url(self) -> String {
        format!("https://boj.kr/{}", self.number())
    }

    /// Looks a problem up by slug or by problem number.
    pub fn from_name(name: &str) -> Option<Problem> {
        Problem::ALL
            .iter()
            .cloned()
            .find(|p| p.slug() == name || p.number() == name)
    }

    pub fn solve(self, input: &str) -> Result<String, Error> {
        trace!("solving {} ({})", self.number(), self.slug());
        match self {
            Problem::Bundle => bundle::solve(input),
            Problem::Anger => anger::solve(input),
        }
    }
}

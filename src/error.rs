//! Errors raised while reading input or solving a problem.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read standard input: {0}")]
    Io(#[from] io::Error),

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("malformed token {token:?}")]
    Parse { token: String },

    /// Bundle sizes must be positive. The message is what the judge sees.
    #[error("T와 P는 0이 아니어야 합니다.")]
    ZeroDivisor,
}

impl Error {
    /// Process exit status to report this error with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ZeroDivisor => 1,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_divisor_exits_with_one() {
        assert_eq!(1, Error::ZeroDivisor.exit_code());
        assert_eq!("T와 P는 0이 아니어야 합니다.", Error::ZeroDivisor.to_string());
    }

    #[test]
    fn malformed_input_exits_with_two() {
        let err = Error::Parse {
            token: "x".to_owned(),
        };
        assert_eq!(2, err.exit_code());
        assert_eq!(2, Error::UnexpectedEof { expected: "n" }.exit_code());
    }
}

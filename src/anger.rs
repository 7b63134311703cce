//! BOJ 32642: anger rises by one on every 1 and drops by one on anything
//! else; the answer is the total of the anger level over all days.

use crate::error::Error;
use crate::read_words::Words;

pub fn anger_sum<I>(signals: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    let mut anger = 0i64;
    let mut total = 0i64;
    for signal in signals {
        if signal == 1 {
            anger += 1;
        } else {
            anger -= 1;
        }
        total += anger;
    }
    total
}

pub fn solve(input: &str) -> Result<String, Error> {
    let mut words = Words::new(input);
    let n: usize = words.next("n")?;
    debug!("{} signals", n);

    let signals = (0..n)
        .map(|_| words.next("signal"))
        .collect::<Result<Vec<i64>, _>>()?;

    Ok(anger_sum(signals).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        assert_eq!("6", solve("4\n1 1 0 1\n").unwrap());
    }

    #[test]
    fn test_empty() {
        assert_eq!("0", solve("0").unwrap());
        assert_eq!(0, anger_sum(Vec::<i64>::new()));
    }

    #[test]
    fn test_non_one_decrements() {
        assert_eq!(-1 + -2 + -3, anger_sum(vec![0, 2, -1]));
        assert_eq!(1 + 0 + -1 + 0, anger_sum(vec![1, 0, 0, 1]));
    }

    #[test]
    fn test_matches_prefix_counts() {
        let signals = vec![1, 0, 0, 1, 1, 1, 0, 1, 0, 0];
        let expected: i64 = (0..signals.len())
            .map(|i| {
                let ones = signals[..=i].iter().filter(|&&x| x == 1).count() as i64;
                ones - (i as i64 + 1 - ones)
            })
            .sum();
        assert_eq!(expected, anger_sum(signals));
    }

    #[test]
    fn test_exceeds_i32() {
        let n = 100_000i64;
        assert_eq!(n * (n + 1) / 2, anger_sum(std::iter::repeat(1).take(n as usize)));
        assert!(n * (n + 1) / 2 > i64::from(i32::max_value()));
    }

    #[test]
    fn test_ignores_trailing_tokens() {
        assert_eq!("1", solve("1 1 0 0").unwrap());
    }

    #[test]
    fn test_short_input() {
        match solve("3 1 1") {
            Err(Error::UnexpectedEof { expected }) => assert_eq!("signal", expected),
            other => panic!("unexpected {:?}", other),
        }
    }
}

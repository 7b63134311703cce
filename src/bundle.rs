//! BOJ 30802: t-shirts are ordered in bundles of `T` per size,
//! pens in bundles of `P` plus single pens.

use crate::error::Error;
use crate::read_words::Words;
use std::fmt;

/// Number of bundles of `size` needed to hold `count` items.
pub fn ceil_div(count: i64, size: i64) -> i64 {
    (count + size - 1) / size
}

const SIZE_NAMES: [&str; 6] = ["S", "M", "L", "XL", "XXL", "XXXL"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub pens: i64,
    /// Applicants per size, S through XXXL.
    pub sizes: [i64; 6],
    pub shirt_bundle: i64,
    pub pen_bundle: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Answer {
    pub shirt_bundles: i64,
    pub pen_bundles: i64,
    pub pen_singles: i64,
}

impl Order {
    /// Reads `N S M L XL XXL XXXL T P`.
    pub fn read(words: &mut Words) -> Result<Self, Error> {
        let pens = words.next("N")?;
        let mut sizes = [0; 6];
        for (size, &name) in sizes.iter_mut().zip(SIZE_NAMES.iter()) {
            *size = words.next(name)?;
        }
        let shirt_bundle = words.next("T")?;
        let pen_bundle = words.next("P")?;

        Ok(Order {
            pens,
            sizes,
            shirt_bundle,
            pen_bundle,
        })
    }

    pub fn solve(&self) -> Result<Answer, Error> {
        if self.shirt_bundle == 0 || self.pen_bundle == 0 {
            warn!(
                "rejecting order with T = {}, P = {}",
                self.shirt_bundle, self.pen_bundle
            );
            return Err(Error::ZeroDivisor);
        }

        let shirt_bundles: i64 = self
            .sizes
            .iter()
            .map(|&count| ceil_div(count, self.shirt_bundle))
            .sum();
        debug!("{} t-shirt bundles for {:?}", shirt_bundles, self.sizes);

        Ok(Answer {
            shirt_bundles,
            pen_bundles: self.pens / self.pen_bundle,
            pen_singles: self.pens % self.pen_bundle,
        })
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\n{} {}",
            self.shirt_bundles, self.pen_bundles, self.pen_singles
        )
    }
}

pub fn solve(input: &str) -> Result<String, Error> {
    let order = Order::read(&mut Words::new(input))?;
    trace!("{:?}", order);
    Ok(order.solve()?.to_string())
}

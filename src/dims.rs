//! Shared code dimensions.
//!
//! This module contains [`Dimensions`], a small validated bundle of the
//! parameters (`N`, `wc`, `wr`) that every component in this crate is
//! parameterized by, together with their derived quantities (`M`, `K`,
//! `block_rows`). Validating once here means [`crate::gallager::build_h`],
//! [`crate::systematic::build_g`], and [`crate::decoder::decode_spa`] never
//! have to repeat the divisibility checks themselves.

use thiserror::Error;

/// Error building a [`Dimensions`] from raw parameters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// `wr` does not evenly divide `n`, so `M = n * wc / wr` is not an
    /// integer.
    #[error("wr ({wr}) does not divide n ({n})")]
    RowWeightDoesNotDivideN {
        /// Codeword length.
        n: usize,
        /// Row weight.
        wr: usize,
    },
    /// `wc` does not evenly divide `M = n * wc / wr`.
    #[error("wc ({wc}) does not divide m ({m})")]
    ColWeightDoesNotDivideM {
        /// Column weight.
        wc: usize,
        /// Number of rows (checks).
        m: usize,
    },
    /// `wc >= wr`, which would give a non-positive or zero code rate.
    #[error("column weight ({wc}) must be strictly less than row weight ({wr})")]
    ColWeightNotLessThanRowWeight {
        /// Column weight.
        wc: usize,
        /// Row weight.
        wr: usize,
    },
}

/// Validated regular-LDPC code dimensions.
///
/// `n` is the codeword length, `wc` the column weight, `wr` the row weight.
/// `m` (number of parity checks), `k` (number of information bits), and
/// `block_rows` (`m / wc`, the height of each Gallager band) are derived.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dimensions {
    n: usize,
    wc: usize,
    wr: usize,
    m: usize,
    k: usize,
    block_rows: usize,
}

impl Dimensions {
    /// Validates and builds a set of code dimensions.
    ///
    /// # Errors
    /// Returns an error if `wr` does not divide `n`, if `wc` does not divide
    /// the resulting `m`, or if `wc >= wr`.
    pub fn new(n: usize, wc: usize, wr: usize) -> Result<Dimensions, Error> {
        if wc >= wr {
            return Err(Error::ColWeightNotLessThanRowWeight { wc, wr });
        }
        if n % wr != 0 {
            return Err(Error::RowWeightDoesNotDivideN { n, wr });
        }
        let m = n * wc / wr;
        // Unreachable once wr | n (m is then exactly (n / wr) * wc), kept as an
        // explicit check since it guards a distinct invariant from the one above.
        if m % wc != 0 {
            return Err(Error::ColWeightDoesNotDivideM { wc, m });
        }
        let block_rows = m / wc;
        let k = n - m;
        Ok(Dimensions {
            n,
            wc,
            wr,
            m,
            k,
            block_rows,
        })
    }

    /// Codeword length.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Column weight.
    pub fn wc(&self) -> usize {
        self.wc
    }

    /// Row weight.
    pub fn wr(&self) -> usize {
        self.wr
    }

    /// Number of parity checks (rows of H).
    pub fn m(&self) -> usize {
        self.m
    }

    /// Number of information bits.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of rows in each of the `wc` Gallager bands.
    pub fn block_rows(&self) -> usize {
        self.block_rows
    }

    /// Code rate `K / N`.
    pub fn rate(&self) -> f64 {
        self.k as f64 / self.n as f64
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid() {
        let d = Dimensions::new(12, 3, 4).unwrap();
        assert_eq!(d.m(), 9);
        assert_eq!(d.k(), 3);
        assert_eq!(d.block_rows(), 3);
        assert!((d.rate() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn wr_does_not_divide_n() {
        assert_eq!(
            Dimensions::new(13, 3, 4).unwrap_err(),
            Error::RowWeightDoesNotDivideN { n: 13, wr: 4 }
        );
    }

    #[test]
    fn wc_not_less_than_wr() {
        assert_eq!(
            Dimensions::new(12, 4, 3).unwrap_err(),
            Error::ColWeightNotLessThanRowWeight { wc: 4, wr: 3 }
        );
    }
}

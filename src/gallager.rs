//! # Gallager regular LDPC construction
//!
//! This implements the original random regular LDPC ensemble from *Gallager,
//! R., 1962. Low-density parity-check codes. IRE Transactions on information
//! theory, 8(1), pp.21-28.*: a parity-check matrix built as `wc` horizontal
//! bands, the first deterministic and the rest permuted copies of it.

use crate::dims::{self, Dimensions};
use crate::gf2::GF2;
use crate::rand::{Rng, RngCore};
use ndarray::Array2;
use num_traits::{One, Zero};
use thiserror::Error;

/// Error building a Gallager parity-check matrix.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The requested dimensions are not realizable as a regular code.
    #[error(transparent)]
    InvalidDimensions(#[from] dims::Error),
}

/// Builds a regular `(wc, wr)` Gallager parity-check matrix of length `n`.
///
/// The matrix has `m = n * wc / wr` rows, split into `wc` bands of
/// `block_rows = m / wc` rows each. Band 0 is deterministic: row `r` has
/// ones in columns `[r * wr, (r + 1) * wr)`. Each subsequent band is band 0
/// with its columns permuted by an independently drawn pseudorandom
/// permutation, so every column keeps exactly one entry per band and
/// therefore exactly `wc` entries overall.
///
/// # Errors
/// Returns [`Error::InvalidDimensions`] if `wr` does not divide `n`, or if
/// `wc` does not divide the resulting `m`, or if `wc >= wr`.
///
/// # Examples
/// ```
/// # use ldpc_core::gallager::build_h;
/// # use ldpc_core::rand::{Rng, SeedableRng};
/// let mut rng = Rng::seed_from_u64(42);
/// let h = build_h(12, 3, 4, &mut rng).unwrap();
/// assert_eq!(h.dim(), (9, 12));
/// ```
pub fn build_h(n: usize, wc: usize, wr: usize, rng: &mut Rng) -> Result<Array2<GF2>, Error> {
    let dimensions = Dimensions::new(n, wc, wr)?;
    Ok(build_h_validated(&dimensions, rng))
}

fn build_h_validated(dimensions: &Dimensions, rng: &mut Rng) -> Array2<GF2> {
    let n = dimensions.n();
    let wr = dimensions.wr();
    let block_rows = dimensions.block_rows();
    let m = dimensions.m();

    let mut h = Array2::from_elem((m, n), GF2::zero());

    // Band 0: row r has ones in columns [r * wr, (r + 1) * wr).
    for r in 0..block_rows {
        for col in (r * wr)..((r + 1) * wr) {
            h[[r, col]] = GF2::one();
        }
    }

    // Bands 1..wc: band b is band 0 with columns permuted by pi_b, i.e.
    // band_b[r][k] = band_0[r][pi_b(k)].
    for b in 1..dimensions.wc() {
        let pi = random_permutation(n, rng);
        for r in 0..block_rows {
            let band_b_row = b * block_rows + r;
            for k in 0..n {
                if h[[r, pi[k]]] == GF2::one() {
                    h[[band_b_row, k]] = GF2::one();
                }
            }
        }
    }

    h
}

/// Draws a pseudorandom permutation of `0..n` using an in-place Fisher-Yates
/// shuffle of the identity permutation.
///
/// Each swap target is drawn as `rng.next_u32() % remaining`, the classic
/// `rand() % n` family rather than an exactly-uniform shuffle; the modulus
/// introduces a small sampling bias near the boundary, which is harmless
/// here since what must hold is that the result is a genuine permutation,
/// and an in-place swap always preserves that regardless of the bias.
fn random_permutation(n: usize, rng: &mut Rng) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        let j = (rng.next_u32() as usize) % (i + 1);
        perm.swap(i, j);
    }
    perm
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rand::SeedableRng;

    fn col_weight(h: &Array2<GF2>, col: usize) -> usize {
        (0..h.nrows())
            .filter(|&r| h[[r, col]] == GF2::one())
            .count()
    }

    fn row_weight(h: &Array2<GF2>, row: usize) -> usize {
        (0..h.ncols())
            .filter(|&c| h[[row, c]] == GF2::one())
            .count()
    }

    #[test]
    fn shape_and_weights() {
        let mut rng = Rng::seed_from_u64(1);
        let h = build_h(12, 3, 4, &mut rng).unwrap();
        assert_eq!(h.dim(), (9, 12));
        for col in 0..12 {
            assert_eq!(col_weight(&h, col), 3);
        }
        for row in 0..9 {
            assert_eq!(row_weight(&h, row), 4);
        }
    }

    #[test]
    fn band_zero_is_deterministic() {
        let mut rng = Rng::seed_from_u64(2);
        let h = build_h(12, 3, 4, &mut rng).unwrap();
        let expected_rows: [[u8; 12]; 3] = [
            [1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1],
        ];
        for (r, expected) in expected_rows.iter().enumerate() {
            for (c, &bit) in expected.iter().enumerate() {
                let actual = if h[[r, c]] == GF2::one() { 1 } else { 0 };
                assert_eq!(actual, bit, "row {r} col {c}");
            }
        }
    }

    #[test]
    fn larger_typical_case() {
        let mut rng = Rng::seed_from_u64(3);
        let h = build_h(1024, 3, 6, &mut rng).unwrap();
        assert_eq!(h.dim(), (512, 1024));
        for col in 0..1024 {
            assert_eq!(col_weight(&h, col), 3);
        }
        for row in 0..512 {
            assert_eq!(row_weight(&h, row), 6);
        }
    }

    #[test]
    fn invalid_dimensions() {
        let mut rng = Rng::seed_from_u64(4);
        assert!(build_h(10, 3, 4, &mut rng).is_err());
        assert!(build_h(12, 4, 3, &mut rng).is_err());
    }
}

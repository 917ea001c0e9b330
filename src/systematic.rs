//! Systematic generator construction.
//!
//! This performs a two-phase column-wise Gauss-Jordan reduction over GF(2):
//! an extended workspace `X = [Hᵀ | I_N]` is reduced in two passes, the
//! second of which permutes columns of `H` in lock-step with columns of the
//! workspace, so that the bottom `K` rows of the workspace's right half
//! become a generator matrix `G` consistent with the (possibly permuted) `H`
//! the caller gets back. Pivoting first within the workspace and only later
//! coupling column swaps to `H` keeps the identity block that ends up in
//! `G`'s last `K` columns intact wherever the rank of `H` allows it.

use crate::dims::{self, Dimensions};
use crate::gf2::GF2;
use crate::primitives;
use ndarray::{s, Array2};
use num_traits::{One, Zero};
use thiserror::Error;

/// Error building a systematic generator matrix.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The requested dimensions are not realizable as a regular code.
    #[error(transparent)]
    InvalidDimensions(#[from] dims::Error),
    /// Phase B could not find a pivot for some row even after exhausting
    /// the column-swap search: `H` does not have full row rank.
    #[error("parity check matrix does not have full row rank (rank deficient at row {row})")]
    RankDeficient {
        /// The row for which no pivot could be found.
        row: usize,
    },
}

/// Builds the systematic generator matrix for `h`, possibly permuting the
/// columns of `h` in place.
///
/// `h` has shape `M x N` with `M = N * wc / wr`. On success, the columns of
/// `h` may have been permuted (to keep `G` consistent with it), and the
/// returned `G` has shape `K x N` (`K = N - M`) with `G * h^T = 0` in GF(2)
/// and an identity block in its last `K` columns.
///
/// # Errors
/// Returns [`Error::InvalidDimensions`] if the dimensions are not
/// realizable, or [`Error::RankDeficient`] if `h` does not have full row
/// rank (see the module's rank-deficiency note in `DESIGN.md`).
///
/// # Examples
/// ```
/// # use ldpc_core::gallager::build_h;
/// # use ldpc_core::systematic::build_g;
/// # use ldpc_core::rand::{Rng, SeedableRng};
/// let mut rng = Rng::seed_from_u64(7);
/// let mut h = build_h(12, 3, 4, &mut rng).unwrap();
/// let g = build_g(&mut h, 12, 3, 4).unwrap();
/// assert_eq!(g.dim(), (3, 12));
/// ```
pub fn build_g(
    h: &mut Array2<GF2>,
    n: usize,
    wc: usize,
    wr: usize,
) -> Result<Array2<GF2>, Error> {
    let dimensions = Dimensions::new(n, wc, wr)?;
    build_g_validated(h, &dimensions)
}

fn build_g_validated(h: &mut Array2<GF2>, dimensions: &Dimensions) -> Result<Array2<GF2>, Error> {
    let n = dimensions.n();
    let m = dimensions.m();

    let mut x = primitives::extended_workspace(h);

    // Phase A: pivot columns 0..M of X ("free" phase). Column swaps here stay
    // within X; they permute bookkeeping rows of H^T, not H's own columns.
    for j in 0..m {
        if x[[j, j]] != GF2::one() {
            if let Some(r) = (j + 1..n).find(|&r| x[[r, j]] == GF2::one()) {
                primitives::swap_rows(&mut x, j, r);
            } else if let Some(c) = ((j + 1)..(m + n)).rev().find(|&c| x[[j, c]] == GF2::one()) {
                primitives::swap_cols(&mut x, j, c);
            }
        }
        eliminate_column(&mut x, j, j);
    }

    // Phase B: pivot columns 2M..M+N-1 of X ("coupled" phase), pivot row
    // r = column - M. Column swaps here are within the right half of X and
    // are mirrored onto H's columns.
    for r in m..n {
        let g = m + r;
        if x[[r, g]] != GF2::one() {
            if let Some(found_row) = (r + 1..n).find(|&rr| x[[rr, g]] == GF2::one()) {
                primitives::swap_rows(&mut x, r, found_row);
            } else if let Some(c) = ((g + 1)..(m + n)).rev().find(|&c| x[[r, c]] == GF2::one()) {
                primitives::swap_cols(&mut x, g, c);
                primitives::swap_cols(h, g - m, c - m);
            } else {
                return Err(Error::RankDeficient { row: r });
            }
        }
        eliminate_column(&mut x, r, g);
    }

    let g = x.slice(s![m..n, m..(m + n)]).to_owned();
    debug_assert!(annihilates(&g, h), "G * H^T != 0 after reduction");

    Ok(g)
}

/// XORs row `pivot_row` into every other row that has a 1 in
/// `pivot_col`, over the full width of `x`.
fn eliminate_column(x: &mut Array2<GF2>, pivot_row: usize, pivot_col: usize) {
    if x[[pivot_row, pivot_col]] != GF2::one() {
        // No pivot available for this column; nothing to eliminate.
        return;
    }
    let nrows = x.nrows();
    for i in 0..nrows {
        if i != pivot_row && x[[i, pivot_col]] == GF2::one() {
            primitives::row_xor(x, i, pivot_row);
        }
    }
}

fn annihilates(g: &Array2<GF2>, h: &Array2<GF2>) -> bool {
    let k = g.nrows();
    let m = h.nrows();
    for i in 0..k {
        for row in 0..m {
            let mut acc = GF2::zero();
            for col in 0..h.ncols() {
                acc += g[[i, col]] * h[[row, col]];
            }
            if acc != GF2::zero() {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gallager::build_h;
    use crate::rand::{Rng, SeedableRng};

    #[test]
    fn g_annihilates_h_and_has_identity_tail() {
        let mut rng = Rng::seed_from_u64(11);
        let mut h = build_h(12, 3, 4, &mut rng).unwrap();
        let g = build_g(&mut h, 12, 3, 4).unwrap();
        assert_eq!(g.dim(), (3, 12));
        assert!(annihilates(&g, &h));
        for i in 0..3 {
            for i2 in 0..3 {
                let expect = if i == i2 { GF2::one() } else { GF2::zero() };
                assert_eq!(g[[i, 9 + i2]], expect);
            }
        }
    }

    #[test]
    fn typical_case() {
        let mut rng = Rng::seed_from_u64(12);
        let mut h = build_h(1024, 3, 6, &mut rng).unwrap();
        let g = build_g(&mut h, 1024, 3, 6).unwrap();
        assert_eq!(g.dim(), (512, 1024));
        assert!(annihilates(&g, &h));
    }
}

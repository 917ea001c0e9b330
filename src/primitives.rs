//! Dense GF(2) matrix primitives.
//!
//! This module provides the row/column operations that the [Gallager
//! constructor](crate::gallager) and the [systematic
//! reducer](crate::systematic) are built out of: row XOR, row swap, column
//! swap, and the extended-workspace construction `[Hᵀ | I_N]` used by the
//! reducer. Matrices are represented as contiguous row-major
//! [`Array2<GF2>`] for cache-friendly sweeps over rows and columns.

use crate::gf2::GF2;
use ndarray::Array2;
use num_traits::{One, Zero};

/// XORs row `src` into row `dst` (`dst ^= src`), over the full row width.
pub fn row_xor(matrix: &mut Array2<GF2>, dst: usize, src: usize) {
    if dst == src {
        return;
    }
    let ncols = matrix.ncols();
    for col in 0..ncols {
        let v = matrix[[src, col]];
        matrix[[dst, col]] += v;
    }
}

/// Swaps rows `a` and `b` of `matrix`.
pub fn swap_rows(matrix: &mut Array2<GF2>, a: usize, b: usize) {
    if a == b {
        return;
    }
    let ncols = matrix.ncols();
    for col in 0..ncols {
        matrix.swap([a, col], [b, col]);
    }
}

/// Swaps columns `a` and `b` of `matrix`.
pub fn swap_cols(matrix: &mut Array2<GF2>, a: usize, b: usize) {
    if a == b {
        return;
    }
    let nrows = matrix.nrows();
    for row in 0..nrows {
        matrix.swap([row, a], [row, b]);
    }
}

/// Builds the extended workspace `X = [Hᵀ | I_N]` used by the systematic
/// reducer.
///
/// `h` has shape `M x N`; the returned workspace has shape `N x (M + N)`.
pub fn extended_workspace(h: &Array2<GF2>) -> Array2<GF2> {
    let (m, n) = h.dim();
    let mut x = Array2::from_elem((n, m + n), GF2::zero());
    for i in 0..m {
        for j in 0..n {
            x[[j, i]] = h[[i, j]];
        }
    }
    for j in 0..n {
        x[[j, m + j]] = GF2::one();
    }
    x
}

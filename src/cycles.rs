//! Length-4 cycle counting in the Tanner graph.
//!
//! A length-4 cycle in the Tanner graph of a parity-check matrix is a closed
//! walk `v_a - c_p - v_b - c_q - v_a` with `v_a != v_b` and `c_p != c_q`.
//! Short cycles are well known to hurt belief-propagation performance, so
//! this count is used as a structural quality score when comparing
//! candidate parity-check matrices.

use crate::gf2::GF2;
use ndarray::Array2;
use num_traits::One;

/// Counts the length-4 cycles in the Tanner graph of `h`.
///
/// If two distinct variable nodes share `s >= 2` check nodes, they
/// contribute `C(s, 2) = s * (s - 1) / 2` length-4 cycles; this function
/// sums that contribution over all unordered pairs of variable nodes. The
/// column weight `wc` is only used to size the per-variable neighbor lists;
/// the result does not otherwise depend on `h` being regular.
///
/// The count grows as `O(n^2 * wc^2)` and can exceed the 32-bit range for
/// large codes, so accumulation is done in 64 bits.
///
/// # Examples
/// ```
/// # use ldpc_core::cycles::count_4cycles;
/// # use ldpc_core::gf2::GF2;
/// # use ndarray::Array2;
/// # use num_traits::{One, Zero};
/// let i = GF2::one();
/// let o = GF2::zero();
/// let h = Array2::from_shape_vec((2, 3), vec![i, i, o, i, i, o]).unwrap();
/// assert_eq!(count_4cycles(&h, 3, 2), 1);
/// ```
pub fn count_4cycles(h: &Array2<GF2>, n: usize, wc: usize) -> u64 {
    let m = h.nrows();
    debug_assert_eq!(h.ncols(), n);

    let mut neighbors: Vec<Vec<usize>> = vec![Vec::with_capacity(wc); n];
    for col in 0..n {
        for row in 0..m {
            if h[[row, col]] == GF2::one() {
                neighbors[col].push(row);
            }
        }
    }

    let mut total: u64 = 0;
    for a in 0..n {
        for b in (a + 1)..n {
            let shared = neighbors[a]
                .iter()
                .filter(|&check| neighbors[b].contains(check))
                .count() as u64;
            if shared >= 2 {
                total += shared * (shared - 1) / 2;
            }
        }
    }
    total
}

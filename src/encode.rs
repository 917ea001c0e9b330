//! GF(2) systematic encoder.
//!
//! [`crate::systematic::build_g`] lays out `G` with its identity block in
//! the *last* `K` columns, so encoding is a direct GF(2) matrix-vector
//! product of the information bits against `G`, with no need to split `G`
//! into submatrices first.

use crate::gf2::GF2;
use ndarray::Array2;
use num_traits::{One, Zero};

/// Encodes `info` (length `K`) into a codeword (length `N`) using the
/// generator matrix `g` (shape `K x N`).
///
/// `code[i] = XOR_{j in 0..K} (info[j] AND g[j][i])`. When `g` has an
/// identity block in its last `K` columns (as produced by
/// [`crate::systematic::build_g`]), `code[N - K + i] == info[i]`, so a
/// noiseless decode recovers `info` unchanged.
///
/// # Panics
/// Panics if `info.len() != g.nrows()`.
pub fn encode(info: &[GF2], g: &Array2<GF2>) -> Vec<GF2> {
    let k = g.nrows();
    let n = g.ncols();
    assert_eq!(info.len(), k);

    (0..n)
        .map(|i| {
            let mut acc = GF2::zero();
            for j in 0..k {
                acc += info[j] * g[[j, i]];
            }
            acc
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gallager::build_h;
    use crate::rand::{Rng, SeedableRng};
    use crate::systematic::build_g;

    #[test]
    fn encode_then_info_positions_match() {
        let mut rng = Rng::seed_from_u64(5);
        let mut h = build_h(12, 3, 4, &mut rng).unwrap();
        let g = build_g(&mut h, 12, 3, 4).unwrap();

        let o = GF2::zero();
        let i = GF2::one();
        let info = [i, o, i];
        let code = encode(&info, &g);
        assert_eq!(code.len(), 12);
        assert_eq!(&code[9..12], &info);
    }
}

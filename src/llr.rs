//! Channel log-likelihood ratios from symbol-conditional probabilities.
//!
//! This turns a table of symbol-conditional channel probabilities into the
//! per-bit LLRs a soft-decision decoder expects, for an arbitrary
//! power-of-two symbol alphabet with an LSB-first bit mapping.

/// Computes per-bit LLRs from a table of symbol-conditional probabilities.
///
/// `pyx[k][i]` is `P(y_i | x = k)` for the `i`-th transmitted symbol, `k` in
/// `0..e`. `e` must be a power of two. Bit `b` of symbol `k` is `(k >> b) &
/// 1` (LSB-first). For symbol `i` and bit `b`:
///
/// `LLR = log( sum_{k: bit b of k == 1} pyx[k][i] / sum_{k: bit b of k == 0} pyx[k][i] )`
///
/// The returned vector has length `n * log2(e)`, with bit `b` of symbol `i`
/// at index `i * log2(e) + b`.
///
/// # Panics
/// Panics if `e` is not a power of two, if `pyx.len() != e`, or if any row of
/// `pyx` does not have length `n`.
///
/// # Examples
/// ```
/// # use ldpc_core::llr::compute_llr_from_pyx;
/// let pyx = vec![vec![0.2], vec![0.8]];
/// let llr = compute_llr_from_pyx(&pyx, 2, 1);
/// assert!((llr[0] - (0.8_f64 / 0.2).ln()).abs() < 1e-9);
/// ```
pub fn compute_llr_from_pyx(pyx: &[Vec<f64>], e: usize, n: usize) -> Vec<f64> {
    assert!(e.is_power_of_two(), "E must be a power of two, got {e}");
    assert_eq!(pyx.len(), e);
    for row in pyx {
        assert_eq!(row.len(), n);
    }
    let bits = e.trailing_zeros() as usize;

    let mut llr = vec![0.0; n * bits];
    for i in 0..n {
        for b in 0..bits {
            let mut ones = 0.0;
            let mut zeros = 0.0;
            for k in 0..e {
                if (k >> b) & 1 == 1 {
                    ones += pyx[k][i];
                } else {
                    zeros += pyx[k][i];
                }
            }
            llr[i * bits + b] = (ones / zeros).ln();
        }
    }
    llr
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bpsk_single_symbol() {
        let pyx = vec![vec![0.2], vec![0.8]];
        let llr = compute_llr_from_pyx(&pyx, 2, 1);
        assert_eq!(llr.len(), 1);
        assert!((llr[0] - 4.0_f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn uniform_pyx_gives_zero_llr() {
        let pyx = vec![vec![0.25, 0.25], vec![0.25, 0.25], vec![0.25, 0.25], vec![0.25, 0.25]];
        let llr = compute_llr_from_pyx(&pyx, 4, 2);
        assert_eq!(llr.len(), 4);
        for x in llr {
            assert!(x.abs() < 1e-12);
        }
    }

    #[test]
    fn four_ary_bit_layout() {
        // Symbol k in 0..4, bit 0 = k&1, bit 1 = (k>>1)&1.
        // Concentrate all mass on k=2 (bits: b0=0, b1=1) for the single symbol.
        let pyx = vec![vec![0.0], vec![0.0], vec![1.0], vec![0.0]];
        let llr = compute_llr_from_pyx(&pyx, 4, 1);
        assert_eq!(llr.len(), 2);
        assert!(llr[0] < 0.0); // bit 0 strongly 0
        assert!(llr[1] > 0.0); // bit 1 strongly 1
    }

    #[test]
    #[should_panic]
    fn e_not_power_of_two_panics() {
        let pyx = vec![vec![1.0]; 3];
        compute_llr_from_pyx(&pyx, 3, 1);
    }
}

//! LDPC Sum-Product (belief propagation) decoder.
//!
//! This implements the flooding-schedule sum-product algorithm described in
//! Chapter 2 of *Sarah J. Johnson - Iterative Error Correction*: check nodes
//! and variable nodes exchange soft messages along the edges of the Tanner
//! graph until the tentative hard decision satisfies the parity checks or a
//! maximum number of iterations is reached. Check-node updates are computed
//! via the `phi` function rather than `tanh`, which is numerically steadier
//! near the extremes of the log-likelihood range. Message state is kept as a
//! dense `M x N` array rather than per-edge lists, trading some memory for
//! simpler indexing.

use crate::dims::Dimensions;
use crate::gf2::GF2;
use ndarray::Array2;
use num_traits::One;

/// The result of an SPA decode.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeReport {
    /// Hard-decision codeword.
    pub codeword: Vec<u8>,
    /// Extracted information bits (`codeword[N - K..N]`).
    pub info: Vec<u8>,
    /// Number of iterations actually run.
    pub iterations: usize,
    /// Whether the syndrome was zero when decoding stopped.
    pub converged: bool,
}

/// Decodes a noisy codeword using the Sum-Product Algorithm.
///
/// `llrs[j]` is the channel log-likelihood ratio for bit `j`, with the sign
/// convention "positive LLR means bit = 1". `h` is the `M x N` parity-check
/// matrix (dimensions must match `dimensions`). Runs at most `max_iter`
/// flooding-schedule iterations, stopping early if the syndrome becomes
/// zero.
///
/// # Panics
/// Panics if `llrs.len() != dimensions.n()` or if `h`'s shape does not match
/// `dimensions`.
pub fn decode_spa(
    llrs: &[f64],
    h: &Array2<GF2>,
    dimensions: &Dimensions,
    max_iter: usize,
) -> DecodeReport {
    let n = dimensions.n();
    let m = dimensions.m();
    let k = dimensions.k();
    assert_eq!(llrs.len(), n);
    assert_eq!(h.dim(), (m, n));

    let vars_of: Vec<Vec<usize>> = (0..m)
        .map(|i| (0..n).filter(|&j| h[[i, j]] == GF2::one()).collect())
        .collect();
    let check_of: Vec<Vec<usize>> = (0..n)
        .map(|j| (0..m).filter(|&i| h[[i, j]] == GF2::one()).collect())
        .collect();

    // v[i][j]: check-to-variable message along edge (i, j).
    let mut v = Array2::<f64>::zeros((m, n));

    let (mut codeword, mut syndrome_zero) = tentative_decision(llrs, &v, &vars_of, n);
    let mut iterations = 0;
    if !syndrome_zero {
        for iter in 1..=max_iter {
            iterations = iter;
            check_update(&mut v, llrs, &vars_of, &check_of);
            let (decision, zero) = tentative_decision(llrs, &v, &vars_of, n);
            codeword = decision;
            syndrome_zero = zero;
            if syndrome_zero {
                break;
            }
        }
    }

    let info = codeword[(n - k)..n].to_vec();
    DecodeReport {
        codeword,
        info,
        iterations,
        converged: syndrome_zero,
    }
}

/// One check-node update: for every check `i` and incident variable `k`,
/// combine the messages from all *other* variables incident to `i` into
/// `v[i][k]`. The value combined for each other variable `j` is `llr[j] +
/// (sum of check-to-variable messages into j from checks other than i)`,
/// i.e. the variable-to-check message along edge `(i, j)`, computed on the
/// fly against the previous iteration's `v` instead of being materialized as
/// its own array.
fn check_update(
    v: &mut Array2<f64>,
    llrs: &[f64],
    vars_of: &[Vec<usize>],
    check_of: &[Vec<usize>],
) {
    let old_v = v.clone();
    let m = vars_of.len();
    let mut incoming: Vec<(usize, f64)> = Vec::new();
    for i in 0..m {
        incoming.clear();
        for &var_j in &vars_of[i] {
            let mut u_ij = llrs[var_j];
            for &chk in &check_of[var_j] {
                if chk != i {
                    u_ij += old_v[[chk, var_j]];
                }
            }
            incoming.push((var_j, u_ij));
        }

        let mut sign: u32 = 0;
        let mut sum = 0.0;
        let mut phis = Vec::with_capacity(incoming.len());
        for &(_, x) in &incoming {
            let phi_x = phi(x.abs());
            phis.push(phi_x);
            sum += phi_x;
            if x < 0.0 {
                sign ^= 1;
            }
        }
        for (slot, &(var_j, x)) in incoming.iter().enumerate() {
            let excl_sign = if x < 0.0 { sign ^ 1 } else { sign };
            let excl_phi = phi(sum - phis[slot]);
            v[[i, var_j]] = if excl_sign == 0 { excl_phi } else { -excl_phi };
        }
    }
}

/// `phi(t) = log((e^t + 1) / (e^t - 1))`, clamped to `[1e-7, 30]` before
/// evaluation to avoid overflow/underflow of `exp`. `phi` is its own
/// involution over positive reals.
fn phi(t: f64) -> f64 {
    let t = t.clamp(1e-7, 30.0);
    let e = t.exp();
    ((e + 1.0) / (e - 1.0)).ln()
}

fn tentative_decision(
    llrs: &[f64],
    v: &Array2<f64>,
    vars_of: &[Vec<usize>],
    n: usize,
) -> (Vec<u8>, bool) {
    let m = vars_of.len();
    let mut totals = llrs.to_vec();
    for i in 0..m {
        for &j in &vars_of[i] {
            totals[j] += v[[i, j]];
        }
    }
    let codeword: Vec<u8> = totals
        .iter()
        .map(|&total| if total >= 0.0 { 1 } else { 0 })
        .collect();
    debug_assert_eq!(codeword.len(), n);

    let syndrome_zero =
        (0..m).all(|i| vars_of[i].iter().fold(0u8, |acc, &j| acc ^ codeword[j]) == 0);

    (codeword, syndrome_zero)
}

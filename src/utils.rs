//! utils — log2-space combinatorics shared by every cost model.
//!
//! Purpose
//! -------
//! Collect the small numerical kernels that closed-form attack formulas are
//! built from: binomial coefficients, factorials, Hamming-ball volumes and
//! weight enumerators, all expressed as base-2 logarithms so that products of
//! counts become sums and nothing overflows for code lengths in the
//! thousands.
//!
//! Key behaviors
//! -------------
//! - Binomials and factorials go through `statrs` log-gamma based routines
//!   and are rescaled from natural to base-2 logarithms.
//! - Sums of counts are accumulated with [`log2_sum_exp2`], which factors
//!   out the largest exponent before summing.
//! - Integer predicates (`is_prime_power`, `is_power_of_two`) back the
//!   construction-time checks on field sizes.
//!
//! Conventions
//! -----------
//! - An impossible count (e.g. `C(n, k)` with `k > n`) is `-inf` in
//!   log2-space, never a panic.
//! - Arguments are plain `usize` values; callers validate problem parameters
//!   before reaching these helpers.
use statrs::function::{
    factorial::{ln_binomial, ln_factorial},
    gamma::ln_gamma,
};
use std::f64::consts::LN_2;

/// `log2 C(n, k)`; `-inf` when `k > n`.
pub fn log2_binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    ln_binomial(n as u64, k as u64) / LN_2
}

/// `log2 n!`.
pub fn log2_factorial(n: usize) -> f64 {
    ln_factorial(n as u64) / LN_2
}

/// `log2 Γ(x)` for real `x > 0`.
pub fn log2_gamma(x: f64) -> f64 {
    ln_gamma(x) / LN_2
}

/// Compute `log2(Σ 2^xᵢ)` without leaving log2-space.
///
/// Terms equal to `-inf` contribute nothing; an empty slice or a slice of
/// only `-inf` terms yields `-inf`. A `+inf` term yields `+inf`.
pub fn log2_sum_exp2(terms: &[f64]) -> f64 {
    let max = terms.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return max;
    }
    let scaled: f64 = terms.iter().map(|&t| (t - max).exp2()).sum();
    max + scaled.log2()
}

/// `log2` of the number of vectors in `F_q^n` with Hamming weight at most `w`.
pub fn hamming_ball_log2(n: usize, q: usize, w: usize) -> f64 {
    let log_q1 = ((q - 1) as f64).log2();
    let terms: Vec<f64> =
        (0..=w.min(n)).map(|i| log2_binomial(n, i) + i as f64 * log_q1).collect();
    log2_sum_exp2(&terms)
}

/// Gilbert–Varshamov distance of a random `[n, k]` code over `F_q`.
///
/// Smallest `d` whose Hamming ball of radius `d` outgrows `q^(n-k)`; returns
/// `n + 1` if no radius up to `n` does.
pub fn gv_distance(n: usize, k: usize, q: usize) -> usize {
    let redundancy = (n - k) as f64 * (q as f64).log2();
    let mut d = 1;
    while d <= n && hamming_ball_log2(n, q, d) < redundancy {
        d += 1;
    }
    d
}

/// `log2` of the expected number of weight-`d` codewords (up to scalar
/// multiples) in a random `[n, k]` code over `F_q`.
pub fn log2_weight_d_codewords(n: usize, k: usize, q: usize, d: usize) -> f64 {
    let log_q = (q as f64).log2();
    let log_q1 = ((q - 1) as f64).log2();
    log2_binomial(n, d) + (d as f64 - 1.0) * log_q1 - (n - k) as f64 * log_q
}

/// `min(a, b)`, or `max(a, b)` when the full parameter domain is requested.
pub fn min_max(a: usize, b: usize, full_domain: bool) -> usize {
    if full_domain { a.max(b) } else { a.min(b) }
}

/// `true` if `q = p^e` for a prime `p` and `e >= 1`.
pub fn is_prime_power(q: usize) -> bool {
    if q < 2 {
        return false;
    }
    let mut p = 2;
    while p * p <= q {
        if q % p == 0 {
            let mut rest = q;
            while rest % p == 0 {
                rest /= p;
            }
            return rest == 1;
        }
        p += 1;
    }
    true
}

/// `true` if `q = 2^e` with `e >= 1`.
pub fn is_power_of_two(q: usize) -> bool {
    q >= 2 && q.is_power_of_two()
}

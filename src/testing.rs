//! Tools to test modulators
#![allow(dead_code)]
use core::f64::consts::PI;
use num_traits::Float;
use rustfft::{FftPlanner, num_complex::Complex};

/// Maximum acceptable error between a computed and actual value given fixed and relative
/// tolerances.
///
/// # Args
/// * `a` - First input.
/// * `b` - Second input. The relative tolerance is computed with respect to the maximum of the
///   absolute values of the first and second inputs.
/// * `rtol` - Relative tolerance.
/// * `atol` - Fixed tolerance.
///
/// # Returns
/// Maximum acceptable error.
pub fn max_error<T: Float>(a: T, b: T, rtol: T, atol: T) -> T {
    rtol * a.abs().max(b.abs()) + atol
}

/// Return whether two numbers are within absolute plus relative tolerance
pub fn isclose<T: Float>(a: T, b: T, rtol: T, atol: T) -> bool {
    (a - b).abs() <= max_error(a, b, rtol, atol)
}

/// Periodic Hann window
pub fn hann(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (PI * i as f64 / n as f64).sin().powi(2))
        .collect()
}

/// One-sided power spectral density
///
/// Removes the mean, applies a Hann window, and normalizes by the window
/// energy such that white noise of variance `s` has a flat density of `2 s`
/// (per unit sample rate).
/// Bin `k` is at frequency `k/n`, `0 <= k <= n/2`.
pub fn psd(y: &[f64]) -> Vec<f64> {
    let n = y.len();
    let mean = y.iter().sum::<f64>() / n as f64;
    let w = hann(n);
    let mut buf: Vec<_> = y
        .iter()
        .zip(&w)
        .map(|(y, w)| Complex::new((y - mean) * w, 0.0))
        .collect();
    FftPlanner::new().plan_fft_forward(n).process(&mut buf);
    let energy = w.iter().map(|w| w * w).sum::<f64>();
    buf[..=n / 2]
        .iter()
        .map(|b| 2.0 * b.norm_sqr() / energy)
        .collect()
}

/// Mean of the density over the frequency band `[f0, f1)`
pub fn band(p: &[f64], f0: f64, f1: f64) -> f64 {
    let n = 2 * (p.len() - 1);
    let k0 = (f0 * n as f64).ceil() as usize;
    let k1 = ((f1 * n as f64).ceil() as usize).min(p.len());
    p[k0..k1].iter().sum::<f64>() / (k1 - k0) as f64
}

/// Mean of a function of frequency over the same bins as [`band()`]
pub fn band_fn(n: usize, f0: f64, f1: f64, g: impl Fn(f64) -> f64) -> f64 {
    let k0 = (f0 * n as f64).ceil() as usize;
    let k1 = ((f1 * n as f64).ceil() as usize).min(n / 2 + 1);
    (k0..k1).map(|k| g(k as f64 / n as f64)).sum::<f64>() / (k1 - k0) as f64
}

/// Convert a power ratio to decibels
pub fn db(p: f64) -> f64 {
    10.0 * p.log10()
}

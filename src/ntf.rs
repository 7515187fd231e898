//! Theoretical noise transfer function of a MASH-(1)^K
use num_complex::Complex;
use num_traits::{Float, FloatConst};

/// Noise transfer function `(1 - z⁻¹)^order` on the unit circle
///
/// # Args
/// * `order`: Number of cascaded first order stages
/// * `f`: Frequency in units of the sample rate (cycles per sample)
pub fn ntf<T: Float + FloatConst>(order: u32, f: T) -> Complex<T> {
    let (s, c) = ((T::PI() + T::PI()) * f).sin_cos();
    // 1 - e^{-j w}
    Complex::new(T::one() - c, s).powu(order)
}

/// Noise power gain `|(1 - z⁻¹)^order|²` on the unit circle
///
/// Equal to `(2 sin(pi f))^(2 order)`.
pub fn ntf_power<T: Float + FloatConst>(order: u32, f: T) -> T {
    ntf(order, f).norm_sqr()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::isclose;
    use core::f64::consts::PI;

    #[test]
    fn closed_form() {
        for order in 0..4 {
            for f in [0.0, 0.01, 0.1, 0.25, 0.3, 0.5] {
                let p = ntf_power::<f64>(order, f);
                let q = (2.0 * (PI * f).sin()).powi(2 * order as i32);
                assert!(isclose(p, q, 1e-12, 1e-15), "{order} {f}: {p} != {q}");
            }
        }
    }

    #[test]
    fn extremes() {
        assert_eq!(ntf::<f32>(3, 0.0), Complex::new(0.0, 0.0));
        assert!(isclose(ntf_power::<f32>(3, 0.5), 64.0, 1e-5, 0.0));
        let h = ntf::<f64>(1, 0.25);
        assert!(isclose(h.re, 1.0, 0.0, 1e-15));
        assert!(isclose(h.im, 1.0, 0.0, 1e-15));
        assert_eq!(ntf::<f64>(0, 0.1), Complex::new(1.0, 0.0));
    }
}

use num_complex::Complex64;

pub type C64 = Complex64;

/// Component-wise tolerance used when comparing amplitudes that went through
/// repeated rotations.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Scalar helpers on top of num-complex. Addition, multiplication, `conj` and
/// `norm` (the magnitude) come from `Complex64` itself.
pub trait ComplexExt {
    /// Squared magnitude, i.e. the probability mass of an amplitude.
    fn norm2(&self) -> f64;

    /// True iff both the real and the imaginary parts are within `eps`.
    fn approx_eq(&self, other: &Self, eps: f64) -> bool;
}

impl ComplexExt for C64 {
    #[inline]
    fn norm2(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    #[inline]
    fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        (self.re - other.re).abs() <= eps && (self.im - other.im).abs() <= eps
    }
}

fn round4(v: f64) -> f64 {
    let r = (v * 1e4).round() / 1e4;
    // avoid printing "-0"
    if r == 0.0 { 0.0 } else { r }
}

/// Short deterministic rendering of an amplitude: `1`, `-i`, `0.5+0.7071i`.
pub fn fmt_c64(c: C64) -> String {
    let re = round4(c.re);
    let im = round4(c.im);
    let im_part = |im: f64| -> String {
        if im == 1.0 {
            "i".to_string()
        } else if im == -1.0 {
            "-i".to_string()
        } else {
            format!("{}i", im)
        }
    };

    match (re == 0.0, im == 0.0) {
        (_, true) => format!("{}", re),
        (true, false) => im_part(im),
        (false, false) => {
            let sign = if im > 0.0 { "+" } else { "" };
            format!("{}{}{}", re, sign, im_part(im))
        }
    }
}

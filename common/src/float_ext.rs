use num_complex::Complex64;

pub trait FloatExt {
    fn approximately_eq(self, other: Self) -> bool;
}

impl FloatExt for f32 {
    fn approximately_eq(self, other: Self) -> bool {
        (self - other).abs() < crate::EPSILON as f32
    }
}

impl FloatExt for f64 {
    fn approximately_eq(self, other: Self) -> bool {
        (self - other).abs() < crate::EPSILON
    }
}

/// Componentwise: both the real and the imaginary parts must agree.
impl FloatExt for Complex64 {
    fn approximately_eq(self, other: Self) -> bool {
        self.re.approximately_eq(other.re) && self.im.approximately_eq(other.im)
    }
}

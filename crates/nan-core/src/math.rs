//! Scalar math that answers NaN instead of failing
//!
//! Each function forwards to the native implementation for the value's
//! precision. Out-of-domain arguments (`log(-1.0)`, `asin(2.0)`,
//! `sqrt(-4.0)`, ...) produce NaN; nothing here panics or returns an error.
//!
//! ```rust
//! use nan_core::math;
//!
//! assert!(math::sqrt(-4.0f64).is_nan());
//! assert!(math::log(-1.0f32).is_nan());
//! assert_eq!(math::sqrt(9.0), 3.0);
//! ```

use crate::numeric::NanFloat;

macro_rules! forward_unary {
    ($($(#[$doc:meta])* $name:ident => $method:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<T: NanFloat>(x: T) -> T {
                x.$method()
            }
        )*
    };
}

forward_unary! {
    /// Sine
    sin => sin;
    /// Cosine
    cos => cos;
    /// Tangent; NaN for infinite arguments
    tan => tan;
    /// Arcsine; NaN outside `[-1, 1]`
    asin => asin;
    /// Arccosine; NaN outside `[-1, 1]`
    acos => acos;
    /// Inverse hyperbolic cosine; NaN below 1
    acosh => acosh;
    /// Inverse hyperbolic tangent; NaN outside `[-1, 1]`
    atanh => atanh;
    /// Natural logarithm; NaN for negative arguments
    log => ln;
    /// Base-2 logarithm
    log2 => log2;
    /// Base-10 logarithm
    log10 => log10;
    /// `ln(1 + x)`; NaN below -1
    log1p => ln_1p;
}

/// Square root; NaN for negative arguments
///
/// `-0.0` is not negative and maps to itself.
#[inline]
pub fn sqrt<T: NanFloat>(x: T) -> T {
    if x < T::zero() {
        T::nan()
    } else {
        x.sqrt()
    }
}

/// `x` raised to `y`; NaN for a negative base with a non-integer exponent
#[inline]
pub fn pow<T: NanFloat>(x: T, y: T) -> T {
    x.powf(y)
}

/// Compatibility entry points kept for callers of the container overloads
pub mod compat {
    use crate::numeric::NanFloat;
    use log::warn;

    /// Apply a scalar function to every element of a slice
    #[deprecated(note = "map the scalar function per element: `values.iter().map(|&x| f(x))`")]
    pub fn elementwise<T, F>(values: &[T], f: F) -> Vec<T>
    where
        T: NanFloat,
        F: Fn(T) -> T,
    {
        warn!(
            target: "nan_core::math",
            "elementwise application over a {} container is deprecated; apply the scalar function to each element instead",
            T::NAME
        );
        values.iter().map(|&x| f(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_nan() {
        assert!(sqrt(-1.0f64).is_nan());
        assert!(log(-1.0f64).is_nan());
        assert!(log2(-0.5f32).is_nan());
        assert!(log10(-10.0f64).is_nan());
        assert!(log1p(-2.0f64).is_nan());
        assert!(asin(2.0f64).is_nan());
        assert!(acos(-1.5f64).is_nan());
        assert!(acosh(0.5f64).is_nan());
        assert!(atanh(1.5f64).is_nan());
        assert!(sin(f64::INFINITY).is_nan());
        assert!(cos(f64::NEG_INFINITY).is_nan());
        assert!(tan(f64::INFINITY).is_nan());
        assert!(pow(-8.0f64, 1.0 / 3.0).is_nan());
    }

    #[test]
    fn test_in_domain_values() {
        assert_eq!(sqrt(16.0), 4.0);
        assert!(sqrt(-0.0f64).is_sign_negative());
        assert_eq!(log(1.0), 0.0);
        assert!((log2(8.0f64) - 3.0).abs() < 1e-12);
        assert!((log10(1000.0f32) - 3.0).abs() < 1e-6);
        assert_eq!(pow(-2.0, 3.0), -8.0);
        assert_eq!(acosh(1.0), 0.0);
        assert_eq!(log(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(sin(f64::NAN).is_nan());
        assert!(sqrt(f32::NAN).is_nan());
        assert!(pow(f64::NAN, 2.0).is_nan());
    }

    #[test]
    #[allow(deprecated)]
    fn test_elementwise_shim() {
        let out = compat::elementwise(&[4.0, -4.0, f64::NAN], sqrt);
        assert_eq!(out[0], 2.0);
        assert!(out[1].is_nan());
        assert!(out[2].is_nan());
    }
}

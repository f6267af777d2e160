/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Numeric utilities shared by starters, kernels, and the dispatcher:
//! eccentricity classification, finiteness checks, angle reduction, the
//! joint sine/cosine helper, and true-anomaly conversion.

use core::f64::consts::PI;
use num_traits::Float;

use crate::constants::ECC_EPS;
use crate::crate_util::check;
use crate::error::ErrorCode;
use crate::ids::EccentricityRegime;

/// Classify an eccentricity into a regime. The returned [`ErrorCode`] is
/// [`ErrorCode::NoError`] iff the regime is not [`EccentricityRegime::Invalid`].
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
pub fn classify_eccentricity<T: Float>(e: T) -> (EccentricityRegime, ErrorCode) {
    let eps = T::from(ECC_EPS).unwrap();
    if !e.is_finite() || e < 0.0 {
        return (EccentricityRegime::Invalid, ErrorCode::BadEccentricity);
    }
    if e <= eps {
        return (EccentricityRegime::Circular, ErrorCode::NoError);
    }
    if e < 1.0 - eps {
        return (EccentricityRegime::Elliptic, ErrorCode::NoError);
    }
    if (e - 1.0).abs() <= eps {
        return (EccentricityRegime::Parabolic, ErrorCode::NoError);
    }
    (EccentricityRegime::Hyperbolic, ErrorCode::NoError)
}

/// `Ok(())` iff `x` is neither NaN nor infinite.
pub fn finite_check<T: Float>(x: T) -> Result<(), ErrorCode> {
    check!(ErrorCode::BadValue, [!x.is_finite()]);
    Ok(())
}

/// Reduce `x` into the canonical interval around `[-pi, pi)`. Idempotent:
/// `reduce_angle(reduce_angle(x)) == reduce_angle(x)`.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
pub fn reduce_angle<T: Float>(x: T) -> T {
    let pi = T::from(PI).unwrap();
    let two_pi = pi + pi;
    let mut r = x - (x / two_pi).floor() * two_pi;
    if r > pi {
        r = r - two_pi;
    } else if r < -pi {
        r = r + two_pi;
    }
    r
}

/// Joint sine/cosine via the half-angle tangent substitution: a single
/// `tan` call produces both `sin(x)` and `cos(x)`. If `c >= 0`, both
/// results are scaled by `c`, yielding `(c*sin(x), c*cos(x))` in one call
/// — used pervasively in the Newton-series cores to amortize the cost of
/// the transcendental call.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
pub fn sincos<T: Float>(x: T, c: T) -> (T, T) {
    let t = (x / 2.0).tan();
    let d = 1.0 / (1.0 + t * t);
    let (s, co) = (2.0 * t * d, (1.0 - t * t) * d);
    if c >= 0.0 {
        (c * s, c * co)
    } else {
        (s, co)
    }
}

/// Convert an eccentric (`e < 1`) or hyperbolic (`e > 1`) anomaly to the
/// true anomaly. The circular and parabolic cases are caller-handled, per
/// spec.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
pub fn true_anomaly<T: Float>(e: T, x: T) -> T {
    if e < 1.0 {
        2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (x / 2.0).tan()).atan()
    } else {
        2.0 * (((e + 1.0) / (e - 1.0)).sqrt() * (x / 2.0).tanh()).atan()
    }
}

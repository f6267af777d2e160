/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Residual functions for the three forms of Kepler's Equation. Pure and
//! stateless: no validation, no error reporting. Callers are responsible
//! for argument sanity, exactly as the source specifies.

use num_traits::Float;

/// Elliptic residual: `x - e*sin(x) - m`.
#[inline]
pub fn kes_keq_ell<T: Float>(e: T, m: T, x: T) -> T {
    x - e * x.sin() - m
}

/// Hyperbolic residual: `e*sinh(x) - x - m`.
#[inline]
pub fn kes_keq_hyp<T: Float>(e: T, m: T, x: T) -> T {
    e * x.sinh() - x - m
}

/// Parabolic residual (Barker's Equation): `s + s^3/3 - m`, with
/// `s = tan(nu/2)`. Undefined at `nu = pi`; callers must avoid that
/// input.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
#[inline]
pub fn kes_keq_par<T: Float>(m: T, nu: T) -> T {
    let s = (nu / 2.0).tan();
    s + s * s * s / 3.0 - m
}

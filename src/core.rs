/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Shared Newton-series Taylor scaffolding (spec §4.4). Every iterative
//! elliptic kernel above plain Newton-Raphson reuses the same derivative
//! expansion at the current iterate; only the order at which the series
//! is truncated differs.

use num_traits::Float;

use crate::constants::DERIV_EPS;
use crate::util::sincos;

/// Taylor coefficients of the elliptic residual at `x0`, used by every
/// order-2..5 step. `f1` carries the `DERIV_EPS` addend that keeps the
/// derivative away from zero at the degenerate point `(e=1, x0=0)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TaylorCoeffs<T> {
    pub f0: T,
    pub f1: T,
    pub f2: T,
    pub f3: T,
    pub f4: T,
}

#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
pub(crate) fn taylor_coeffs<T: Float>(e: T, m: T, x0: T) -> TaylorCoeffs<T> {
    let deriv_eps = T::from(DERIV_EPS).unwrap();
    // (e*sin(x0), e*cos(x0)) from one half-angle-tangent call.
    let (esin, ecos) = sincos(x0, e);
    TaylorCoeffs {
        f0: m - x0 + esin,
        f1: 1.0 - ecos + deriv_eps,
        f2: esin / 2.0,
        f3: ecos / 6.0,
        f4: -esin / 24.0,
    }
}

/// Order-2 (Newton-Raphson) increment: `f0/f1`.
#[inline]
pub(crate) fn step_order2<T: Float>(tc: &TaylorCoeffs<T>) -> T {
    tc.f0 / tc.f1
}

/// Order-3 (Halley) increment, seeded from the order-2 increment.
#[inline]
pub(crate) fn step_order3<T: Float>(tc: &TaylorCoeffs<T>) -> T {
    let d = step_order2(tc);
    tc.f0 / (tc.f1 + tc.f2 * d)
}

/// Order-4 (Danby-Burkardt) increment, seeded from the order-3 increment.
#[inline]
pub(crate) fn step_order4<T: Float>(tc: &TaylorCoeffs<T>) -> T {
    let d = step_order3(tc);
    tc.f0 / (tc.f1 + d * (tc.f2 + d * tc.f3))
}

/// Order-5 (Danby-Burkardt) increment, seeded from the order-4 increment.
/// Uses the nested fused-multiply-add form the spec prefers for this
/// order: `f1 + d*(f2 + d*(f3 + d*f4))`.
#[inline]
pub(crate) fn step_order5<T: Float>(tc: &TaylorCoeffs<T>) -> T {
    let d = step_order4(tc);
    let inner = tc.f4.mul_add(d, tc.f3);
    let mid = inner.mul_add(d, tc.f2);
    let denom = mid.mul_add(d, tc.f1);
    tc.f0 / denom
}

/// Advance `x0` by one order-2 (Newton-Raphson) step.
pub(crate) fn advance_order2<T: Float>(e: T, m: T, x0: T) -> T {
    x0 + step_order2(&taylor_coeffs(e, m, x0))
}

/// Advance `x0` by one order-3 (Halley) step.
pub(crate) fn advance_order3<T: Float>(e: T, m: T, x0: T) -> T {
    x0 + step_order3(&taylor_coeffs(e, m, x0))
}

/// Advance `x0` by one order-4 (Danby-Burkardt) step.
pub(crate) fn advance_order4<T: Float>(e: T, m: T, x0: T) -> T {
    x0 + step_order4(&taylor_coeffs(e, m, x0))
}

/// Advance `x0` by one order-5 (Danby-Burkardt) step.
pub(crate) fn advance_order5<T: Float>(e: T, m: T, x0: T) -> T {
    x0 + step_order5(&taylor_coeffs(e, m, x0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::kes_keq_ell;

    #[test]
    fn higher_orders_converge_faster_near_root() {
        let e = 0.6_f64;
        let x_true = 1.3_f64;
        let m = x_true - e * x_true.sin();
        let x0 = x_true + 0.05;

        let x2 = advance_order2(e, m, x0);
        let x5 = advance_order5(e, m, x0);

        assert!(kes_keq_ell(e, m, x5).abs() <= kes_keq_ell(e, m, x2).abs());
    }

    #[test]
    fn step_is_stable_at_degenerate_point() {
        // e=1, x0=0 is the point DERIV_EPS exists to protect.
        let tc = taylor_coeffs(1.0_f64, 0.0, 0.0);
        assert!(tc.f1.is_finite() && tc.f1 != 0.0);
        assert!(step_order5(&tc).is_finite());
    }
}

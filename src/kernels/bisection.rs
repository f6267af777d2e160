/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Bisection iteration, spec §4.5.1. Derivative-free; brackets the root
//! with `[M, M+e]` rather than refining the dispatcher's starter (a
//! starter is still accepted for interface uniformity with the other
//! kernels).
//!
//! `f_ell(e, M, M) = -e*sin(M) <= 0` and `f_ell(e, M, M+e) =
//! e*(1-sin(M+e)) >= 0` for `M` in `[0, pi]`, so the bracket always holds
//! once the dispatcher has reduced `M` into that range.

use num_traits::Float;

use crate::crate_util::declare;
use crate::equations::kes_keq_ell;
use crate::kernels::{count_eval, err_df, record_iteration, should_continue};
use crate::record::KeplerRecord;

pub(crate) fn solve<T: Float>(e: T, m: T, _x0: T, record: &mut KeplerRecord<T>) -> T {
    declare!(mut [xl = m, xr = m + e]);
    let two = T::one() + T::one();

    if xr - xl < record.tolx {
        let x = (xl + xr) / two;
        record_iteration(record, 0, x, err_df(e, m, x), T::zero());
        return x;
    }
    let fl_endpoint = kes_keq_ell(e, m, xl);
    if fl_endpoint.abs() < record.tolf {
        record_iteration(record, 0, xl, err_df(e, m, xl), T::zero());
        return xl;
    }
    let fr_endpoint = kes_keq_ell(e, m, xr);
    if fr_endpoint.abs() < record.tolf {
        record_iteration(record, 0, xr, err_df(e, m, xr), T::zero());
        return xr;
    }

    let mut fl = fl_endpoint;
    let mut x = (xl + xr) / two;
    let mut edx = T::infinity();
    let mut edf = err_df(e, m, x);
    let mut count = 0u32;
    while should_continue(edx, edf, record.tolx, record.tolf, count, record.maxiter) {
        let fx = kes_keq_ell(e, m, x);
        if fl * fx < T::zero() {
            xr = x;
        } else {
            xl = x;
            fl = fx;
        }
        let next = (xl + xr) / two;
        edx = (next - x).abs();
        x = next;
        edf = err_df(e, m, x);
        count += 1;
        count_eval(record);
    }
    record_iteration(record, count, x, edf, edx);
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_on_a_moderate_eccentricity() {
        let e = 0.6_f64;
        let m = 0.8_f64;
        let mut record = KeplerRecord::default();
        let x = solve(e, m, 0.0, &mut record);
        assert!(kes_keq_ell(e, m, x).abs() < 1e-10);
    }

    #[test]
    fn bracket_holds_near_high_eccentricity() {
        let e = 0.99_f64;
        let m = 0.01_f64;
        let mut record = KeplerRecord::default();
        let x = solve(e, m, 0.0, &mut record);
        assert!(kes_keq_ell(e, m, x).abs() < 1e-8);
    }
}

/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Secant iteration, spec §4.5.2: the same endpoint setup as
//! [`crate::kernels::bisection`], refined by the classical two-point
//! secant update instead of interval halving. Super-linear, order
//! approximately the golden ratio.

use num_traits::Float;

use crate::equations::kes_keq_ell;
use crate::kernels::{count_eval, err_df, record_iteration, should_continue};
use crate::record::KeplerRecord;

pub(crate) fn solve<T: Float>(e: T, m: T, _x0: T, record: &mut KeplerRecord<T>) -> T {
    let mut xl = m;
    let mut xr = m + e;
    let mut fl = kes_keq_ell(e, m, xl);
    let mut fr = kes_keq_ell(e, m, xr);

    let mut x = xr;
    let mut edx = T::infinity();
    let mut edf = err_df(e, m, x);
    let mut count = 0u32;
    while should_continue(edx, edf, record.tolx, record.tolf, count, record.maxiter) {
        let denom = fr - fl;
        let next = if denom == T::zero() {
            x
        } else {
            (fr * xl - fl * xr) / denom
        };
        let fx = kes_keq_ell(e, m, next);
        edx = (next - x).abs();
        x = next;
        xl = xr;
        fl = fr;
        xr = x;
        fr = fx;
        edf = err_df(e, m, x);
        count += 1;
        count_eval(record);
    }
    record_iteration(record, count, x, edf, edx);
    x
}

/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Wegstein-accelerated secant iteration, spec §4.5.3: damps the
//! `x = M + e*sin(x)` fixed-point map with a secant-style acceleration
//! term.

use num_traits::Float;

use crate::kernels::{count_eval, err_df, record_iteration, should_continue};
use crate::record::KeplerRecord;

#[inline]
fn g<T: Float>(e: T, m: T, x: T) -> T {
    m + e * x.sin()
}

pub(crate) fn solve<T: Float>(e: T, m: T, x0: T, record: &mut KeplerRecord<T>) -> T {
    let mut x0 = x0;
    let mut y0 = g(e, m, x0);
    let mut x1 = y0;
    let mut y1 = g(e, m, x1);

    let mut x = x1;
    let mut edx = T::infinity();
    let mut edf = err_df(e, m, x);
    let mut count = 0u32;
    while should_continue(edx, edf, record.tolx, record.tolf, count, record.maxiter) {
        let ratio_denom = (x0 - y0) / (x1 - y1) - T::one();
        let x2 = if ratio_denom == T::zero() {
            x1
        } else {
            x1 + (x1 - x0) / ratio_denom
        };
        let y2 = g(e, m, x2);
        edx = (x2 - x1).abs();
        x0 = x1;
        y0 = y1;
        x1 = x2;
        y1 = y2;
        x = x2;
        edf = err_df(e, m, x);
        count += 1;
        count_eval(record);
    }
    record_iteration(record, count, x, edf, edx);
    x
}

/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Markley iteration, spec §4.5.8: a non-iterative rational-cubic seed
//! (Markley 1995), operating directly on `M` in `[0, pi]` (the
//! dispatcher has already reduced it there), followed by exactly one
//! order-5 Taylor-series polish.

use core::f64::consts::PI;
use num_traits::Float;

use crate::core::{step_order5, taylor_coeffs};
use crate::kernels::{count_eval, err_df, record_iteration};
use crate::record::KeplerRecord;

#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn seed<T: Float>(e: T, m: T) -> T {
    let pi = T::from(PI).unwrap();
    let pi2 = pi * pi;
    let k = pi2 - 6.0;

    let alpha = 3.0 * pi2 / k + (1.6 * pi / k) * (pi - m) / (1.0 + e);
    let d = 3.0 * (1.0 - e) + alpha * e;
    let q = 2.0 * alpha * d * (1.0 - e) - m * m;
    let r = 3.0 * alpha * d * (d - 1.0 + e) * m + m.powi(3);
    let w = (r.abs() + (q.powi(3) + r * r).sqrt()).cbrt();
    let w = w * w;

    if w > T::zero() {
        (2.0 * r * w / (w * w + q * w + q * q) + m) / d
    } else {
        T::zero()
    }
}

pub(crate) fn solve<T: Float>(e: T, m: T, _x0: T, record: &mut KeplerRecord<T>) -> T {
    let x0 = seed(e, m);
    let tc = taylor_coeffs(e, m, x0);
    let dx = step_order5(&tc);
    let x = x0 + dx;

    count_eval(record);
    record_iteration(record, 1, x, err_df(e, m, x), dx.abs());
    x
}

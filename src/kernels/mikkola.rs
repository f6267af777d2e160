/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Mikkola iteration, spec §4.5.7: a non-iterative two-step method. A
//! cubic closed form (Mikkola 1987) seeds the estimate directly from
//! `(e, M)` — the dispatcher's own starter is not consulted — followed by
//! exactly one order-5 Taylor-series polish.

use num_traits::Float;

use crate::core::{step_order5, taylor_coeffs};
use crate::kernels::{count_eval, err_df, record_iteration};
use crate::record::KeplerRecord;

#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn seed<T: Float>(e: T, m: T) -> T {
    let a = (1.0 - e) / (0.5 + 4.0 * e);
    let b = m / (2.0 * (0.5 + 4.0 * e));
    let c = ((a.powi(3) + b * b).sqrt() + b).cbrt();
    let mut s = if c > T::zero() { c - a / c } else { T::zero() };
    s = s - 0.078 * s.powi(5) / (1.0 + e);
    m + e * s * (3.0 - 4.0 * s * s)
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

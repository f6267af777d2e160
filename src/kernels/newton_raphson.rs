/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Order-2 (Newton-Raphson) iteration, spec §4.5.5.

use num_traits::Float;

use crate::core::{step_order2, taylor_coeffs};
use crate::kernels::{count_eval, err_df, record_iteration, should_continue};
use crate::record::KeplerRecord;

/// Refine `x0` by Newton-Raphson until the shared AND-termination rule
/// fires, writing diagnostics into `record`.
pub(crate) fn solve<T: Float>(e: T, m: T, x0: T, record: &mut KeplerRecord<T>) -> T {
    let mut x = x0;
    let mut edx = T::infinity();
    let mut edf = err_df(e, m, x);
    let mut count = 0u32;
    while should_continue(edx, edf, record.tolx, record.tolf, count, record.maxiter) {
        let tc = taylor_coeffs(e, m, x);
        let dx = step_order2(&tc);
        x = x + dx;
        edx = dx.abs();
        edf = err_df(e, m, x);
        count += 1;
        count_eval(record);
    }
    record_iteration(record, count, x, edf, edx);
    x
}

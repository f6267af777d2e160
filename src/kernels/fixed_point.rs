/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Plain fixed-point iteration, spec §4.5.4: `x_{n+1} = M + e*sin(x_n)`.
//! Unlike every other kernel here, the loop tests only `errDF` against
//! `tolf`; the spec omits the `errDX` test because the two residuals
//! phase-lag by one step, so [`crate::kernels::should_continue`] isn't
//! used.

use num_traits::Float;

use crate::kernels::{count_eval, err_df, record_iteration};
use crate::record::KeplerRecord;

pub(crate) fn solve<T: Float>(e: T, m: T, x0: T, record: &mut KeplerRecord<T>) -> T {
    let mut x = x0;
    let mut edf = err_df(e, m, x);
    let mut edx = T::infinity();
    let mut count = 0u32;
    while edf > record.tolf && count < record.maxiter {
        let next = m + e * x.sin();
        edx = (next - x).abs();
        x = next;
        edf = err_df(e, m, x);
        count += 1;
        count_eval(record);
    }
    record_iteration(record, count, x, edf, edx);
    x
}

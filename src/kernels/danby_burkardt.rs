/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Order-4 and order-5 (Danby-Burkardt) iteration, spec §4.5.5. Both share
//! the same AND-termination loop as Newton-Raphson and Halley; only the
//! Taylor order of the step differs.

use num_traits::Float;

use crate::core::{step_order4, step_order5, taylor_coeffs};
use crate::kernels::{count_eval, err_df, record_iteration, should_continue};
use crate::record::KeplerRecord;

/// Order-4 Danby-Burkardt iteration.
pub(crate) fn solve4<T: Float>(e: T, m: T, x0: T, record: &mut KeplerRecord<T>) -> T {
    let mut x = x0;
    let mut edx = T::infinity();
    let mut edf = err_df(e, m, x);
    let mut count = 0u32;
    while should_continue(edx, edf, record.tolx, record.tolf, count, record.maxiter) {
        let tc = taylor_coeffs(e, m, x);
        let dx = step_order4(&tc);
        x = x + dx;
        edx = dx.abs();
        edf = err_df(e, m, x);
        count += 1;
        count_eval(record);
    }
    record_iteration(record, count, x, edf, edx);
    x
}

/// Order-5 Danby-Burkardt iteration.
pub(crate) fn solve5<T: Float>(e: T, m: T, x0: T, record: &mut KeplerRecord<T>) -> T {
    let mut x = x0;
    let mut edx = T::infinity();
    let mut edf = err_df(e, m, x);
    let mut count = 0u32;
    while should_continue(edx, edf, record.tolx, record.tolf, count, record.maxiter) {
        let tc = taylor_coeffs(e, m, x);
        let dx = step_order5(&tc);
        x = x + dx;
        edx = dx.abs();
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
    use crate::equations::kes_keq_ell;

    #[test]
    fn order5_converges_in_fewer_or_equal_iterations_than_order4() {
        let e = 0.7_f64;
        let m = 0.5_f64;
        let mut r4 = KeplerRecord::default();
        let mut r5 = KeplerRecord::default();
        let x4 = solve4(e, m, m + e, &mut r4);
        let x5 = solve5(e, m, m + e, &mut r5);
        assert!(kes_keq_ell(e, m, x4).abs() < 1e-12);
        assert!(kes_keq_ell(e, m, x5).abs() < 1e-12);
        assert!(r5.iterations <= r4.iterations);
    }
}

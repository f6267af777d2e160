/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Order-3 (Halley) iteration, spec §4.5.5.

use num_traits::Float;

use crate::core::{step_order3, taylor_coeffs};
use crate::kernels::{count_eval, err_df, record_iteration, should_continue};
use crate::record::KeplerRecord;

pub(crate) fn solve<T: Float>(e: T, m: T, x0: T, record: &mut KeplerRecord<T>) -> T {
    let mut x = x0;
    let mut edx = T::infinity();
    let mut edf = err_df(e, m, x);
    let mut count = 0u32;
    while should_continue(edx, edf, record.tolx, record.tolf, count, record.maxiter) {
        let tc = taylor_coeffs(e, m, x);
        let dx = step_order3(&tc);
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
    fn converges_on_a_moderate_eccentricity() {
        let e = 0.6_f64;
        let m = 0.8_f64;
        let mut record = KeplerRecord::default();
        let x = solve(e, m, m + e, &mut record);
        assert!(kes_keq_ell(e, m, x).abs() < 1e-12);
    }
}

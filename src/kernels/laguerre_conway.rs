/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Laguerre-Conway iteration, spec §4.5.6: a single-step formula with
//! cubic convergence even from poor starters. Uses the raw residual
//! `f0 = x - e*sin(x) - M` (the negation of [`crate::core::TaylorCoeffs`]'s
//! `f0` convention), so the step is computed directly rather than through
//! [`crate::core`].

use num_traits::Float;

use crate::equations::kes_keq_ell;
use crate::kernels::{count_eval, err_df, record_iteration, should_continue};
use crate::record::KeplerRecord;
use crate::util::sincos;

#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn step<T: Float>(e: T, m: T, x: T) -> T {
    let (esin, ecos) = sincos(x, e);
    let f0 = x - esin - m;
    let f1 = 1.0 - ecos;
    let discriminant = (16.0 * f1 * f1 - 20.0 * f0 * esin).abs();
    5.0 * f0 / (f1 + discriminant.sqrt())
}

pub(crate) fn solve<T: Float>(e: T, m: T, x0: T, record: &mut KeplerRecord<T>) -> T {
    let mut x = x0;
    let mut edx = T::infinity();
    let mut edf = err_df(e, m, x);
    let mut count = 0u32;
    while should_continue(edx, edf, record.tolx, record.tolf, count, record.maxiter) {
        let delta = step(e, m, x);
        x = x - delta;
        edx = delta.abs();
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
    fn converges_on_a_high_eccentricity() {
        let e = 0.9_f64;
        let m = 0.01_f64;
        let mut record = KeplerRecord::default();
        let x = solve(e, m, m, &mut record);
        assert!(kes_keq_ell(e, m, x).abs() < 1e-10);
        assert!(record.iterations < 10);
    }
}

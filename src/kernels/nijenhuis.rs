/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Nijenhuis iteration, spec §4.5.9: a region-split, non-iterative
//! composite — like Mikkola and Markley, it runs a single fixed-depth
//! polish rather than a convergence loop. Region D (`M < 0.4` and
//! `e > 0.6`) gets a Mikkola-like cubic seed refined by one Newton step;
//! regions A/B/C get starter `S7` refined by one step built from the
//! polynomial sine approximants `sn`/`sn'` in place of the transcendental
//! `sin`/`cos` (only their first derivative is given, so this step is an
//! ordinary Newton update rather than a true Halley step). Either
//! branch's refined value is then polished by one depth-3 generalized-
//! Newton step (`step_order4`, which is exactly this recurrence up to
//! `f3`), whose increment is applied only when it keeps `x` positive —
//! Nijenhuis's safeguard against leaving the branch the cubic seed is
//! valid on. The dispatcher always seeds this kernel from starter `S7`,
//! though region D recomputes its own seed.

use core::f64::consts::PI;
use num_traits::Float;

use crate::core::{step_order4, taylor_coeffs};
use crate::ids::StarterId;
use crate::kernels::{count_eval, err_df, record_iteration};
use crate::record::KeplerRecord;
use crate::starters::elliptic as elliptic_starters;

const SN_A: f64 = -0.16605;
const SN_B: f64 = 0.00761;
const SN_DA: f64 = -0.49815;
const SN_DB: f64 = 0.03805;

/// `(sn(x), sn'(x))`, folding `x > pi/2` onto `pi - x` per the symmetry
/// the spec documents for both approximants.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn sn_and_dsn<T: Float>(x: T) -> (T, T) {
    let pi = T::from(PI).unwrap();
    let a = T::from(SN_A).unwrap();
    let b = T::from(SN_B).unwrap();
    let da = T::from(SN_DA).unwrap();
    let db = T::from(SN_DB).unwrap();

    let (arg, folded) = if x > pi / 2.0 { (pi - x, true) } else { (x, false) };
    let arg2 = arg * arg;
    let sn = arg * (1.0 + a * arg2 + b * arg2 * arg2);
    let dsn_poly = 1.0 + da * arg2 + db * arg2 * arg2;
    let dsn = if folded { -dsn_poly } else { dsn_poly };
    (sn, dsn)
}

/// Region D's Mikkola-like cubic seed (spec §4.5.7's construction,
/// without its order-5 polish).
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn region_d_seed<T: Float>(e: T, m: T) -> T {
    let a = (1.0 - e) / (0.5 + 4.0 * e);
    let b = m / (2.0 * (0.5 + 4.0 * e));
    let c = ((a.powi(3) + b * b).sqrt() + b).cbrt();
    let mut s = if c > T::zero() { c - a / c } else { T::zero() };
    s = s - 0.078 * s.powi(5) / (1.0 + e);
    m + e * s * (3.0 - 4.0 * s * s)
}

/// Refine a starter by one Newton step built from the polynomial
/// approximants instead of `sin`/`cos`.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn sn_newton_step<T: Float>(e: T, m: T, x: T) -> T {
    let (sn, dsn) = sn_and_dsn(x);
    let eps = T::from(crate::constants::DERIV_EPS).unwrap();
    let f0 = m - x + e * sn;
    let f1 = 1.0 - e * dsn + eps;
    x + f0 / f1
}

fn refined_starter<T: Float>(e: T, m: T) -> T {
    let threshold_m = T::from(0.4).unwrap();
    let threshold_e = T::from(0.6).unwrap();
    if m < threshold_m && e > threshold_e {
        let seed = region_d_seed(e, m);
        let tc = taylor_coeffs(e, m, seed);
        seed + tc.f0 / tc.f1
    } else {
        let s7 = elliptic_starters::dispatch(StarterId::S7, e, m).unwrap_or(m + e);
        sn_newton_step(e, m, s7)
    }
}

pub(crate) fn solve<T: Float>(e: T, m: T, _x0: T, record: &mut KeplerRecord<T>) -> T {
    let seed = refined_starter(e, m);
    let tc = taylor_coeffs(e, m, seed);
    let dx = step_order4(&tc);
    let candidate = seed + dx;
    let x = if candidate > T::zero() { candidate } else { seed };

    count_eval(record);
    record_iteration(record, 1, x, err_df(e, m, x), dx.abs());
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
        assert_eq!(record.iterations, 1);
        assert!(kes_keq_ell(e, m, x).abs() < 1e-6);
    }

    #[test]
    fn converges_in_region_d() {
        let e = 0.8_f64;
        let m = 0.1_f64;
        let mut record = KeplerRecord::default();
        let x = solve(e, m, 0.0, &mut record);
        assert_eq!(record.iterations, 1);
        assert!(kes_keq_ell(e, m, x).abs() < 1e-6);
    }

    #[test]
    fn never_steps_to_a_non_positive_value() {
        let e = 0.95_f64;
        let m = 1e-6_f64;
        let mut record = KeplerRecord::default();
        let x = solve(e, m, 0.05, &mut record);
        assert!(x > 0.0);
    }
}

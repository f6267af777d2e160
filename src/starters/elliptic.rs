/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! The fifteen elliptic starters `S0..S14` (spec §4.3). Each is a
//! closed-form approximation to the eccentric anomaly, cheap enough to
//! call unconditionally and handed to a kernel for refinement.

use core::f64::consts::PI;
use num_traits::Float;

use crate::error::ErrorCode;
use crate::ids::StarterId;

/// `S0`, order `e^0`: the constant `pi`.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn s0<T: Float>(_e: T, _m: T) -> T {
    T::from(PI).unwrap()
}

/// `S1`, order `e^1`: the mean anomaly itself.
fn s1<T: Float>(_e: T, m: T) -> T {
    m
}

/// `S2`, order `e^2`.
fn s2<T: Float>(e: T, m: T) -> T {
    m + e * m.sin()
}

/// `S3`, order `e^3`.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn s3<T: Float>(e: T, m: T) -> T {
    m + e * m.sin() * (1.0 + e * m.cos())
}

/// `S4`, order `e^1`.
fn s4<T: Float>(e: T, m: T) -> T {
    m + e
}

/// `S5`, order `e^3`.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn s5<T: Float>(e: T, m: T) -> T {
    m + e * m.sin() / (1.0 - (m + e).sin() + m.sin())
}

/// `S6`, order `e^1`.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn s6<T: Float>(e: T, m: T) -> T {
    let pi = T::from(PI).unwrap();
    (m + e * pi) / (1.0 + e)
}

/// `S7`, order `e^1`: the minimum of `M/(1-e)`, `S4`, and `S6`.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn s7<T: Float>(e: T, m: T) -> T {
    let a = m / (1.0 - e);
    let b = s4(e, m);
    let c = s6(e, m);
    a.min(b).min(c)
}

/// `S8`, order `e^3`: `S3` with a quartic correction pulling it toward `pi`.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn s8<T: Float>(e: T, m: T) -> T {
    let pi = T::from(PI).unwrap();
    let base = s3(e, m);
    base + (1.0 / (20.0 * pi)) * e.powi(4) * (pi - base)
}

/// `S9`, order `e^4`. Degenerates to `M` at the singular point `(e=1, m=0)`
/// where the denominator vanishes.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn s9<T: Float>(e: T, m: T) -> T {
    let denom = (1.0 - 2.0 * e * m.cos() + e * e).sqrt();
    if denom <= T::zero() {
        return m;
    }
    m + e * m.sin() / denom
}

/// `S10`, order `e^0`: Ng's cubic. Degenerates to `M` at `e=0`, where the
/// cubic's coefficients are themselves singular.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn s10<T: Float>(e: T, m: T) -> T {
    if e <= T::zero() {
        return m;
    }
    let q = 2.0 * (1.0 - e) / e;
    let r = 3.0 * m / e;
    let s = (r + (q.powi(3) + r * r).sqrt()).cbrt();
    s - q / s
}

/// `S11`, order `e^4`: the Lagrange-reversion series for Kepler's Equation
/// truncated after its `e^4` term, giving an `O(e^5)` starter (stronger
/// than the catalog's nominal order, which only requires `O(e^4)`).
/// Degenerates to `M` at `e=1`, where the reversion series is no longer
/// a valid expansion.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn s11<T: Float>(e: T, m: T) -> T {
    if e >= T::one() {
        return m;
    }
    let e2 = e * e;
    let e3 = e2 * e;
    let e4 = e2 * e2;
    m + e * m.sin()
        + (e2 / 2.0) * (2.0 * m).sin()
        + (e3 / 8.0) * (3.0 * (3.0 * m).sin() - m.sin())
        + (e4 / 6.0) * (2.0 * (4.0 * m).sin() - (2.0 * m).sin())
}

/// `S12`, order `e^1`: a rational blend toward `pi` as `M -> 0`, fixed to
/// reproduce the exact value `pi` at `M = pi` for every eccentricity.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn s12<T: Float>(e: T, m: T) -> T {
    let a = 0.5;
    let b = 2.0 * T::from(PI).unwrap();
    let pi = T::from(PI).unwrap();
    let w = pi - m;
    e * (pi - a * w / (b - w)) + (1.0 - e) * m
}

/// `S13`, order `e^6`: the Lagrange-reversion series extended one term
/// past `S11`.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn s13<T: Float>(e: T, m: T) -> T {
    let e5 = e.powi(5);
    s11(e, m) + (e5 / 384.0) * (2.0 * m.sin() - 81.0 * (3.0 * m).sin() + 125.0 * (5.0 * m).sin())
}

/// `S14`, order `e^1`.
#[numeric_literals::replace_float_literals(T::from(literal).unwrap())]
fn s14<T: Float>(e: T, m: T) -> T {
    let pi = T::from(PI).unwrap();
    m + e * ((pi * pi * m).cbrt() - pi * m.sin() / 15.0 - m)
}

/// Evaluate the starter named by `id` at `(e, m)`.
pub(crate) fn dispatch<T: Float>(id: StarterId, e: T, m: T) -> Result<T, ErrorCode> {
    match id {
        StarterId::S0 => Ok(s0(e, m)),
        StarterId::S1 => Ok(s1(e, m)),
        StarterId::S2 => Ok(s2(e, m)),
        StarterId::S3 => Ok(s3(e, m)),
        StarterId::S4 => Ok(s4(e, m)),
        StarterId::S5 => Ok(s5(e, m)),
        StarterId::S6 => Ok(s6(e, m)),
        StarterId::S7 => Ok(s7(e, m)),
        StarterId::S8 => Ok(s8(e, m)),
        StarterId::S9 => Ok(s9(e, m)),
        StarterId::S10 => Ok(s10(e, m)),
        StarterId::S11 => Ok(s11(e, m)),
        StarterId::S12 => Ok(s12(e, m)),
        StarterId::S13 => Ok(s13(e, m)),
        StarterId::S14 => Ok(s14(e, m)),
        StarterId::None | StarterId::Total => Err(ErrorCode::BadStarter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::kes_keq_ell;

    #[test]
    fn every_starter_dispatches() {
        for id in StarterId::ELLIPTIC {
            let x0 = dispatch(id, 0.3_f64, 0.7_f64).unwrap();
            assert!(x0.is_finite(), "{id:?} produced a non-finite value");
        }
    }

    #[test]
    fn invalid_starter_is_rejected() {
        assert_eq!(
            dispatch(StarterId::None, 0.3_f64, 0.7_f64),
            Err(ErrorCode::BadStarter)
        );
        assert_eq!(
            dispatch(StarterId::Total, 0.3_f64, 0.7_f64),
            Err(ErrorCode::BadStarter)
        );
    }

    #[test]
    fn s1_is_mean_anomaly() {
        assert_eq!(s1(0.4_f64, 0.9_f64), 0.9);
    }

    #[test]
    fn s7_is_the_minimum_of_its_three_candidates() {
        let e = 0.8_f64;
        let m = 0.1_f64;
        let v = s7(e, m);
        assert!(v <= m / (1.0 - e) + 1e-12);
        assert!(v <= s4(e, m) + 1e-12);
        assert!(v <= s6(e, m) + 1e-12);
    }

    #[test]
    fn s9_is_stable_at_the_degenerate_point() {
        assert_eq!(s9(1.0_f64, 0.0_f64), 0.0);
    }

    #[test]
    fn s10_is_stable_at_zero_eccentricity() {
        assert_eq!(s10(0.0_f64, 1.2_f64), 1.2);
    }

    #[test]
    fn s11_is_stable_at_unit_eccentricity() {
        assert_eq!(s11(1.0_f64, 1.2_f64), 1.2);
    }

    #[test]
    fn every_starter_is_a_reasonable_seed_near_the_root() {
        // Loose sanity check, not an order-of-accuracy measurement: every
        // starter's residual at a middling (e, M) stays within a small
        // multiple of the mean anomaly's own scale.
        let e = 0.3_f64;
        let m = 0.7_f64;
        for id in StarterId::ELLIPTIC {
            let x0 = dispatch(id, e, m).unwrap();
            assert!(kes_keq_ell(e, m, x0).abs() < 3.5, "{id:?} seeded too far from the root");
        }
    }
}

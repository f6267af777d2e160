/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! The dispatcher: validates inputs, classifies eccentricity, reduces
//! `M`, invokes the starter and kernel, restores symmetry, and packages
//! diagnostics. This is the library's single entry point that actually
//! runs a solve (spec §4.6); everything else in this crate is a pure
//! building block it assembles.

use core::f64::consts::PI;
use num_traits::Float;

use crate::error::ErrorCode;
use crate::ids::{EccentricityRegime, KernelId, StarterId};
use crate::kernels;
use crate::record::KeplerRecord;
use crate::starters::elliptic as elliptic_starters;
use crate::util::{classify_eccentricity, finite_check, reduce_angle};

/// Run the elliptic solver to completion. Equivalent to the library's
/// primary entry point, `solve(e, M, starter_tag, kernel_tag, &record) ->
/// (result, status)`.
pub fn solve<T: Float>(
    e: T,
    m: T,
    starter_tag: StarterId,
    kernel_tag: KernelId,
    record: &mut KeplerRecord<T>,
) -> (T, ErrorCode) {
    if finite_check(e).is_err() || finite_check(m).is_err() {
        return (T::zero(), ErrorCode::BadValue);
    }

    record.clamp_to_defaults();

    let (regime, regime_code) = classify_eccentricity(e);
    match regime {
        EccentricityRegime::Invalid => return (T::zero(), regime_code),
        EccentricityRegime::Circular => {
            record.result = m;
            record.starter = m;
            record.iterations = 0;
            record.err_df = T::zero();
            record.err_dx = T::zero();
            return (m, ErrorCode::NoError);
        }
        EccentricityRegime::Parabolic | EccentricityRegime::Hyperbolic => {
            return (T::zero(), ErrorCode::BadEccentricity);
        }
        EccentricityRegime::Elliptic => {}
    }

    let m_reduced_signed = reduce_angle(m);
    let side = if m_reduced_signed < T::zero() { -1 } else { 1 };
    let m_reduced = m_reduced_signed.abs();

    let effective_starter = if kernel_tag == KernelId::Nijenhuis {
        StarterId::S7
    } else {
        starter_tag
    };

    let mut status = ErrorCode::NoError;
    let x0 = match elliptic_starters::dispatch(effective_starter, e, m_reduced) {
        Ok(value) => value,
        Err(_) => {
            status = ErrorCode::BadStarter;
            m_reduced + e
        }
    };
    record.starter = x0;

    if !kernel_tag.is_valid() {
        return (T::zero(), ErrorCode::BadSolver);
    }

    let mut result = dispatch_kernel(kernel_tag, e, m_reduced, x0, record);

    if side < 0 {
        let two_pi = T::from(2.0 * PI).unwrap();
        result = two_pi - result;
    }
    record.result = result;

    (result, status)
}

fn dispatch_kernel<T: Float>(
    kernel_tag: KernelId,
    e: T,
    m_reduced: T,
    x0: T,
    record: &mut KeplerRecord<T>,
) -> T {
    match kernel_tag {
        KernelId::Bisection => kernels::bisection::solve(e, m_reduced, x0, record),
        KernelId::FixedPoint => kernels::fixed_point::solve(e, m_reduced, x0, record),
        KernelId::NewtonRaphson => kernels::newton_raphson::solve(e, m_reduced, x0, record),
        KernelId::Halley => kernels::halley::solve(e, m_reduced, x0, record),
        KernelId::DanbyBurkardt4 => kernels::danby_burkardt::solve4(e, m_reduced, x0, record),
        KernelId::DanbyBurkardt5 => kernels::danby_burkardt::solve5(e, m_reduced, x0, record),
        KernelId::LaguerreConway => kernels::laguerre_conway::solve(e, m_reduced, x0, record),
        KernelId::Secant => kernels::secant::solve(e, m_reduced, x0, record),
        KernelId::WegsteinSecant => kernels::wegstein::solve(e, m_reduced, x0, record),
        KernelId::Mikkola => kernels::mikkola::solve(e, m_reduced, x0, record),
        KernelId::Markley => kernels::markley::solve(e, m_reduced, x0, record),
        KernelId::Nijenhuis => kernels::nijenhuis::solve(e, m_reduced, x0, record),
        KernelId::None | KernelId::Total => unreachable!("caller validated kernel_tag already"),
    }
}

/// Evaluate a single elliptic starter directly, without running a
/// kernel. The convenience counterpart to [`solve`].
pub fn starter<T: Float>(e: T, m: T, tag: StarterId) -> (T, ErrorCode) {
    if finite_check(e).is_err() || finite_check(m).is_err() {
        return (T::zero(), ErrorCode::BadValue);
    }
    match elliptic_starters::dispatch(tag, e, m) {
        Ok(value) => (value, ErrorCode::NoError),
        Err(code) => (T::zero(), code),
    }
}

/// Human-readable name of a kernel, for diagnostics.
pub fn show_solver(id: KernelId) -> &'static str {
    match id {
        KernelId::None => "none",
        KernelId::Bisection => "bisection",
        KernelId::FixedPoint => "fixed-point",
        KernelId::NewtonRaphson => "newton-raphson",
        KernelId::Halley => "halley",
        KernelId::DanbyBurkardt4 => "danby-burkardt-4",
        KernelId::DanbyBurkardt5 => "danby-burkardt-5",
        KernelId::LaguerreConway => "laguerre-conway",
        KernelId::Secant => "secant",
        KernelId::WegsteinSecant => "wegstein-secant",
        KernelId::Mikkola => "mikkola",
        KernelId::Markley => "markley",
        KernelId::Nijenhuis => "nijenhuis",
        KernelId::Total => "invalid",
    }
}

/// `(major, minor)` version of this crate, read from `Cargo.toml` at
/// compile time.
pub fn version() -> (u32, u32) {
    (
        env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap(),
        env!("CARGO_PKG_VERSION_MINOR").parse().unwrap(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::kes_keq_ell;

    #[test]
    fn scenario_1_circular_shortcut() {
        let mut record = KeplerRecord::default();
        let (x, status) = solve(0.0_f64, 1.234, StarterId::S1, KernelId::NewtonRaphson, &mut record);
        assert_eq!(x, 1.234);
        assert_eq!(status, ErrorCode::NoError);
        assert_eq!(record.iterations, 0);
    }

    #[test]
    fn scenario_2_moderate_eccentricity() {
        let mut record = KeplerRecord::default();
        let (x, status) = solve(0.567_f64, 1.234, StarterId::S1, KernelId::NewtonRaphson, &mut record);
        assert_eq!(status, ErrorCode::NoError);
        assert!((x - 1.716090737_f64).abs() < 1e-8);
        assert!(record.iterations <= 10);
    }

    #[test]
    fn scenario_3_negative_mean_anomaly_symmetry() {
        let mut record_pos = KeplerRecord::default();
        let (x_pos, _) = solve(0.567_f64, 1.234, StarterId::S1, KernelId::NewtonRaphson, &mut record_pos);
        let mut record_neg = KeplerRecord::default();
        let (x_neg, status) = solve(0.567_f64, -1.234, StarterId::S1, KernelId::NewtonRaphson, &mut record_neg);
        assert_eq!(status, ErrorCode::NoError);
        assert!((x_neg + x_pos - 2.0 * core::f64::consts::PI).abs() < 1e-8);
    }

    #[test]
    fn scenario_4_near_parabolic_laguerre_conway() {
        let mut record = KeplerRecord::default();
        let (x, status) = solve(0.9_f64, 0.01, StarterId::S7, KernelId::LaguerreConway, &mut record);
        assert_eq!(status, ErrorCode::NoError);
        assert!(kes_keq_ell(0.9_f64, 0.01, x).abs() < 1e-10);
        assert!(record.iterations < 10);
    }

    #[test]
    fn scenario_5_mikkola_is_non_iterative() {
        let e = 0.5_f64;
        let x_ref = core::f64::consts::FRAC_PI_3;
        let m = x_ref - e * x_ref.sin();
        let mut record = KeplerRecord::default();
        let (x, status) = solve(e, m, StarterId::S1, KernelId::Mikkola, &mut record);
        assert_eq!(status, ErrorCode::NoError);
        assert_eq!(record.iterations, 1);
        assert!((x - x_ref).abs() < 1e-13);
    }

    #[test]
    fn scenario_6_negative_eccentricity() {
        let mut record = KeplerRecord::default();
        let (x, status) = solve(-0.1_f64, 1.0, StarterId::S1, KernelId::NewtonRaphson, &mut record);
        assert_eq!(x, 0.0);
        assert_eq!(status, ErrorCode::BadEccentricity);
    }

    #[test]
    fn scenario_7_nan_mean_anomaly() {
        let mut record = KeplerRecord::default();
        let (x, status) = solve(0.5_f64, f64::NAN, StarterId::S1, KernelId::NewtonRaphson, &mut record);
        assert_eq!(x, 0.0);
        assert_eq!(status, ErrorCode::BadValue);
    }

    #[test]
    fn scenario_8_invalid_kernel_tag() {
        let mut record = KeplerRecord::default();
        let (x, status) = solve(0.5_f64, 1.0, StarterId::S1, KernelId::Total, &mut record);
        assert_eq!(x, 0.0);
        assert_eq!(status, ErrorCode::BadSolver);
    }

    #[test]
    fn invalid_starter_falls_back_and_continues() {
        let mut record = KeplerRecord::default();
        let (x, status) = solve(0.5_f64, 1.0, StarterId::None, KernelId::NewtonRaphson, &mut record);
        assert_eq!(status, ErrorCode::BadStarter);
        assert!(kes_keq_ell(0.5_f64, 1.0, x).abs() < 1e-10);
    }

    #[test]
    fn nijenhuis_forces_starter_s7() {
        let mut record_s1 = KeplerRecord::default();
        let (x1, _) = solve(0.7_f64, 0.3, StarterId::S1, KernelId::Nijenhuis, &mut record_s1);
        let mut record_s0 = KeplerRecord::default();
        let (x0, _) = solve(0.7_f64, 0.3, StarterId::S0, KernelId::Nijenhuis, &mut record_s0);
        assert!((x1 - x0).abs() < 1e-10);
    }
}

/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Fixed design constants. None of these are derived quantities; they are
//! the thresholds and defaults spec'd by the original `libkes` design.

/// Half-width of the eccentricity-classification neighborhood around the
/// circular (e = 0) and parabolic (e = 1) boundaries. A design choice, not
/// a derived quantity.
pub const ECC_EPS: f64 = 1e-10;

/// Addend applied to the order-2..5 derivative `f1` to keep it away from
/// zero at the degenerate point (e = 1, x = 0).
pub const DERIV_EPS: f64 = 1e-19;

/// Default/minimum tolerance on both `tolf` and `tolx`. Acts as `ε_min`:
/// the lower (and, per spec, only practically meaningful) bound for the
/// caller-supplied tolerance predicates.
pub const DEFAULT_TOL: f64 = 1e-15;

/// Default iteration budget.
pub const DEFAULT_MAXITER: u32 = 100;

/// Upper bound accepted for a caller-supplied `maxiter` (10x the default).
pub const MAX_MAXITER: u32 = 10 * DEFAULT_MAXITER;

#[cfg(test)]
pub(crate) const RTOL: f64 = 1e-9;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_consistent() {
        assert!(DEFAULT_TOL > 0.0 && DEFAULT_TOL < 1.0);
        assert!(MAX_MAXITER == 10 * DEFAULT_MAXITER);
    }
}

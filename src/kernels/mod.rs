/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Iteration kernels: given a starting value, refine it to the eccentric
//! anomaly and report how. Every kernel writes its diagnostics into the
//! caller's [`KeplerRecord`] and returns the refined value; none perform
//! I/O beyond the optional [`TraceSink`](crate::record::TraceSink) call.

pub(crate) mod bisection;
pub(crate) mod danby_burkardt;
pub(crate) mod fixed_point;
pub(crate) mod halley;
pub(crate) mod laguerre_conway;
pub(crate) mod markley;
pub(crate) mod mikkola;
pub(crate) mod newton_raphson;
pub(crate) mod nijenhuis;
pub(crate) mod secant;
pub(crate) mod wegstein;

use num_traits::Float;

use crate::equations::kes_keq_ell;
use crate::record::KeplerRecord;

/// Write one iteration's bookkeeping into `record` and fire the trace
/// sink. Called once per iteration by every kernel in this module.
///
/// `err_dx` is the successive-iterate gap; it has no meaning before a
/// first step has run, so when `iterations == 0` (the loop body never
/// executed because the starter already satisfied `errDF`) it is reported
/// as `0` rather than whatever sentinel the caller seeded its loop
/// variable with. Per spec §3: "errDX ... 0 if convergence was
/// immediate," and every field populated from numerical code must stay
/// finite.
#[inline]
pub(crate) fn record_iteration<T: Float>(record: &mut KeplerRecord<T>, iterations: u32, x: T, err_df: T, err_dx: T) {
    let err_dx = if iterations == 0 { T::zero() } else { err_dx };
    record.iterations = iterations;
    record.err_df = err_df;
    record.err_dx = err_dx;
    #[cfg(feature = "trace")]
    if let Some(sink) = record.trace {
        sink.trace(
            iterations,
            x.to_f64().unwrap_or(f64::NAN),
            err_df.to_f64().unwrap_or(f64::NAN),
            err_dx.to_f64().unwrap_or(f64::NAN),
        );
    }
    #[cfg(not(feature = "trace"))]
    let _ = x;
}

/// Bump the evaluation counters by one call each, when `count_evals` is
/// set. Every kernel iteration here costs exactly one `sin`/`cos` pair
/// (via [`crate::util::sincos`]) and one residual evaluation.
#[inline]
pub(crate) fn count_eval<T>(record: &mut KeplerRecord<T>) {
    if record.count_evals {
        record.nbr_sin_eval += 1;
        record.nbr_cos_eval += 1;
        record.nbr_fkt_eval += 1;
    }
}

/// `errDF`, the AND-termination rule's function-residual test quantity
/// (spec §4.5): `|f_ell(e, M, x)| * e/(1-e)`. The `e/(1-e)` factor
/// converts the function residual into an upper bound on the angular
/// error.
#[inline]
pub(crate) fn err_df<T: Float>(e: T, m: T, x: T) -> T {
    kes_keq_ell(e, m, x).abs() * e / (T::one() - e)
}

/// The shared loop continuation test (spec §4.5): keep iterating while
/// the successive-iterate gap still exceeds `tolx`, the residual still
/// exceeds `tolf`, and the iteration budget isn't spent. Every kernel that
/// tests both `errDX` and `errDF` shares this predicate; `fixed_point`
/// omits the `errDX` test per spec and does not use it.
#[inline]
pub(crate) fn should_continue<T: Float>(err_dx: T, err_df: T, tolx: T, tolf: T, count: u32, maxiter: u32) -> bool {
    err_dx > tolx && err_df > tolf && count < maxiter
}

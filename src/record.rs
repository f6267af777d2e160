/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! The iteration record: caller-facing configuration in, diagnostics out.
//! A plain value type; the dispatcher and kernels write to it by
//! reference and never retain the reference after `solve` returns.

use num_traits::Float;

use crate::constants::{DEFAULT_MAXITER, DEFAULT_TOL, MAX_MAXITER};
use crate::error::ErrorCode;

/// A caller-supplied sink for per-iteration diagnostic output. Off by
/// default (`None` on the record); kernels call it once per iteration
/// when present and the `trace` feature is enabled. Exists so diagnostic
/// output never has to go directly to a fixed stream from inside a
/// kernel (spec §5: "no I/O inside kernels").
pub trait TraceSink {
    fn trace(&self, iteration: u32, x: f64, err_df: f64, err_dx: f64);
}

/// Configuration in, diagnostics out. Value-typed and stack-allocated;
/// owns no heap resources.
#[derive(Clone, Copy)]
pub struct KeplerRecord<'a, T> {
    /// Convergence target on `|f(x)|`. Caller-settable; the dispatcher
    /// clamps an invalid value to the default.
    pub tolf: T,
    /// Convergence target on the successive-iterate gap. Same clamping
    /// rule as `tolf`.
    pub tolx: T,
    /// Iteration budget. Caller-settable; clamped to `[1, 10*default]`.
    pub maxiter: u32,
    /// Computed eccentric/true anomaly.
    pub result: T,
    /// Starting value actually used (after any starter fallback).
    pub starter: T,
    /// Final scaled function residual.
    pub err_df: T,
    /// Final iterate gap.
    pub err_dx: T,
    /// Iterations actually performed.
    pub iterations: u32,
    /// Count `sin` evaluations when `count_evals` is set.
    pub nbr_sin_eval: u32,
    /// Count `cos` evaluations when `count_evals` is set.
    pub nbr_cos_eval: u32,
    /// Count equation-evaluator calls when `count_evals` is set.
    pub nbr_fkt_eval: u32,
    /// Runtime flag enabling the `nbr_*_eval` counters. The source gates
    /// these behind a compile-time flag; per spec §9's Design Notes this
    /// is a runtime option instead, so instrumented and non-instrumented
    /// calls can coexist in one binary.
    pub count_evals: bool,
    /// Optional per-iteration trace sink, off by default.
    pub trace: Option<&'a dyn TraceSink>,
}

impl<T: Float> Default for KeplerRecord<'_, T> {
    fn default() -> Self {
        KeplerRecord {
            tolf: T::from(DEFAULT_TOL).unwrap(),
            tolx: T::from(DEFAULT_TOL).unwrap(),
            maxiter: DEFAULT_MAXITER,
            result: T::zero(),
            starter: T::zero(),
            err_df: T::zero(),
            err_dx: T::zero(),
            iterations: 0,
            nbr_sin_eval: 0,
            nbr_cos_eval: 0,
            nbr_fkt_eval: 0,
            count_evals: false,
            trace: None,
        }
    }
}

impl<'a, T: Float> KeplerRecord<'a, T> {
    /// Construct with all diagnostics and configuration at their
    /// defaults, equivalent to the source's zero-initialization
    /// constructor (the dispatcher substitutes defaults regardless).
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a [`KeplerRecordBuilder`] recognizing `{tolf, tolx,
    /// maxiter}`, the idiomatic replacement for the source's variadic
    /// construction macro.
    pub fn builder() -> KeplerRecordBuilder<'a, T> {
        KeplerRecordBuilder {
            record: Self::default(),
        }
    }

    /// Set `tolf`, applying the `(ε_min, 1)` predicate. Returns
    /// `ErrorCode::BadTolerance` (and leaves `tolf` unchanged) if the
    /// value is invalid, `ErrorCode::NoError` otherwise.
    pub fn set_tolf(&mut self, value: T) -> ErrorCode {
        if !tolerance_is_valid(value) {
            return ErrorCode::BadTolerance;
        }
        self.tolf = value;
        ErrorCode::NoError
    }

    /// Set `tolx`; see [`Self::set_tolf`].
    pub fn set_tolx(&mut self, value: T) -> ErrorCode {
        if !tolerance_is_valid(value) {
            return ErrorCode::BadTolerance;
        }
        self.tolx = value;
        ErrorCode::NoError
    }

    /// Set `maxiter`, applying the `[1, 10*default]` predicate.
    pub fn set_maxiter(&mut self, value: u32) -> ErrorCode {
        if !maxiter_is_valid(value) {
            return ErrorCode::BadValue;
        }
        self.maxiter = value;
        ErrorCode::NoError
    }

    pub fn tolf(&self) -> T {
        self.tolf
    }

    pub fn tolx(&self) -> T {
        self.tolx
    }

    pub fn maxiter(&self) -> u32 {
        self.maxiter
    }

    /// Clamp `tolf`/`tolx`/`maxiter` to defaults wherever invalid.
    /// Returns `true` if any field was clamped (the spec's "warning
    /// signal"); `solve` calls this and ignores the return value, exactly
    /// as spec §7 describes.
    pub(crate) fn clamp_to_defaults(&mut self) -> bool {
        let mut warned = false;
        if !tolerance_is_valid(self.tolf) {
            self.tolf = T::from(DEFAULT_TOL).unwrap();
            warned = true;
        }
        if !tolerance_is_valid(self.tolx) {
            self.tolx = T::from(DEFAULT_TOL).unwrap();
            warned = true;
        }
        if !maxiter_is_valid(self.maxiter) {
            self.maxiter = DEFAULT_MAXITER;
            warned = true;
        }
        warned
    }
}

/// `tolf`/`tolx` are valid in `[ε_min, 1)`. A strictly-open `(ε_min, 1)`
/// as literally written would reject the documented default value
/// (`ε_min` itself); the lower bound is therefore treated as closed.
/// See DESIGN.md.
fn tolerance_is_valid<T: Float>(value: T) -> bool {
    let min = T::from(DEFAULT_TOL).unwrap();
    value.is_finite() && value >= min && value < T::one()
}

fn maxiter_is_valid(value: u32) -> bool {
    (1..=MAX_MAXITER).contains(&value)
}

/// Builder recognizing exactly `{tolf, tolx, maxiter}`, leaving any
/// field not set at its default. Replaces the source's variadic
/// construction macro (spec §9 Design Notes).
pub struct KeplerRecordBuilder<'a, T> {
    record: KeplerRecord<'a, T>,
}

impl<'a, T: Float> KeplerRecordBuilder<'a, T> {
    pub fn tolf(mut self, value: T) -> Self {
        self.record.tolf = value;
        self
    }

    pub fn tolx(mut self, value: T) -> Self {
        self.record.tolx = value;
        self
    }

    pub fn maxiter(mut self, value: u32) -> Self {
        self.record.maxiter = value;
        self
    }

    pub fn trace(mut self, sink: &'a dyn TraceSink) -> Self {
        self.record.trace = Some(sink);
        self
    }

    pub fn build(self) -> KeplerRecord<'a, T> {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_matches_spec_defaults() {
        let rec = KeplerRecord::<f64>::default();
        assert_eq!(rec.tolf, 1e-15);
        assert_eq!(rec.tolx, 1e-15);
        assert_eq!(rec.maxiter, 100);
        assert_eq!(rec.iterations, 0);
    }

    #[test]
    fn builder_overrides_only_given_fields() {
        let rec: KeplerRecord<f64> = KeplerRecord::builder().maxiter(10).build();
        assert_eq!(rec.maxiter, 10);
        assert_eq!(rec.tolf, 1e-15);
    }

    #[test]
    fn set_tolf_rejects_out_of_range() {
        let mut rec = KeplerRecord::<f64>::default();
        assert_eq!(rec.set_tolf(2.0), ErrorCode::BadTolerance);
        assert_eq!(rec.tolf, 1e-15);
        assert_eq!(rec.set_tolf(1e-10), ErrorCode::NoError);
        assert_eq!(rec.tolf, 1e-10);
    }

    #[test]
    fn set_maxiter_rejects_out_of_range() {
        let mut rec = KeplerRecord::<f64>::default();
        assert_eq!(rec.set_maxiter(0), ErrorCode::BadValue);
        assert_eq!(rec.set_maxiter(2000), ErrorCode::BadValue);
        assert_eq!(rec.set_maxiter(5), ErrorCode::NoError);
        assert_eq!(rec.maxiter, 5);
    }

    #[test]
    fn clamp_replaces_invalid_fields() {
        let mut rec = KeplerRecord::<f64> {
            tolf: -1.0,
            maxiter: 0,
            ..KeplerRecord::default()
        };
        assert!(rec.clamp_to_defaults());
        assert_eq!(rec.tolf, 1e-15);
        assert_eq!(rec.maxiter, 100);
    }

    #[test]
    fn clamp_is_noop_on_valid_record() {
        let mut rec = KeplerRecord::<f64>::default();
        assert!(!rec.clamp_to_defaults());
    }
}

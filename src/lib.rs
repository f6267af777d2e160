/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

#![cfg_attr(not(feature = "std"), no_std)]

//! # kes
//! **kes** solves Kepler's Equation: given an eccentricity and a mean
//! anomaly, recover the eccentric (or hyperbolic) anomaly, and from it
//! the true anomaly.
//!
//! # Features
//! ## Entry points
//! - [fn@solve]: run a starter and kernel to completion (spec §4.6).
//! - [fn@starter]: evaluate a single elliptic starter without a kernel.
//! - [fn@true_anomaly]: convert an eccentric/hyperbolic anomaly to true anomaly.
//! ## Equation evaluators
//! - [fn@kes_keq_ell]: elliptic residual `x - e*sin(x) - M`.
//! - [fn@kes_keq_hyp]: hyperbolic residual `e*sinh(x) - x - M`.
//! - [fn@kes_keq_par]: parabolic residual (Barker's Equation).
//! ## Diagnostics
//! - [fn@show_solver]: human-readable kernel name.
//! - [fn@show_error]: human-readable error description.
//! - [fn@version]: crate version as `(major, minor)`.
//!
//! # Acknowledgment
//! kes's generic-numeric scaffolding and crate layout are derived from
//! the elliptic-integral library Ellip; we thank its contributors.
//! The iteration cores and starter catalog follow the classic Kepler
//! solver literature (Danby & Burkardt, Mikkola, Markley, Nijenhuis,
//! Conway, Ng, Odell & Gooding).

mod constants;
mod core;
mod crate_util;
mod dispatch;
mod equations;
mod error;
mod ids;
mod kernels;
mod record;
mod starters;
mod util;

#[cfg(test)]
mod testing;

pub use dispatch::{show_solver, solve, starter, version};
pub use equations::{kes_keq_ell, kes_keq_hyp, kes_keq_par};
pub use error::{show_error, ErrorCode};
pub use ids::{EccentricityRegime, KernelId, StarterId};
pub use record::{KeplerRecord, KeplerRecordBuilder, TraceSink};
pub use util::true_anomaly;

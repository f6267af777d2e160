/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Starter dispatch: given a [`StarterId`] and regime, produce the initial
//! guess a kernel will refine. Only the elliptic regime has starters
//! implemented; hyperbolic and parabolic starters are unimplemented hooks
//! (spec §4.3 Non-goals).

pub(crate) mod elliptic;
pub(crate) mod hyperbolic;
pub(crate) mod parabolic;

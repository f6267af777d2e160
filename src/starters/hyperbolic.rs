/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Hyperbolic starter hook. No hyperbolic starters are implemented; this
//! module exists so [`crate::ids::StarterId`] dispatch and the hyperbolic
//! regime have a symmetric place to grow into (spec §4.3 Non-goals).

use num_traits::Float;

use crate::error::ErrorCode;

#[allow(dead_code)]
pub(crate) fn dispatch<T: Float>(_e: T, _m: T) -> Result<T, ErrorCode> {
    Err(ErrorCode::BadEccentricity)
}

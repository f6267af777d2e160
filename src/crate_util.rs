/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Small internal macros shared by the dispatcher and kernels. Adapted
//! from the teacher crate's `crate_util` module: same early-return-on-
//! predicate shape, retargeted to build [`crate::error::ErrorCode`]
//! values instead of `&'static str` messages (the source macro carries a
//! built-up error *string*; ours carries a stable error *code*, so the
//! `concat!`-based message assembly is unneeded).

/// Early-return `Err($code)` if any of the listed predicates hold.
macro_rules! check {
    ($code:expr, [$($predicate:expr),+ $(,)?] $(,)?) => {
        $(
            if $predicate {
                return Err($code);
            }
        )+
    };
}
pub(crate) use check;

/// Early-return `Ok($res)` if `$predicate` holds.
macro_rules! case {
    ($predicate:expr, $res:expr) => {
        if $predicate {
            return Ok($res);
        }
    };
}
pub(crate) use case;

/// Declare several `let mut` bindings in one line.
macro_rules! declare {
    (mut [$($var:ident = $value:expr),+ $(,)?]) => {
        $(let mut $var = $value;)+
    };
}
pub(crate) use declare;

#[cfg(test)]
mod tests {
    use crate::error::ErrorCode;

    fn reject_negative(x: f64) -> Result<f64, ErrorCode> {
        check!(ErrorCode::BadValue, [x < 0.0]);
        Ok(x)
    }

    fn shortcut_zero(x: f64) -> Result<f64, ErrorCode> {
        case!(x == 0.0, 0.0);
        Ok(1.0 / x)
    }

    #[test]
    fn check_passes_through() {
        assert_eq!(reject_negative(1.0), Ok(1.0));
    }

    #[test]
    fn check_rejects() {
        assert_eq!(reject_negative(-1.0), Err(ErrorCode::BadValue));
    }

    #[test]
    fn case_short_circuits() {
        assert_eq!(shortcut_zero(0.0), Ok(0.0));
        assert_eq!(shortcut_zero(2.0), Ok(0.5));
    }

    #[test]
    fn declare_binds_multiple() {
        declare!(mut [a = 1, b = 2.0]);
        a += 1;
        b += 1.0;
        assert_eq!(a, 2);
        assert_eq!(b, 3.0);
    }
}

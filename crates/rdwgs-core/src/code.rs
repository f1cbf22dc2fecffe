//! Composite range error codes.
//!
//! A code is built by adding `-1` for the easting-like axis and `-2` for the
//! northing-like axis, giving exactly `0`, `-1`, `-2` or `-3`.

use crate::constants::{CODE_BOTH_OUT, CODE_VALID, CODE_X_OUT, CODE_Y_OUT};

/// Accumulate the two independent range checks into a single code.
#[inline]
pub fn compose(x_out: bool, y_out: bool) -> i32 {
    let mut res = CODE_VALID;
    if x_out {
        res += CODE_X_OUT;
    }
    if y_out {
        res += CODE_Y_OUT;
    }
    res
}

/// `true` if `value` lies outside the closed interval `[min, max]`.
#[inline]
pub fn outside(value: f64, min: f64, max: f64) -> bool {
    value < min || value > max
}

/// `true` if the code carries the first-axis (`-1`) contribution.
///
/// Codes other than `0`, `-1`, `-2` and `-3` carry no contribution.
#[inline]
pub fn x_out(code: i32) -> bool {
    matches!(code, CODE_X_OUT | CODE_BOTH_OUT)
}

/// `true` if the code carries the second-axis (`-2`) contribution.
#[inline]
pub fn y_out(code: i32) -> bool {
    matches!(code, CODE_Y_OUT | CODE_BOTH_OUT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_all_four_codes() {
        assert_eq!(compose(false, false), 0);
        assert_eq!(compose(true, false), -1);
        assert_eq!(compose(false, true), -2);
        assert_eq!(compose(true, true), -3);
        assert_eq!(CODE_BOTH_OUT, -3);
    }

    #[test]
    fn flags_decode_compose() {
        for &(x, y) in &[(false, false), (true, false), (false, true), (true, true)] {
            let code = compose(x, y);
            assert_eq!(x_out(code), x, "x flag for code {code}");
            assert_eq!(y_out(code), y, "y flag for code {code}");
        }
    }

    #[test]
    fn foreign_codes_set_no_flags() {
        for code in [i32::MIN, i32::MAX, -4, 1, 3] {
            assert!(!x_out(code), "x flag for code {code}");
            assert!(!y_out(code), "y flag for code {code}");
        }
    }

    #[test]
    fn outside_is_inclusive_of_bounds() {
        assert!(!outside(-7000.0, -7000.0, 300000.0));
        assert!(!outside(300000.0, -7000.0, 300000.0));
        assert!(outside(-7000.5, -7000.0, 300000.0));
        assert!(outside(300000.5, -7000.0, 300000.0));
    }
}

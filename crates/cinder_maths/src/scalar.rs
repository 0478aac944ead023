//! Epsilon-aware comparison for `f64` values.
//!
//! Every floating-point comparison in the engine goes through these helpers
//! so "equal" means the same thing everywhere.

use std::cmp::Ordering;

/// Threshold below which two `f64` values are considered equal.
pub const EPSILON: f64 = 1e-5;

/// Returns true if the two values differ by less than [`EPSILON`].
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Three-way comparison treating within-epsilon values as equal.
#[inline]
#[must_use]
pub fn compare(a: f64, b: f64) -> Ordering {
    if approx_eq(a, b) {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_within_epsilon() {
        assert!(approx_eq(0.000_000_1, 0.000_000_2));
        assert!(approx_eq(0.5, 0.499_999_999_9));
        assert!(!approx_eq(0.1, 0.2));
    }

    #[test]
    fn test_compare_treats_near_values_as_equal() {
        assert_eq!(compare(1.0, 1.000_000_1), Ordering::Equal);
        assert_eq!(compare(1.0, 2.0), Ordering::Less);
        assert_eq!(compare(2.0, 1.0), Ordering::Greater);
    }
}

//! Tolerant comparison and canonical hash keys for single scalars.
//!
//! Equality of the geometric value types compares components with an absolute
//! tolerance of [`EPSILON`]. Hashing cannot use a tolerance, so each component
//! is instead reduced to a canonical decimal string with
//! [`HASH_DECIMAL_DIGITS`] decimals. The string is coarser than the equality
//! tolerance, which keeps values that compare equal in the same hash bucket.

use approx::{AbsDiffEq, RelativeEq};

/// Absolute tolerance for component-wise equality. This is the machine epsilon
/// of `1.0` in double precision.
pub const EPSILON: f64 = f64::EPSILON;

/// Number of decimals kept in the canonical hash string of a scalar.
pub const HASH_DECIMAL_DIGITS: usize = 14;

/// Terminator appended to the canonical hash string of every scalar.
pub const HASH_TERMINATOR: char = ';';

/// Whether the two scalars differ by at most [`EPSILON`].
///
/// Identical infinities are equal, and NaN is equal to NaN (but to nothing
/// else), so the relation stays reflexive for the Inf/NaN results of
/// undefined operations.
///
/// This is deliberately not an operator or a trait on `f64`, so ordinary
/// scalar comparisons elsewhere keep their exact semantics.
#[inline]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan()) || (a - b).abs() <= EPSILON
}

/// Compares the two component sequences pairwise with [`approx_eq`], stopping
/// at the first mismatch.
#[inline]
pub(crate) fn all_approx_eq(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&a, &b)| approx_eq(a, b))
}

pub(crate) fn all_abs_diff_eq(a: &[f64], b: &[f64], epsilon: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.abs_diff_eq(b, epsilon))
}

pub(crate) fn all_relative_eq(a: &[f64], b: &[f64], epsilon: f64, max_relative: f64) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
}

/// Formats the scalar with [`HASH_DECIMAL_DIGITS`] decimals followed by
/// [`HASH_TERMINATOR`].
///
/// Anything that rounds to zero is written without a sign, so `-0.0` and
/// `0.0` map to the same key. Non-finite values are written as `NaN`, `inf`
/// and `-inf`.
pub fn canonical_hash_string(value: f64) -> String {
    let mut string = format!("{:.*}", HASH_DECIMAL_DIGITS, value);

    let is_negative_zero = string
        .strip_prefix('-')
        .is_some_and(|unsigned| unsigned.bytes().all(|byte| byte == b'0' || byte == b'.'));
    if is_negative_zero {
        string.remove(0);
    }

    string.push(HASH_TERMINATOR);
    string
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_within_epsilon_are_approx_equal() {
        assert!(approx_eq(1.0, 1.0 + EPSILON));
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(!approx_eq(1.0, 1.0 + 4.0 * EPSILON));
    }

    #[test]
    fn infinities_are_approx_equal_only_to_themselves() {
        assert!(approx_eq(f64::INFINITY, f64::INFINITY));
        assert!(approx_eq(f64::NEG_INFINITY, f64::NEG_INFINITY));
        assert!(!approx_eq(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!approx_eq(f64::INFINITY, f64::MAX));
    }

    #[test]
    fn nan_is_approx_equal_only_to_nan() {
        assert!(approx_eq(f64::NAN, f64::NAN));
        assert!(approx_eq(f64::NAN, -f64::NAN));
        assert!(!approx_eq(f64::NAN, 0.0));
        assert!(!approx_eq(0.0, f64::NAN));
        assert!(!approx_eq(f64::NAN, f64::INFINITY));
    }

    #[test]
    fn non_finite_components_compare_reflexively() {
        let components = [f64::NEG_INFINITY, f64::NAN, 1.0];
        assert!(all_approx_eq(&components, &components));
        assert!(!all_approx_eq(&components, &[f64::INFINITY, f64::NAN, 1.0]));
    }

    #[test]
    fn component_comparison_requires_equal_lengths() {
        assert!(all_approx_eq(&[1.0, 2.0], &[1.0, 2.0]));
        assert!(!all_approx_eq(&[1.0, 2.0], &[1.0, 2.0, 3.0]));
        assert!(!all_approx_eq(&[1.0, 2.0], &[1.0, 2.5]));
    }

    #[test]
    fn canonical_hash_string_has_fixed_precision_and_terminator() {
        assert_eq!(canonical_hash_string(1.5), "1.50000000000000;");
        assert_eq!(canonical_hash_string(-2.0), "-2.00000000000000;");
    }

    #[test]
    fn canonical_hash_string_merges_values_differing_below_precision() {
        assert_eq!(canonical_hash_string(0.1 + 0.2), canonical_hash_string(0.3));
        assert_ne!(canonical_hash_string(0.1), canonical_hash_string(0.2));
    }

    #[test]
    fn canonical_hash_string_drops_sign_of_zero() {
        assert_eq!(canonical_hash_string(-0.0), canonical_hash_string(0.0));
        assert_eq!(canonical_hash_string(-1e-20), canonical_hash_string(0.0));
    }

    #[test]
    fn canonical_hash_string_handles_non_finite_values() {
        assert_eq!(canonical_hash_string(f64::NAN), "NaN;");
        assert_eq!(canonical_hash_string(f64::INFINITY), "inf;");
        assert_eq!(canonical_hash_string(f64::NEG_INFINITY), "-inf;");
    }
}

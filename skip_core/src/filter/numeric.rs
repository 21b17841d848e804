//! Numeric bound checks for sizes, hire periods and prices

use super::types::SizeConstraint;

/// Inclusive bound check. Values that do not compare (such as NaN) never match.
pub fn within_bounds<T: PartialOrd>(value: &T, min: Option<&T>, max: Option<&T>) -> bool {
    let above_min = min.is_none_or(|min| value >= min);
    let below_max = max.is_none_or(|max| value <= max);
    above_min && below_max
}

/// Exact equality check against an optional expected value.
pub fn matches_exact<T: PartialEq>(value: &T, expected: Option<&T>) -> bool {
    expected.is_none_or(|expected| value == expected)
}

/// Membership check against an optional size constraint.
pub fn matches_size(size: u32, constraint: Option<&SizeConstraint>) -> bool {
    constraint.is_none_or(|constraint| constraint.accepts(size))
}

//! Boolean flag and presence checks

/// Exact flag equality against an optional expected value.
pub fn matches_flag(value: bool, expected: Option<bool>) -> bool {
    expected.is_none_or(|expected| value == expected)
}

/// Presence check: `Some(true)` requires a value, `Some(false)` requires its absence.
pub fn matches_presence<T>(value: Option<&T>, expected: Option<bool>) -> bool {
    expected.is_none_or(|expected| value.is_some() == expected)
}

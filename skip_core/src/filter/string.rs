//! String equality checks for postcode and area
//!
//! Matching is exact and case-sensitive. Availability statistics report
//! values verbatim, so any value offered by the stats matches itself here.

/// Exact string equality against an optional expected value.
pub fn matches_exact(value: &str, expected: Option<&str>) -> bool {
    expected.is_none_or(|expected| value == expected)
}

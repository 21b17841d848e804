//! Timestamp range checks

use chrono::{DateTime, FixedOffset};

use super::types::DateRange;

impl DateRange {
    /// Inclusive on both ends. Comparison is by instant, so offsets do not matter.
    pub fn contains(&self, value: &DateTime<FixedOffset>) -> bool {
        let after_from = self.from.is_none_or(|from| *value >= from);
        let before_to = self.to.is_none_or(|to| *value <= to);
        after_from && before_to
    }
}

/// Range check against an optional range.
pub fn within_range(value: &DateTime<FixedOffset>, range: Option<&DateRange>) -> bool {
    range.is_none_or(|range| range.contains(value))
}

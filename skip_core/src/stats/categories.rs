//! Per-category skip counts

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{SizeCategory, SkipRecord, classify_size};

/// Count of skips in each size category. Every category is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeCategoryCounts(BTreeMap<SizeCategory, usize>);

impl Default for SizeCategoryCounts {
    fn default() -> Self {
        Self(SizeCategory::ALL.iter().map(|category| (*category, 0)).collect())
    }
}

impl SizeCategoryCounts {
    pub fn get(&self, category: SizeCategory) -> usize {
        self.0.get(&category).copied().unwrap_or(0)
    }

    /// Categories with their counts, smallest category first.
    pub fn iter(&self) -> impl Iterator<Item = (SizeCategory, usize)> + '_ {
        self.0.iter().map(|(category, count)| (*category, *count))
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    fn increment(&mut self, category: SizeCategory) {
        *self.0.entry(category).or_insert(0) += 1;
    }
}

pub fn execute<'a, I>(records: I) -> SizeCategoryCounts
where
    I: IntoIterator<Item = &'a SkipRecord>,
{
    let mut counts = SizeCategoryCounts::default();
    for skip in records {
        counts.increment(classify_size(skip.size));
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sized(sizes: &[u32]) -> Vec<SkipRecord> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, size)| SkipRecord::new(i as u64, *size, Decimal::ONE, Decimal::ZERO))
            .collect()
    }

    #[test]
    fn test_zero_filled_for_empty_input() {
        let counts = execute(&Vec::<SkipRecord>::new());
        for category in SizeCategory::ALL {
            assert_eq!(counts.get(category), 0);
        }
        assert_eq!(counts.iter().count(), 4);
    }

    #[test]
    fn test_counts_by_band() {
        let skips = sized(&[4, 6, 8, 12, 14, 20, 40]);
        let counts = execute(&skips);

        assert_eq!(counts.get(SizeCategory::Small), 2);
        assert_eq!(counts.get(SizeCategory::Medium), 2);
        assert_eq!(counts.get(SizeCategory::Large), 2);
        assert_eq!(counts.get(SizeCategory::ExtraLarge), 1);
        assert_eq!(counts.total(), skips.len());
    }

    #[test]
    fn test_missing_categories_still_present() {
        let skips = sized(&[40, 40]);
        let counts = execute(&skips);

        let listed: Vec<(SizeCategory, usize)> = counts.iter().collect();
        assert_eq!(
            listed,
            vec![
                (SizeCategory::Small, 0),
                (SizeCategory::Medium, 0),
                (SizeCategory::Large, 0),
                (SizeCategory::ExtraLarge, 2),
            ]
        );
    }

    #[test]
    fn test_serializes_with_category_names() {
        let json = serde_json::to_value(execute(&sized(&[4]))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"small": 1, "medium": 0, "large": 0, "extra-large": 0})
        );
    }
}

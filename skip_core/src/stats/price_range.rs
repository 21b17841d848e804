//! Minimum, maximum and mean of total prices

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{SkipRecord, compute_total_price};

/// Spread of prices including VAT. All zero for an empty collection.
///
/// Sums saturate, so an overflowing collection reports a clamped average
/// instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
    pub average: Decimal,
}

pub fn execute<'a, I>(records: I) -> PriceRange
where
    I: IntoIterator<Item = &'a SkipRecord>,
{
    let mut prices = records.into_iter().map(compute_total_price);

    let Some(first) = prices.next() else {
        return PriceRange::default();
    };

    let (mut min, mut max, mut sum, mut count) = (first, first, first, 1u32);
    for price in prices {
        min = min.min(price);
        max = max.max(price);
        sum = sum.saturating_add(price);
        count += 1;
    }

    PriceRange {
        min,
        max,
        average: sum / Decimal::from(count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(prices: &[(i64, i64)]) -> Vec<SkipRecord> {
        prices
            .iter()
            .enumerate()
            .map(|(i, (price, vat))| {
                SkipRecord::new(i as u64, 8, Decimal::from(*price), Decimal::from(*vat))
            })
            .collect()
    }

    #[test]
    fn test_empty_is_all_zero() {
        let range = execute(&Vec::<SkipRecord>::new());
        assert_eq!(range.min, Decimal::ZERO);
        assert_eq!(range.max, Decimal::ZERO);
        assert_eq!(range.average, Decimal::ZERO);
    }

    #[test]
    fn test_single_record() {
        let range = execute(&priced(&[(100, 20)]));
        assert_eq!(range.min, Decimal::from(120));
        assert_eq!(range.max, Decimal::from(120));
        assert_eq!(range.average, Decimal::from(120));
    }

    #[test]
    fn test_uses_vat_inclusive_prices() {
        // Totals: 100, 240, 360
        let range = execute(&priced(&[(100, 0), (200, 20), (300, 20)]));
        assert_eq!(range.min, Decimal::from(100));
        assert_eq!(range.max, Decimal::from(360));
        assert_eq!(range.average.round_dp(6), Decimal::new(233_333_333, 6));
    }

    #[test]
    fn test_overflowing_prices_saturate() {
        let huge = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
        let skips = vec![
            SkipRecord::new(1u64, 8, huge, Decimal::ZERO),
            SkipRecord::new(2u64, 8, huge, Decimal::ZERO),
        ];

        let range = execute(&skips);

        assert_eq!(range.min, huge);
        assert_eq!(range.max, huge);
        assert_eq!(range.average, Decimal::MAX / Decimal::from(2));
    }

    #[test]
    fn test_order_independent() {
        let forward = execute(&priced(&[(300, 20), (100, 0), (200, 20)]));
        let backward = execute(&priced(&[(200, 20), (100, 0), (300, 20)]));
        assert_eq!(forward, backward);
    }
}

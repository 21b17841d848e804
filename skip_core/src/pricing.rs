//! Total price and price breakdown
//!
//! [`compute_total_price`] is the only place the VAT-inclusive price is
//! derived. Filtering, statistics and display all call it.
//!
//! Catalog validation caps every amount at [`MAX_AMOUNT`], so totals of
//! catalog records never overflow. Records built elsewhere may; their
//! totals saturate at [`Decimal::MAX`].

use rust_decimal::Decimal;
use serde::Serialize;

use crate::SkipRecord;

/// Largest monetary amount a catalog record may carry, in pounds.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Price including VAT: `price_before_vat * (1 + vat / 100)`.
///
/// Saturates at [`Decimal::MAX`] when the result is not representable.
pub fn compute_total_price(skip: &SkipRecord) -> Decimal {
    checked_total_price(skip).unwrap_or(Decimal::MAX)
}

/// Price including VAT, or `None` on overflow.
pub fn checked_total_price(skip: &SkipRecord) -> Option<Decimal> {
    let rate = Decimal::ONE.checked_add(skip.vat.checked_div(Decimal::ONE_HUNDRED)?)?;
    skip.price_before_vat.checked_mul(rate)
}

/// VAT charged on the base price.
pub fn compute_vat_amount(skip: &SkipRecord) -> Decimal {
    skip.price_before_vat
        .checked_mul(skip.vat)
        .and_then(|amount| amount.checked_div(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
}

/// Line items shown next to a selected skip.
///
/// Transport and per-tonne costs are listed separately and are not part of
/// `total`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base: Decimal,
    pub vat_rate: Decimal,
    pub vat_amount: Decimal,
    pub total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_cost: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_tonne_cost: Option<Decimal>,
}

impl PriceBreakdown {
    pub fn for_skip(skip: &SkipRecord) -> Self {
        Self {
            base: skip.price_before_vat,
            vat_rate: skip.vat,
            vat_amount: compute_vat_amount(skip),
            total: compute_total_price(skip),
            transport_cost: skip.transport_cost,
            per_tonne_cost: skip.per_tonne_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skip(price: Decimal, vat: Decimal) -> SkipRecord {
        SkipRecord::new(1u64, 8, price, vat)
    }

    #[test]
    fn test_total_price_with_vat() {
        let total = compute_total_price(&skip(Decimal::from(100), Decimal::from(20)));
        assert_eq!(total, Decimal::from(120));
    }

    #[test]
    fn test_total_price_zero_vat() {
        let total = compute_total_price(&skip(Decimal::from(100), Decimal::ZERO));
        assert_eq!(total, Decimal::from(100));
    }

    #[test]
    fn test_total_price_full_vat() {
        let total = compute_total_price(&skip(Decimal::from(100), Decimal::ONE_HUNDRED));
        assert_eq!(total, Decimal::from(200));
    }

    #[test]
    fn test_total_price_zero_base() {
        let total = compute_total_price(&skip(Decimal::ZERO, Decimal::from(20)));
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn test_total_price_fractional_amounts() {
        // 278.50 at 17.5% = 327.2375, exact in decimal arithmetic
        let total = compute_total_price(&skip(Decimal::new(27850, 2), Decimal::new(175, 1)));
        assert_eq!(total, Decimal::new(3272375, 4));
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let record = skip(Decimal::new(31025, 2), Decimal::from(20))
            .with_transport_cost(Some(Decimal::from(50)));

        let breakdown = PriceBreakdown::for_skip(&record);

        assert_eq!(breakdown.base, Decimal::new(31025, 2));
        assert_eq!(breakdown.vat_amount, Decimal::new(6205, 2));
        assert_eq!(breakdown.base + breakdown.vat_amount, breakdown.total);
        assert_eq!(breakdown.total, compute_total_price(&record));
        assert_eq!(breakdown.transport_cost, Some(Decimal::from(50)));
        assert_eq!(breakdown.per_tonne_cost, None);
    }

    #[test]
    fn test_total_price_at_ceiling() {
        let total = compute_total_price(&skip(MAX_AMOUNT, Decimal::ONE_HUNDRED));
        assert_eq!(total, Decimal::from(2_000_000_000u64));
    }

    #[test]
    fn test_total_price_overflow_saturates() {
        let record = skip(Decimal::MAX, Decimal::from(20));

        assert_eq!(checked_total_price(&record), None);
        assert_eq!(compute_total_price(&record), Decimal::MAX);

        let breakdown = PriceBreakdown::for_skip(&record);
        assert_eq!(breakdown.total, Decimal::MAX);
        assert_eq!(breakdown.vat_amount, Decimal::MAX);
    }
}

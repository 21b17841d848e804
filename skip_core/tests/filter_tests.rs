mod helpers;

use helpers::{sample_skips, skip};
use rust_decimal::Decimal;
use skip_core::{
    FilterSpec, QueryParams, SizeCategory, SkipRecord, classify_size, compute_stats,
    compute_total_price, filter_skips,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(records: &[&SkipRecord]) -> Vec<u64> {
        records.iter().map(|skip| skip.id.get()).collect()
    }

    #[test]
    fn test_size_and_price_scenario() {
        let skips = vec![skip(1, 8, 200, 20), skip(2, 4, 100, 0)];
        let spec = FilterSpec::new()
            .with_size(vec![8u32])
            .with_max_price(Decimal::from(300));

        let result = filter_skips(&skips, &spec);

        assert_eq!(ids(&result.matched), vec![1]);
        assert_eq!(compute_total_price(result.matched[0]), Decimal::from(240));
        assert_eq!(result.total_count, 2);
        assert_eq!(result.matched_count, 1);
    }

    #[test]
    fn test_transport_cost_presence_scenario() {
        let skips = vec![
            skip(1, 8, 200, 20).with_transport_cost(Some(Decimal::from(50))),
            skip(2, 8, 200, 20).with_transport_cost(None),
        ];

        let result = filter_skips(&skips, &FilterSpec::new().with_transport_cost(true));

        assert_eq!(ids(&result.matched), vec![1]);
    }

    #[test]
    fn test_area_exclusion_scenario() {
        let skips = vec![
            skip(1, 4, 100, 20).with_location("NR32", ""),
            skip(2, 14, 300, 20).with_location("NR32", "Lowestoft"),
        ];

        let stats = compute_stats(&skips);

        assert_eq!(stats.available_areas, vec!["Lowestoft"]);
        assert_eq!(stats.size_categories.get(SizeCategory::Small), 1);
        assert_eq!(stats.size_categories.get(SizeCategory::Large), 1);
        assert_eq!(stats.price_range.min, Decimal::from(120));
        assert_eq!(stats.price_range.max, Decimal::from(360));
    }

    #[test]
    fn test_stats_zero_fill() {
        let stats = compute_stats(&Vec::<SkipRecord>::new());
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(
            json["sizeCategories"],
            serde_json::json!({"small": 0, "medium": 0, "large": 0, "extra-large": 0})
        );
        assert_eq!(stats.price_range.min, Decimal::ZERO);
        assert_eq!(stats.price_range.max, Decimal::ZERO);
        assert_eq!(stats.price_range.average, Decimal::ZERO);
        assert!(stats.available_postcodes.is_empty());
        assert!(stats.available_areas.is_empty());
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(classify_size(6), SizeCategory::Small);
        assert_eq!(classify_size(7), SizeCategory::Medium);
        assert_eq!(classify_size(20), SizeCategory::Large);
        assert_eq!(classify_size(21), SizeCategory::ExtraLarge);
    }

    #[test]
    fn test_price_formula() {
        assert_eq!(compute_total_price(&skip(1, 8, 100, 20)), Decimal::from(120));
    }

    #[test]
    fn test_stats_over_catalog_ignore_current_filter() {
        let skips = sample_skips();
        let filtered = filter_skips(&skips, &FilterSpec::new().with_postcode("IP1"));

        let catalog_stats = compute_stats(&skips);
        let filtered_stats = compute_stats(filtered.matched.iter().copied());

        assert_eq!(catalog_stats.available_postcodes, vec!["NR32", "NR33", "IP1", "IP2"]);
        assert_eq!(catalog_stats.available_areas, vec!["Lowestoft", "Oulton", "Ipswich"]);
        assert_eq!(filtered_stats.available_postcodes, vec!["IP1"]);
        assert_eq!(filtered_stats.size_categories.total(), 3);
    }

    #[test]
    fn test_postcode_offered_by_stats_matches_itself() {
        let skips = sample_skips();
        let stats = compute_stats(&skips);

        for postcode in &stats.available_postcodes {
            let result = filter_skips(&skips, &FilterSpec::new().with_postcode(postcode.as_str()));
            assert!(result.matched_count > 0, "postcode {} matched nothing", postcode);
        }
        for area in &stats.available_areas {
            let result = filter_skips(&skips, &FilterSpec::new().with_area(area.as_str()));
            assert!(result.matched_count > 0, "area {} matched nothing", area);
        }
    }

    #[test]
    fn test_query_params_drive_filter() {
        let skips = sample_skips();
        let params = QueryParams::from_pairs([
            ("skipSize", "medium,large"),
            ("maxPrice", "500"),
            ("allowsHeavyWaste", "false"),
        ]);

        let result = filter_skips(&skips, &params.to_filter_spec());

        // Medium and large presets, at most 500 including VAT
        assert_eq!(ids(&result.matched), vec![17935, 17936]);
    }

    #[test]
    fn test_applied_spec_round_trips_through_json() {
        let spec = FilterSpec::new()
            .with_size(vec![8u32, 10])
            .with_min_price(Decimal::new(19999, 2))
            .with_transport_cost(false)
            .with_area("Lowestoft");

        let json = serde_json::to_string(&spec).unwrap();
        let parsed: FilterSpec = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, spec);
        assert!(!json.contains("postcode"));
    }

    #[test]
    fn test_spec_from_json_scalar_size_and_dates() {
        let spec: FilterSpec = serde_json::from_str(
            r#"{"size": 14, "createdAt": {"from": "2025-01-01", "to": "2025-12-31T23:59:59Z"}}"#,
        )
        .unwrap();

        assert_eq!(spec.active_constraints(), 2);
        let skips = vec![skip(1, 14, 100, 20), skip(2, 16, 100, 20)];
        // Both records were created at the Unix epoch, before the range
        assert!(filter_skips(&skips, &spec).matched.is_empty());
    }
}

//! Shared test helpers for skip_core tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use rust_decimal::Decimal;
use skip_core::SkipRecord;
use tempfile::TempDir;

/// A skip with the given size and pricing, everything else defaulted.
pub fn skip(id: u64, size: u32, price_before_vat: i64, vat: i64) -> SkipRecord {
    SkipRecord::new(id, size, Decimal::from(price_before_vat), Decimal::from(vat))
}

/// A small catalog resembling the real Lowestoft feed.
pub fn sample_skips() -> Vec<SkipRecord> {
    vec![
        skip(17933, 4, 278, 20).with_location("NR32", "").with_allowed_on_road(true),
        skip(17934, 6, 305, 20).with_location("NR32", "Lowestoft").with_allowed_on_road(true),
        skip(17935, 8, 375, 20)
            .with_location("NR32", "Lowestoft")
            .with_transport_cost(Some(Decimal::from(50))),
        skip(17936, 10, 400, 20).with_location("NR33", "Lowestoft").with_allows_heavy_waste(true),
        skip(17937, 12, 439, 20)
            .with_location("NR33", "Oulton")
            .with_per_tonne_cost(Some(Decimal::from(35))),
        skip(17938, 14, 470, 20).with_location("IP1", "Ipswich").with_forbidden(true),
        skip(17939, 16, 496, 20).with_location("IP1", "Ipswich"),
        skip(17940, 20, 992, 20)
            .with_location("IP1", "")
            .with_transport_cost(Some(Decimal::ZERO)),
        skip(17941, 40, 992, 20).with_location("IP2", "Ipswich").with_hire_period_days(7),
    ]
}

/// Write a catalog file into a fresh temp dir.
///
/// Returns the TempDir (must be kept alive) and the file path.
pub fn write_catalog(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("skips.json");
    fs::write(&path, contents).expect("Failed to write catalog");
    (dir, path)
}

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

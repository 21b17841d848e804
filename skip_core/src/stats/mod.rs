//! Availability statistics used to populate the filter controls
//!
//! Statistics never look at a filter. Callers pass the full catalog so the
//! controls show everything on offer, or a filtered subset to describe the
//! current results.

mod categories;
mod distinct;
mod price_range;

pub use categories::SizeCategoryCounts;
pub use price_range::PriceRange;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::SkipRecord;

/// Snapshot of what a collection of skips offers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStats {
    pub size_categories: SizeCategoryCounts,
    pub price_range: PriceRange,
    pub available_postcodes: Vec<String>,
    /// Records with an empty area contribute nothing here.
    pub available_areas: Vec<String>,
}

/// Compute statistics over a collection of skips
pub fn compute_stats<'a, I>(records: I) -> FilterStats
where
    I: IntoIterator<Item = &'a SkipRecord>,
{
    let records: Vec<&SkipRecord> = records.into_iter().collect();
    debug!("Computing stats over {} skips", records.len());

    FilterStats {
        size_categories: categories::execute(records.iter().copied()),
        price_range: price_range::execute(records.iter().copied()),
        available_postcodes: distinct::execute(
            records.iter().map(|skip| skip.postcode.as_str()),
            false,
        ),
        available_areas: distinct::execute(records.iter().map(|skip| skip.area.as_str()), true),
    }
}

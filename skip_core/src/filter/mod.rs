//! Filter specification and matching logic
//!
//! A [`FilterSpec`] is a conjunction of independent constraints. Each
//! constraint is a small predicate over one record; a record is visible when
//! every predicate accepts it.

mod boolean;
mod datetime;
mod numeric;
mod query_params;
mod string;
mod types;

pub use datetime::within_range;
pub use query_params::{QueryParamError, QueryParams, split_assignment};
pub use types::*;

use log::debug;
use serde::Serialize;

use crate::SkipRecord;
use crate::pricing::checked_total_price;

type Constraint = fn(&FilterSpec, &SkipRecord) -> bool;

/// Every constraint of a spec. Unset constraints accept all records.
const CONSTRAINTS: [Constraint; 9] = [
    size_matches,
    size_within_bounds,
    hire_period_matches,
    price_within_bounds,
    location_matches,
    flags_match,
    optional_costs_match,
    created_within_range,
    updated_within_range,
];

fn size_matches(spec: &FilterSpec, skip: &SkipRecord) -> bool {
    numeric::matches_size(skip.size, spec.size.as_ref())
}

fn size_within_bounds(spec: &FilterSpec, skip: &SkipRecord) -> bool {
    numeric::within_bounds(&skip.size, spec.min_size.as_ref(), spec.max_size.as_ref())
}

fn hire_period_matches(spec: &FilterSpec, skip: &SkipRecord) -> bool {
    numeric::matches_exact(&skip.hire_period_days, spec.hire_period_days.as_ref())
}

fn price_within_bounds(spec: &FilterSpec, skip: &SkipRecord) -> bool {
    if spec.min_price.is_none() && spec.max_price.is_none() {
        return true;
    }
    // A total that overflows cannot be compared, so it never matches
    checked_total_price(skip).is_some_and(|total| {
        numeric::within_bounds(&total, spec.min_price.as_ref(), spec.max_price.as_ref())
    })
}

fn location_matches(spec: &FilterSpec, skip: &SkipRecord) -> bool {
    string::matches_exact(&skip.postcode, spec.postcode.as_deref())
        && string::matches_exact(&skip.area, spec.area.as_deref())
}

fn flags_match(spec: &FilterSpec, skip: &SkipRecord) -> bool {
    boolean::matches_flag(skip.forbidden, spec.forbidden)
        && boolean::matches_flag(skip.allowed_on_road, spec.allowed_on_road)
        && boolean::matches_flag(skip.allows_heavy_waste, spec.allows_heavy_waste)
}

fn optional_costs_match(spec: &FilterSpec, skip: &SkipRecord) -> bool {
    boolean::matches_presence(skip.transport_cost.as_ref(), spec.has_transport_cost)
        && boolean::matches_presence(skip.per_tonne_cost.as_ref(), spec.has_per_tonne_cost)
}

fn created_within_range(spec: &FilterSpec, skip: &SkipRecord) -> bool {
    within_range(&skip.created_at, spec.created_at.as_ref())
}

fn updated_within_range(spec: &FilterSpec, skip: &SkipRecord) -> bool {
    within_range(&skip.updated_at, spec.updated_at.as_ref())
}

impl FilterSpec {
    /// Check if a skip satisfies every constraint of this spec
    pub fn matches(&self, skip: &SkipRecord) -> bool {
        CONSTRAINTS.iter().all(|constraint| constraint(self, skip))
    }
}

/// The visible subset of a collection for one spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult<'a> {
    /// Matching records in input order.
    pub matched: Vec<&'a SkipRecord>,
    pub total_count: usize,
    pub matched_count: usize,
    pub applied_spec: FilterSpec,
}

/// Filter a collection of skips.
///
/// Accepts anything that yields record references, so the `matched` list of
/// an earlier result can be filtered again without cloning.
pub fn filter_skips<'a, I>(records: I, spec: &FilterSpec) -> FilterResult<'a>
where
    I: IntoIterator<Item = &'a SkipRecord>,
{
    let mut total_count = 0;
    let matched: Vec<&SkipRecord> = records
        .into_iter()
        .inspect(|_| total_count += 1)
        .filter(|skip| spec.matches(skip))
        .collect();

    debug!(
        "Filtered {} skips with {} active constraints: {} matched",
        total_count,
        spec.active_constraints(),
        matched.len()
    );

    FilterResult {
        matched_count: matched.len(),
        matched,
        total_count,
        applied_spec: spec.clone(),
    }
}

//! Filter type definitions

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Accepted skip sizes: a single size or any of a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeConstraint {
    Exact(u32),
    AnyOf(Vec<u32>),
}

impl SizeConstraint {
    /// Exact membership test. An empty set accepts nothing.
    pub fn accepts(&self, size: u32) -> bool {
        match self {
            SizeConstraint::Exact(expected) => size == *expected,
            SizeConstraint::AnyOf(sizes) => sizes.contains(&size),
        }
    }

    pub fn sizes(&self) -> &[u32] {
        match self {
            SizeConstraint::Exact(size) => std::slice::from_ref(size),
            SizeConstraint::AnyOf(sizes) => sizes,
        }
    }
}

impl From<u32> for SizeConstraint {
    fn from(size: u32) -> Self {
        SizeConstraint::Exact(size)
    }
}

impl From<Vec<u32>> for SizeConstraint {
    fn from(sizes: Vec<u32>) -> Self {
        SizeConstraint::AnyOf(sizes)
    }
}

/// Inclusive timestamp range with optional ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::timestamp::deserialize_optional"
    )]
    pub from: Option<DateTime<FixedOffset>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::timestamp::deserialize_optional"
    )]
    pub to: Option<DateTime<FixedOffset>>,
}

impl DateRange {
    pub fn new(from: Option<DateTime<FixedOffset>>, to: Option<DateTime<FixedOffset>>) -> Self {
        Self { from, to }
    }

    pub fn since(from: DateTime<FixedOffset>) -> Self {
        Self { from: Some(from), to: None }
    }

    pub fn until(to: DateTime<FixedOffset>) -> Self {
        Self { from: None, to: Some(to) }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Constraints on the visible skips. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeConstraint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_period_days: Option<u32>,
    /// Lower bound on the price including VAT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Decimal>,
    /// Upper bound on the price including VAT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forbidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_on_road: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allows_heavy_waste: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_transport_cost: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_per_tonne_cost: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateRange>,
}

impl FilterSpec {
    /// Create a spec with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: impl Into<SizeConstraint>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_min_size(mut self, min: u32) -> Self {
        self.min_size = Some(min);
        self
    }

    pub fn with_max_size(mut self, max: u32) -> Self {
        self.max_size = Some(max);
        self
    }

    pub fn with_hire_period_days(mut self, days: u32) -> Self {
        self.hire_period_days = Some(days);
        self
    }

    pub fn with_min_price(mut self, min: Decimal) -> Self {
        self.min_price = Some(min);
        self
    }

    pub fn with_max_price(mut self, max: Decimal) -> Self {
        self.max_price = Some(max);
        self
    }

    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = Some(postcode.into());
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn with_forbidden(mut self, forbidden: bool) -> Self {
        self.forbidden = Some(forbidden);
        self
    }

    pub fn with_allowed_on_road(mut self, allowed: bool) -> Self {
        self.allowed_on_road = Some(allowed);
        self
    }

    pub fn with_allows_heavy_waste(mut self, allowed: bool) -> Self {
        self.allows_heavy_waste = Some(allowed);
        self
    }

    pub fn with_transport_cost(mut self, present: bool) -> Self {
        self.has_transport_cost = Some(present);
        self
    }

    pub fn with_per_tonne_cost(mut self, present: bool) -> Self {
        self.has_per_tonne_cost = Some(present);
        self
    }

    pub fn with_created_at(mut self, range: DateRange) -> Self {
        self.created_at = Some(range);
        self
    }

    pub fn with_updated_at(mut self, range: DateRange) -> Self {
        self.updated_at = Some(range);
        self
    }

    /// Number of fields that constrain the result.
    ///
    /// A date range with neither end set does not count.
    pub fn active_constraints(&self) -> usize {
        let flags = [
            self.size.is_some(),
            self.min_size.is_some(),
            self.max_size.is_some(),
            self.hire_period_days.is_some(),
            self.min_price.is_some(),
            self.max_price.is_some(),
            self.postcode.is_some(),
            self.area.is_some(),
            self.forbidden.is_some(),
            self.allowed_on_road.is_some(),
            self.allows_heavy_waste.is_some(),
            self.has_transport_cost.is_some(),
            self.has_per_tonne_cost.is_some(),
            self.created_at.as_ref().is_some_and(|r| !r.is_unbounded()),
            self.updated_at.as_ref().is_some_and(|r| !r.is_unbounded()),
        ];
        flags.iter().filter(|active| **active).count()
    }

    /// True when the spec matches every record.
    pub fn is_empty(&self) -> bool {
        self.active_constraints() == 0
    }
}

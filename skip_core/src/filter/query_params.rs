//! URL query state for the skip listing page
//!
//! Mirrors the query parameters of the booking page. Every key has a default,
//! and a value equal to its default (0, empty, `false`) means "not filtering".

use std::fmt;

use chrono::{DateTime, FixedOffset};
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{DateRange, FilterSpec, SizeConstraint};
use crate::SizeCategory;
use crate::pagination::PageRequest;
use crate::timestamp::parse_timestamp;

/// Errors from reading a query parameter
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParamError {
    /// Input was not of the form `key=value`
    MalformedPair(String),
    /// Key is not a known query parameter
    UnknownKey(String),
    /// Value could not be parsed for its key
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for QueryParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryParamError::MalformedPair(raw) => {
                write!(f, "Expected a 'key=value' pair, got '{}'", raw)
            }
            QueryParamError::UnknownKey(key) => write!(f, "Unknown query parameter '{}'", key),
            QueryParamError::InvalidValue {
                key,
                value,
                expected,
            } => write!(
                f,
                "Invalid value '{}' for '{}': expected {}",
                value, key, expected
            ),
        }
    }
}

impl std::error::Error for QueryParamError {}

/// Split `key=value` at the first `=`.
pub fn split_assignment(raw: &str) -> Result<(&str, &str), QueryParamError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(QueryParamError::MalformedPair(raw.to_string())),
    }
}

/// Query state of the listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    pub active_page: u32,
    pub per_page: u32,
    /// Selected size categories, expanded to their preset sizes when filtering.
    pub skip_size: Vec<SizeCategory>,
    pub min_size: u32,
    pub max_size: u32,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub postcode: String,
    pub area: String,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
    pub has_transport_cost: bool,
    pub has_per_tonne_cost: bool,
    pub created_at_from: Option<DateTime<FixedOffset>>,
    pub created_at_to: Option<DateTime<FixedOffset>>,
    pub updated_at_from: Option<DateTime<FixedOffset>>,
    pub updated_at_to: Option<DateTime<FixedOffset>>,
    pub filter_form_open: bool,
}

impl Default for QueryParams {
    fn default() -> Self {
        let page = PageRequest::default();
        Self {
            active_page: page.page,
            per_page: page.per_page,
            skip_size: Vec::new(),
            min_size: 0,
            max_size: 0,
            min_price: Decimal::ZERO,
            max_price: Decimal::ZERO,
            postcode: String::new(),
            area: String::new(),
            allowed_on_road: false,
            allows_heavy_waste: false,
            has_transport_cost: false,
            has_per_tonne_cost: false,
            created_at_from: None,
            created_at_to: None,
            updated_at_from: None,
            updated_at_to: None,
            filter_form_open: true,
        }
    }
}

impl QueryParams {
    /// Read decoded pairs leniently.
    ///
    /// Unknown keys are ignored and invalid values keep their default, the
    /// way a browser keeps rendering with a hand-edited URL. Unknown names in
    /// `skipSize` are dropped one by one; the known ones stay selected.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            if key == "skipSize" {
                params.skip_size = known_categories(value);
                continue;
            }

            match params.parse_pair(key, value) {
                Ok(()) => {}
                Err(QueryParamError::UnknownKey(key)) => {
                    warn!("Ignoring unknown query parameter '{}'", key);
                }
                Err(e) => warn!("{}; keeping default", e),
            }
        }
        params
    }

    /// Read one decoded pair strictly.
    pub fn parse_pair(&mut self, key: &str, value: &str) -> Result<(), QueryParamError> {
        let value = value.trim();
        match key {
            "activePage" => self.active_page = parse_integer(key, value)?,
            "perPage" => self.per_page = parse_integer(key, value)?,
            "skipSize" => self.skip_size = parse_categories(key, value)?,
            "minSize" => self.min_size = parse_integer(key, value)?,
            "maxSize" => self.max_size = parse_integer(key, value)?,
            "minPrice" => self.min_price = parse_price(key, value)?,
            "maxPrice" => self.max_price = parse_price(key, value)?,
            "postcode" => self.postcode = value.to_string(),
            "area" => self.area = value.to_string(),
            "allowedOnRoad" => self.allowed_on_road = parse_bool(key, value)?,
            "allowsHeavyWaste" => self.allows_heavy_waste = parse_bool(key, value)?,
            "hasTransportCost" => self.has_transport_cost = parse_bool(key, value)?,
            "hasPerTonneCost" => self.has_per_tonne_cost = parse_bool(key, value)?,
            "createdAtFrom" => self.created_at_from = parse_date(key, value)?,
            "createdAtTo" => self.created_at_to = parse_date(key, value)?,
            "updatedAtFrom" => self.updated_at_from = parse_date(key, value)?,
            "updatedAtTo" => self.updated_at_to = parse_date(key, value)?,
            "filterFormOpen" => self.filter_form_open = parse_bool(key, value)?,
            _ => return Err(QueryParamError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Pairs for every value that differs from its default.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let defaults = Self::default();
        let mut pairs = Vec::new();

        if self.active_page != defaults.active_page {
            pairs.push(("activePage", self.active_page.to_string()));
        }
        if self.per_page != defaults.per_page {
            pairs.push(("perPage", self.per_page.to_string()));
        }
        if !self.skip_size.is_empty() {
            let names: Vec<&str> = self.skip_size.iter().map(|c| c.as_str()).collect();
            pairs.push(("skipSize", names.join(",")));
        }
        push_nonzero(&mut pairs, "minSize", self.min_size);
        push_nonzero(&mut pairs, "maxSize", self.max_size);
        if !self.min_price.is_zero() {
            pairs.push(("minPrice", self.min_price.to_string()));
        }
        if !self.max_price.is_zero() {
            pairs.push(("maxPrice", self.max_price.to_string()));
        }
        if !self.postcode.is_empty() {
            pairs.push(("postcode", self.postcode.clone()));
        }
        if !self.area.is_empty() {
            pairs.push(("area", self.area.clone()));
        }
        push_flag(&mut pairs, "allowedOnRoad", self.allowed_on_road);
        push_flag(&mut pairs, "allowsHeavyWaste", self.allows_heavy_waste);
        push_flag(&mut pairs, "hasTransportCost", self.has_transport_cost);
        push_flag(&mut pairs, "hasPerTonneCost", self.has_per_tonne_cost);
        push_date(&mut pairs, "createdAtFrom", self.created_at_from);
        push_date(&mut pairs, "createdAtTo", self.created_at_to);
        push_date(&mut pairs, "updatedAtFrom", self.updated_at_from);
        push_date(&mut pairs, "updatedAtTo", self.updated_at_to);
        if !self.filter_form_open {
            pairs.push(("filterFormOpen", "false".to_string()));
        }

        pairs
    }

    /// Build the filter spec this state describes.
    ///
    /// Flags only ever require a property; an unchecked box does not
    /// require its absence.
    pub fn to_filter_spec(&self) -> FilterSpec {
        let size = if self.skip_size.is_empty() {
            None
        } else {
            let sizes: Vec<u32> = self
                .skip_size
                .iter()
                .flat_map(|category| category.preset_sizes().iter().copied())
                .collect();
            Some(SizeConstraint::AnyOf(sizes))
        };

        FilterSpec {
            size,
            min_size: positive(self.min_size),
            max_size: positive(self.max_size),
            hire_period_days: None,
            min_price: positive_price(self.min_price),
            max_price: positive_price(self.max_price),
            postcode: non_empty(&self.postcode),
            area: non_empty(&self.area),
            forbidden: None,
            allowed_on_road: self.allowed_on_road.then_some(true),
            allows_heavy_waste: self.allows_heavy_waste.then_some(true),
            has_transport_cost: self.has_transport_cost.then_some(true),
            has_per_tonne_cost: self.has_per_tonne_cost.then_some(true),
            created_at: date_range(self.created_at_from, self.created_at_to),
            updated_at: date_range(self.updated_at_from, self.updated_at_to),
        }
    }

    /// Whether any filter differs from its default.
    pub fn has_active_filters(&self) -> bool {
        !self.to_filter_spec().is_empty()
    }

    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.active_page, self.per_page)
    }

    /// Reset every filter, keeping page size and form state.
    pub fn clear_filters(&mut self) {
        *self = Self {
            per_page: self.per_page,
            filter_form_open: self.filter_form_open,
            ..Self::default()
        };
    }
}

fn parse_integer(key: &str, value: &str) -> Result<u32, QueryParamError> {
    value.parse().map_err(|_| invalid(key, value, "a non-negative integer"))
}

fn parse_price(key: &str, value: &str) -> Result<Decimal, QueryParamError> {
    value.parse().map_err(|_| invalid(key, value, "a decimal amount"))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, QueryParamError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid(key, value, "'true' or 'false'")),
    }
}

fn parse_categories(key: &str, value: &str) -> Result<Vec<SizeCategory>, QueryParamError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            name.parse::<SizeCategory>()
                .map_err(|_| invalid(key, name, "small, medium, large or extra-large"))
        })
        .collect()
}

fn known_categories(value: &str) -> Vec<SizeCategory> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| match name.parse::<SizeCategory>() {
            Ok(category) => Some(category),
            Err(e) => {
                warn!("{}; dropping it from skipSize", e);
                None
            }
        })
        .collect()
}

fn parse_date(key: &str, value: &str) -> Result<Option<DateTime<FixedOffset>>, QueryParamError> {
    if value.is_empty() {
        return Ok(None);
    }
    parse_timestamp(value)
        .map(Some)
        .map_err(|_| invalid(key, value, "an RFC 3339 timestamp or YYYY-MM-DD date"))
}

fn invalid(key: &str, value: &str, expected: &'static str) -> QueryParamError {
    QueryParamError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    }
}

fn push_nonzero(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: u32) {
    if value != 0 {
        pairs.push((key, value.to_string()));
    }
}

fn push_flag(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: bool) {
    if value {
        pairs.push((key, "true".to_string()));
    }
}

fn push_date(
    pairs: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<DateTime<FixedOffset>>,
) {
    if let Some(value) = value {
        pairs.push((key, value.to_rfc3339()));
    }
}

fn positive(value: u32) -> Option<u32> {
    (value > 0).then_some(value)
}

fn positive_price(value: Decimal) -> Option<Decimal> {
    (value > Decimal::ZERO).then_some(value)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn date_range(
    from: Option<DateTime<FixedOffset>>,
    to: Option<DateTime<FixedOffset>>,
) -> Option<DateRange> {
    (from.is_some() || to.is_some()).then_some(DateRange::new(from, to))
}

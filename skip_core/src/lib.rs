//! Core data structures and filtering for the skip hire catalog.
//!
//! Everything in this crate is a pure, synchronous computation over
//! in-memory records:
//! - [`SkipRecord`]: one hireable skip, as supplied by the catalog
//! - [`filter_skips`]: the visible subset for a [`FilterSpec`]
//! - [`compute_stats`]: availability statistics that populate filter controls
//! - [`Catalog`]: loads and validates records from JSON

pub mod catalog;
pub mod category;
pub mod filter;
pub mod pagination;
pub mod pricing;
pub mod skip;
pub mod stats;
pub mod timestamp;

pub use catalog::{Catalog, CatalogError, ValidationError, ValidationErrorType};
pub use category::{SizeCategory, classify_size};
pub use filter::{
    DateRange, FilterResult, FilterSpec, QueryParamError, QueryParams, SizeConstraint,
    filter_skips,
};
pub use pagination::{Page, PageRequest, paginate};
pub use pricing::{MAX_AMOUNT, PriceBreakdown, compute_total_price};
pub use skip::{SkipId, SkipRecord};
pub use stats::{FilterStats, PriceRange, SizeCategoryCounts, compute_stats};

//! Size categories used to group skips in the filter controls

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

/// Coarse grouping of skip capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

/// An inclusive band of sizes. `max: None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBand {
    pub category: SizeCategory,
    pub min: u32,
    pub max: Option<u32>,
}

impl SizeBand {
    pub fn contains(&self, size: u32) -> bool {
        size >= self.min && self.max.is_none_or(|max| size <= max)
    }
}

/// Category bands in ascending order. Downstream grouping and counts depend
/// on these exact thresholds.
pub const SIZE_BANDS: [SizeBand; 4] = [
    SizeBand { category: SizeCategory::Small, min: 0, max: Some(6) },
    SizeBand { category: SizeCategory::Medium, min: 7, max: Some(12) },
    SizeBand { category: SizeCategory::Large, min: 13, max: Some(20) },
    SizeBand { category: SizeCategory::ExtraLarge, min: 21, max: None },
];

/// Classify a skip size into its category.
pub fn classify_size(size: u32) -> SizeCategory {
    match SIZE_BANDS.iter().find(|band| band.contains(size)) {
        Some(band) => band.category,
        None => {
            // The bands cover every u32, so this means the table was edited badly
            warn!("Size {} matched no size band, falling back to extra-large", size);
            SizeCategory::ExtraLarge
        }
    }
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 4] = [
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
        SizeCategory::ExtraLarge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
            SizeCategory::ExtraLarge => "extra-large",
        }
    }

    /// The band this category covers.
    pub fn band(&self) -> SizeBand {
        SIZE_BANDS[*self as usize]
    }

    /// Standard hire sizes offered for this category.
    pub fn preset_sizes(&self) -> &'static [u32] {
        match self {
            SizeCategory::Small => &[4, 6],
            SizeCategory::Medium => &[8, 10, 12],
            SizeCategory::Large => &[14, 16, 20],
            SizeCategory::ExtraLarge => &[40],
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for an unrecognized category name.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownSizeCategory(pub String);

impl fmt::Display for UnknownSizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown size category '{}'. Expected one of: small, medium, large, extra-large",
            self.0
        )
    }
}

impl std::error::Error for UnknownSizeCategory {}

impl FromStr for SizeCategory {
    type Err = UnknownSizeCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(SizeCategory::Small),
            "medium" => Ok(SizeCategory::Medium),
            "large" => Ok(SizeCategory::Large),
            "extra-large" | "extra_large" | "xl" => Ok(SizeCategory::ExtraLarge),
            _ => Err(UnknownSizeCategory(s.to_string())),
        }
    }
}

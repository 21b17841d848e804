//! The skip record supplied by the catalog

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unique identifier of a skip in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkipId(pub u64);

impl SkipId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SkipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SkipId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A hireable skip.
///
/// Records are immutable once loaded; the catalog owns their lifecycle.
/// Monetary amounts are in pounds sterling and `vat` is a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipRecord {
    pub id: SkipId,
    /// Capacity in cubic yards.
    pub size: u32,
    #[serde(alias = "hire_period_days")]
    pub hire_period_days: u32,
    /// `None` means there is no transport leg, which is not the same as a free one.
    #[serde(default, alias = "transport_cost")]
    pub transport_cost: Option<Decimal>,
    #[serde(default, alias = "per_tonne_cost")]
    pub per_tonne_cost: Option<Decimal>,
    #[serde(alias = "price_before_vat")]
    pub price_before_vat: Decimal,
    pub vat: Decimal,
    pub postcode: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub forbidden: bool,
    #[serde(alias = "allowed_on_road")]
    pub allowed_on_road: bool,
    #[serde(alias = "allows_heavy_waste")]
    pub allows_heavy_waste: bool,
    #[serde(alias = "created_at", deserialize_with = "crate::timestamp::deserialize")]
    pub created_at: DateTime<FixedOffset>,
    #[serde(alias = "updated_at", deserialize_with = "crate::timestamp::deserialize")]
    pub updated_at: DateTime<FixedOffset>,
    #[serde(default, alias = "image_url", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl SkipRecord {
    /// Creates a record with the required commercial fields.
    ///
    /// Optional costs start absent, flags start `false` and both timestamps
    /// start at the Unix epoch.
    pub fn new(id: impl Into<SkipId>, size: u32, price_before_vat: Decimal, vat: Decimal) -> Self {
        let epoch = DateTime::<Utc>::UNIX_EPOCH.fixed_offset();
        Self {
            id: id.into(),
            size,
            hire_period_days: 14,
            transport_cost: None,
            per_tonne_cost: None,
            price_before_vat,
            vat,
            postcode: String::new(),
            area: String::new(),
            forbidden: false,
            allowed_on_road: false,
            allows_heavy_waste: false,
            created_at: epoch,
            updated_at: epoch,
            image_url: None,
        }
    }

    pub fn with_hire_period_days(mut self, days: u32) -> Self {
        self.hire_period_days = days;
        self
    }

    pub fn with_transport_cost(mut self, cost: Option<Decimal>) -> Self {
        self.transport_cost = cost;
        self
    }

    pub fn with_per_tonne_cost(mut self, cost: Option<Decimal>) -> Self {
        self.per_tonne_cost = cost;
        self
    }

    pub fn with_location(mut self, postcode: impl Into<String>, area: impl Into<String>) -> Self {
        self.postcode = postcode.into();
        self.area = area.into();
        self
    }

    pub fn with_forbidden(mut self, forbidden: bool) -> Self {
        self.forbidden = forbidden;
        self
    }

    pub fn with_allowed_on_road(mut self, allowed: bool) -> Self {
        self.allowed_on_road = allowed;
        self
    }

    pub fn with_allows_heavy_waste(mut self, allowed: bool) -> Self {
        self.allows_heavy_waste = allowed;
        self
    }

    pub fn with_timestamps(
        mut self,
        created_at: DateTime<FixedOffset>,
        updated_at: DateTime<FixedOffset>,
    ) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": 17933,
            "size": 4,
            "hirePeriodDays": 14,
            "transportCost": null,
            "perTonneCost": null,
            "priceBeforeVat": 278,
            "vat": 20,
            "postcode": "NR32",
            "area": "",
            "forbidden": false,
            "createdAt": "2025-04-03T13:51:46.897146",
            "updatedAt": "2025-04-07T13:16:52.813+01:00",
            "allowedOnRoad": true,
            "allowsHeavyWaste": true
        }"#;

        let skip: SkipRecord = serde_json::from_str(json).unwrap();

        assert_eq!(skip.id, SkipId(17933));
        assert_eq!(skip.size, 4);
        assert_eq!(skip.transport_cost, None);
        assert_eq!(skip.price_before_vat, Decimal::from(278));
        assert_eq!(skip.area, "");
        assert_eq!(skip.image_url, None);
        assert_eq!(
            skip.updated_at,
            Utc.with_ymd_and_hms(2025, 4, 7, 12, 16, 52).unwrap()
                + chrono::Duration::milliseconds(813)
        );
    }

    #[test]
    fn test_deserialize_snake_case_aliases() {
        let json = r#"{
            "id": 1,
            "size": 8,
            "hire_period_days": 7,
            "transport_cost": 0,
            "per_tonne_cost": 35.5,
            "price_before_vat": 310.25,
            "vat": 20,
            "postcode": "NR32",
            "area": "Lowestoft",
            "forbidden": true,
            "created_at": "2025-04-03",
            "updated_at": "2025-04-03",
            "allowed_on_road": false,
            "allows_heavy_waste": true
        }"#;

        let skip: SkipRecord = serde_json::from_str(json).unwrap();

        assert_eq!(skip.hire_period_days, 7);
        // Zero transport is a present cost, not an absent one
        assert_eq!(skip.transport_cost, Some(Decimal::ZERO));
        assert_eq!(skip.per_tonne_cost, Some(Decimal::new(355, 1)));
        assert_eq!(skip.price_before_vat, Decimal::new(31025, 2));
        assert!(skip.forbidden);
    }

    #[test]
    fn test_deserialize_rejects_invalid_timestamp() {
        let json = r#"{
            "id": 1, "size": 8, "hirePeriodDays": 7, "priceBeforeVat": 1, "vat": 0,
            "postcode": "NR32", "allowedOnRoad": true, "allowsHeavyWaste": true,
            "createdAt": "yesterday", "updatedAt": "2025-04-03"
        }"#;

        let result = serde_json::from_str::<SkipRecord>(json);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid timestamp"));
    }

    #[test]
    fn test_builder_defaults() {
        let skip = SkipRecord::new(3u64, 6, Decimal::from(100), Decimal::from(20));

        assert_eq!(skip.id.get(), 3);
        assert_eq!(skip.transport_cost, None);
        assert_eq!(skip.per_tonne_cost, None);
        assert!(!skip.forbidden);
        assert_eq!(skip.created_at.timestamp(), 0);
    }
}

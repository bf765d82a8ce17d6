//! Regional factor configuration
//!
//! The factor table is immutable configuration data loaded once at startup.
//! [`FactorTable::default`] is the table this repository ships; deployments
//! can layer per-region overrides on top of it from a TOML document:
//!
//! ```toml
//! ["North America"]
//! temperature = 1.2
//!
//! [Oceania]
//! sea_level = 1.6
//! extreme_events = 1.2
//! ```
//!
//! Overrides are partial: unspecified metrics keep their default factor.
//! Unknown region names and non-positive factors are rejected at load time,
//! so a constructed table always satisfies the invariants (every region has
//! exactly one entry; all factors > 0).

use crate::errors::{ClimascopeError, ClimascopeResult};
use crate::region::{Region, RegionalFactors};
use crate::timeseries::FloatValue;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Partial per-region override parsed from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FactorOverride {
    temperature: Option<FloatValue>,
    precipitation: Option<FloatValue>,
    sea_level: Option<FloatValue>,
    extreme_events: Option<FloatValue>,
}

impl FactorOverride {
    fn apply(&self, base: RegionalFactors) -> RegionalFactors {
        RegionalFactors {
            temperature: self.temperature.unwrap_or(base.temperature),
            precipitation: self.precipitation.unwrap_or(base.precipitation),
            sea_level: self.sea_level.unwrap_or(base.sea_level),
            extreme_events: self.extreme_events.unwrap_or(base.extreme_events),
        }
    }
}

/// Immutable Region → [`RegionalFactors`] table
///
/// Built once at startup; read-only afterwards. Every region always has an
/// entry, so [`FactorTable::get`] is infallible. Every construction path,
/// including deserialization, layers the provided entries over the defaults
/// and validates them, so the invariants hold for any table a caller can
/// obtain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFactorTable")]
pub struct FactorTable {
    factors: HashMap<Region, RegionalFactors>,
}

/// Deserialization form of [`FactorTable`]
///
/// Entries are layered over the defaults and validated before a table is
/// produced, matching [`FactorTable::from_toml_str`].
#[derive(Debug, Deserialize)]
struct RawFactorTable {
    factors: HashMap<Region, RegionalFactors>,
}

impl TryFrom<RawFactorTable> for FactorTable {
    type Error = ClimascopeError;

    fn try_from(raw: RawFactorTable) -> Result<Self, Self::Error> {
        let mut table = Self::default();
        for (region, factors) in raw.factors {
            factors.validate(region)?;
            table.factors.insert(region, factors);
        }
        Ok(table)
    }
}

impl Default for FactorTable {
    fn default() -> Self {
        Self {
            factors: Region::all()
                .iter()
                .map(|region| (*region, region.default_factors()))
                .collect(),
        }
    }
}

impl FactorTable {
    /// Build a table from the defaults plus TOML overrides
    ///
    /// Each top-level TOML table names a region (display name) and carries
    /// any subset of the four factor keys. Fails with
    /// [`ClimascopeError::Config`] on malformed TOML,
    /// [`ClimascopeError::UnknownRegion`] on an unrecognized region name and
    /// [`ClimascopeError::InvalidFactor`] on a non-positive factor.
    pub fn from_toml_str(document: &str) -> ClimascopeResult<Self> {
        let overrides: HashMap<String, FactorOverride> =
            toml::from_str(document).map_err(|e| ClimascopeError::Config(e.to_string()))?;

        let mut table = Self::default();
        for (name, factor_override) in &overrides {
            let region: Region = name.parse()?;
            let merged = factor_override.apply(table.get(region));
            merged.validate(region)?;
            debug!("factor override applied for region '{}'", region);
            table.factors.insert(region, merged);
        }
        Ok(table)
    }

    /// The factors for a region
    pub fn get(&self, region: Region) -> RegionalFactors {
        // Construction guarantees an entry per region
        self.factors[&region]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Region, RegionalFactors)> + '_ {
        Region::all()
            .iter()
            .map(move |region| (*region, self.get(*region)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_every_region() {
        let table = FactorTable::default();
        for region in Region::all() {
            assert_eq!(table.get(*region), region.default_factors());
        }
    }

    #[test]
    fn empty_document_yields_defaults() {
        let table = FactorTable::from_toml_str("").unwrap();
        assert_eq!(table, FactorTable::default());
    }

    #[test]
    fn partial_override_keeps_other_factors() {
        let table = FactorTable::from_toml_str(
            r#"
            ["North America"]
            temperature = 1.25
            "#,
        )
        .unwrap();

        let factors = table.get(Region::NorthAmerica);
        assert_eq!(factors.temperature, 1.25);
        let defaults = Region::NorthAmerica.default_factors();
        assert_eq!(factors.precipitation, defaults.precipitation);
        assert_eq!(factors.sea_level, defaults.sea_level);
        assert_eq!(factors.extreme_events, defaults.extreme_events);

        // Other regions untouched
        assert_eq!(table.get(Region::Asia), Region::Asia.default_factors());
    }

    #[test]
    fn unknown_region_name_is_rejected() {
        let result = FactorTable::from_toml_str(
            r#"
            [Atlantis]
            temperature = 1.0
            "#,
        );
        assert!(matches!(result, Err(ClimascopeError::UnknownRegion(name)) if name == "Atlantis"));
    }

    #[test]
    fn non_positive_factor_is_rejected() {
        let result = FactorTable::from_toml_str(
            r#"
            [Europe]
            sea_level = -0.1
            "#,
        );
        assert!(matches!(
            result,
            Err(ClimascopeError::InvalidFactor { .. })
        ));
    }

    #[test]
    fn malformed_document_is_rejected() {
        let result = FactorTable::from_toml_str("not [ valid toml");
        assert!(matches!(result, Err(ClimascopeError::Config(_))));
    }

    #[test]
    fn deserialized_table_fills_missing_regions_from_defaults() {
        let table: FactorTable = serde_json::from_str(r#"{"factors":{}}"#).unwrap();
        assert_eq!(table, FactorTable::default());
        // get stays infallible for every region
        for region in Region::all() {
            assert_eq!(table.get(*region), region.default_factors());
        }
    }

    #[test]
    fn deserialized_table_rejects_non_positive_factor() {
        let json = r#"{"factors":{"Global":{
            "temperature": -5.0,
            "precipitation": 1.0,
            "sea_level": 1.0,
            "extreme_events": 1.0
        }}}"#;
        let result = serde_json::from_str::<FactorTable>(json);
        let message = result.unwrap_err().to_string();
        assert!(
            message.contains("Factors must be > 0"),
            "unexpected error: {}",
            message
        );
    }

    #[test]
    fn serde_round_trip_preserves_overrides() {
        let table = FactorTable::from_toml_str(
            r#"
            [Asia]
            temperature = 1.5
            "#,
        )
        .unwrap();
        let json = serde_json::to_string(&table).unwrap();
        let restored: FactorTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, restored);
        assert_eq!(restored.get(Region::Asia).temperature, 1.5);
    }

    #[test]
    fn iter_follows_canonical_order() {
        let table = FactorTable::default();
        let regions: Vec<Region> = table.iter().map(|(region, _)| region).collect();
        assert_eq!(regions, Region::all());
    }
}

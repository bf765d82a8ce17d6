//! Geographic regions and regional scaling factors
//!
//! This module provides the closed [`Region`] enum used to scope projections
//! and the [`RegionalFactors`] record of scaling multipliers applied to the
//! global base projections.
//!
//! The region set is fixed at compile time. Modeling it as an enum (rather
//! than a free-form string) means an invalid region cannot reach the
//! calculator through typed code; only string-keyed lookups (e.g. a value
//! arriving from a dropdown) can fail, and those fail with
//! [`ClimascopeError::UnknownRegion`].
//!
//! # Examples
//!
//! ```rust
//! use climascope_core::region::Region;
//!
//! let region: Region = "North America".parse().unwrap();
//! assert_eq!(region, Region::NorthAmerica);
//!
//! let factors = region.default_factors();
//! assert_eq!(factors.temperature, 1.1);
//!
//! assert_eq!(Region::all().len(), 7);
//! assert!("Atlantis".parse::<Region>().is_err());
//! ```

use crate::errors::ClimascopeError;
use crate::timeseries::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A geographic scope for projections
///
/// The set is closed: exactly seven regions, defined at compile time, with
/// no mechanism to add one at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Global,
    NorthAmerica,
    Europe,
    Asia,
    Africa,
    SouthAmerica,
    Oceania,
}

impl Region {
    /// All regions in canonical display order
    ///
    /// The order matches the dashboard's region selector and is stable.
    pub fn all() -> &'static [Region] {
        &[
            Region::Global,
            Region::NorthAmerica,
            Region::Europe,
            Region::Asia,
            Region::Africa,
            Region::SouthAmerica,
            Region::Oceania,
        ]
    }

    /// Human-readable display name, as shown in the region selector
    pub fn name(&self) -> &'static str {
        match self {
            Region::Global => "Global",
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Africa => "Africa",
            Region::SouthAmerica => "South America",
            Region::Oceania => "Oceania",
        }
    }

    /// The scaling factors this repository ships for the region
    ///
    /// Global is the all-ones reference; the other entries are the static
    /// table the dashboard was built against. See [`RegionalFactors`] for
    /// the meaning of each multiplier.
    pub fn default_factors(&self) -> RegionalFactors {
        match self {
            Region::Global => RegionalFactors::new(1.0, 1.0, 1.0, 1.0),
            Region::NorthAmerica => RegionalFactors::new(1.1, 0.9, 0.8, 1.2),
            Region::Europe => RegionalFactors::new(1.2, 0.7, 0.9, 1.1),
            Region::Asia => RegionalFactors::new(1.3, 1.4, 1.2, 1.5),
            Region::Africa => RegionalFactors::new(1.4, 0.6, 0.7, 1.3),
            Region::SouthAmerica => RegionalFactors::new(1.2, 1.3, 0.9, 1.2),
            Region::Oceania => RegionalFactors::new(1.0, 0.8, 1.5, 1.1),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = ClimascopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::all()
            .iter()
            .find(|region| region.name() == s)
            .copied()
            .ok_or_else(|| ClimascopeError::UnknownRegion(s.to_string()))
    }
}

/// Per-region scaling multipliers
///
/// Each projected base change is multiplied by the matching factor to
/// produce the region-specific estimate. All factors are strictly positive;
/// [`RegionalFactors::validate`] enforces this for factors arriving from
/// configuration rather than the built-in table.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionalFactors {
    /// Multiplier for projected temperature change (also scales the
    /// historical temperature series)
    pub temperature: FloatValue,
    /// Multiplier for projected precipitation change
    pub precipitation: FloatValue,
    /// Multiplier for projected sea-level rise
    pub sea_level: FloatValue,
    /// Multiplier for projected extreme-event frequency change
    pub extreme_events: FloatValue,
}

impl RegionalFactors {
    pub fn new(
        temperature: FloatValue,
        precipitation: FloatValue,
        sea_level: FloatValue,
        extreme_events: FloatValue,
    ) -> Self {
        Self {
            temperature,
            precipitation,
            sea_level,
            extreme_events,
        }
    }

    /// Check that every factor is strictly positive
    ///
    /// Returns [`ClimascopeError::InvalidFactor`] naming the offending
    /// region and metric otherwise.
    pub fn validate(&self, region: Region) -> Result<(), ClimascopeError> {
        let metrics = [
            ("temperature", self.temperature),
            ("precipitation", self.precipitation),
            ("sea_level", self.sea_level),
            ("extreme_events", self.extreme_events),
        ];
        for (metric, value) in metrics {
            if !(value > 0.0) {
                return Err(ClimascopeError::InvalidFactor {
                    region: region.name().to_string(),
                    metric: metric.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

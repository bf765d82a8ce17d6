//! Projection calculator parameters
//!
//! The projected changes are straight lines between a value at the base
//! year and a value at the horizon year, per metric. The defaults here are
//! the published dashboard configuration; custom parameter sets are mainly
//! useful for testing.

use climascope_core::timeseries::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the regional projection calculator
///
/// For a target year `y` and `year_diff = y - base_year`, the global base
/// change for each metric is
///
/// - temperature: `temperature_base + year_diff * (temperature_horizon - temperature_base) / span`
/// - precipitation: `year_diff * precipitation_horizon / span`
/// - sea level: `year_diff * sea_level_horizon / span`
/// - extreme events: `year_diff * extreme_events_horizon / span`
///
/// where `span = horizon_year - base_year`. The temperature line is anchored
/// at a non-zero base value (warming already realized by the base year); the
/// other three metrics measure change relative to the base year and start
/// at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParameters {
    /// Reference year that `year_diff` is measured from.
    ///
    /// Default: 2023
    pub base_year: i32,

    /// Final year of the nominal projection window.
    ///
    /// Years beyond this extrapolate linearly rather than erroring.
    /// Default: 2050
    pub horizon_year: i32,

    /// Global temperature change already realized at the base year (°C).
    ///
    /// Default: 1.1 °C
    pub temperature_base: FloatValue,

    /// Global temperature change projected at the horizon year (°C).
    ///
    /// Default: 1.6 °C
    pub temperature_horizon: FloatValue,

    /// Global precipitation change at the horizon year (%).
    ///
    /// Default: 5.3 %
    pub precipitation_horizon: FloatValue,

    /// Global sea-level rise at the horizon year (cm).
    ///
    /// Default: 26.3 cm
    pub sea_level_horizon: FloatValue,

    /// Global extreme-event frequency increase at the horizon year (%).
    ///
    /// Default: 32.0 %
    pub extreme_events_horizon: FloatValue,
}

impl ProjectionParameters {
    /// Length of the projection window in years
    pub fn span(&self) -> FloatValue {
        FloatValue::from(self.horizon_year - self.base_year)
    }
}

impl Default for ProjectionParameters {
    fn default() -> Self {
        Self {
            base_year: 2023,
            horizon_year: 2050,
            temperature_base: 1.1,       // °C realized by 2023
            temperature_horizon: 1.6,    // °C at 2050
            precipitation_horizon: 5.3,  // % at 2050
            sea_level_horizon: 26.3,     // cm at 2050
            extreme_events_horizon: 32.0, // % at 2050
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = ProjectionParameters::default();

        assert_eq!(params.base_year, 2023);
        assert_eq!(params.horizon_year, 2050);
        assert_eq!(params.span(), 27.0);

        // The temperature line must rise over the window
        assert!(params.temperature_horizon > params.temperature_base);

        // Horizon changes are all positive
        assert!(params.precipitation_horizon > 0.0);
        assert!(params.sea_level_horizon > 0.0);
        assert!(params.extreme_events_horizon > 0.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let params = ProjectionParameters::default();
        let json = serde_json::to_string(&params).unwrap();
        let restored: ProjectionParameters = serde_json::from_str(&json).unwrap();

        assert_eq!(params, restored);
    }
}

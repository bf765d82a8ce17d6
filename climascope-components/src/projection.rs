//! Regional Projection Calculator
//!
//! Computes the synthetic climate-change projections shown on the
//! dashboard: for a region and target year, four projected-change metrics
//! (temperature, precipitation, sea-level rise, extreme-event frequency)
//! plus the seven-point historical/projected temperature series behind the
//! chart.
//!
//! # What This Component Does
//!
//! 1. Interpolates each metric linearly between its base-year and
//!    horizon-year values (see
//!    [`ProjectionParameters`](crate::parameters::ProjectionParameters)).
//!
//! 2. Scales each interpolated base value by the region's factor from the
//!    [`FactorTable`].
//!
//! 3. Formats the results to one fractional digit for display.
//!
//! # Inputs
//!
//! - `region` - one of the seven [`Region`] values
//! - `year` - target year; any integer is accepted
//!
//! # Outputs
//!
//! - [`ProjectionMetrics`] - formatted magnitudes (one decimal place)
//! - [`ProjectionValues`] - the same values as raw floats
//! - `Vec<HistoricalPoint>` / [`Timeseries`] - the temperature series
//!
//! # Year handling
//!
//! The calculator performs no range validation: a year outside the nominal
//! [base, horizon] window extrapolates linearly along the same lines. That
//! is the published behavior of the dashboard, so it is preserved here; a
//! warning is logged since such a year usually means a caller skipped its
//! clamping.

use crate::parameters::ProjectionParameters;
use climascope_core::anchors::{HistoricalPoint, ANCHOR_YEARS, BASE_DEVIATIONS};
use climascope_core::config::FactorTable;
use climascope_core::interpolate::strategies::{
    InterpolationStrategy, LinearSplineStrategy, PreviousStrategy,
};
use climascope_core::region::{Region, RegionalFactors};
use climascope_core::timeseries::{FloatValue, Time, TimeAxis, Timeseries};
use log::warn;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Projected changes for a (region, year) pair, as raw floats
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionValues {
    /// Temperature change (°C)
    pub temperature: FloatValue,
    /// Precipitation change (%)
    pub precipitation: FloatValue,
    /// Sea-level rise (cm)
    pub sea_level: FloatValue,
    /// Extreme-event frequency increase (%)
    pub extreme_events: FloatValue,
}

impl ProjectionValues {
    /// Format each value to one fractional digit for display
    ///
    /// The strings are unsigned magnitudes; the view applies its own "+"
    /// prefix where it wants one.
    pub fn format(&self) -> ProjectionMetrics {
        ProjectionMetrics {
            temperature: format_metric(self.temperature),
            precipitation: format_metric(self.precipitation),
            sea_level: format_metric(self.sea_level),
            extreme_events: format_metric(self.extreme_events),
        }
    }
}

/// Projected changes formatted for display, one fractional digit each
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionMetrics {
    /// Temperature change (°C)
    pub temperature: String,
    /// Precipitation change (%)
    pub precipitation: String,
    /// Sea-level rise (cm)
    pub sea_level: String,
    /// Extreme-event frequency increase (%)
    pub extreme_events: String,
}

fn format_metric(value: FloatValue) -> String {
    format!("{:.1}", value)
}

/// Regional projection calculator
///
/// Stateless request/response: both operations are pure functions of their
/// arguments and the immutable parameters/factor table the calculator was
/// built with. Identical inputs always produce identical outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionCalculator {
    parameters: ProjectionParameters,
    factors: FactorTable,
}

impl Default for ProjectionCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectionCalculator {
    /// Create a calculator with the published parameters and factor table
    pub fn new() -> Self {
        Self::from_parameters(ProjectionParameters::default())
    }

    /// Create a calculator with custom parameters and the default factors
    pub fn from_parameters(parameters: ProjectionParameters) -> Self {
        Self {
            parameters,
            factors: FactorTable::default(),
        }
    }

    /// Replace the factor table (e.g. with TOML-overridden factors)
    pub fn with_factors(mut self, factors: FactorTable) -> Self {
        self.factors = factors;
        self
    }

    pub fn parameters(&self) -> &ProjectionParameters {
        &self.parameters
    }

    pub fn factors(&self) -> &FactorTable {
        &self.factors
    }

    /// Projected changes for `region` by `year`, as raw floats
    ///
    /// Linear in `year`; years outside the nominal window extrapolate along
    /// the same lines (logged, not rejected).
    pub fn compute_values(&self, region: Region, year: i32) -> ProjectionValues {
        let p = &self.parameters;
        if year < p.base_year || year > p.horizon_year {
            warn!(
                "projection year {} outside nominal window [{}, {}]; extrapolating linearly",
                year, p.base_year, p.horizon_year
            );
        }

        let year_diff = FloatValue::from(year - p.base_year);
        let span = p.span();
        let factors = self.factors.get(region);

        ProjectionValues {
            temperature: (p.temperature_base
                + year_diff * (p.temperature_horizon - p.temperature_base) / span)
                * factors.temperature,
            precipitation: year_diff * p.precipitation_horizon / span * factors.precipitation,
            sea_level: year_diff * p.sea_level_horizon / span * factors.sea_level,
            extreme_events: year_diff * p.extreme_events_horizon / span * factors.extreme_events,
        }
    }

    /// Projected changes for `region` by `year`, formatted for display
    pub fn compute_metrics(&self, region: Region, year: i32) -> ProjectionMetrics {
        self.compute_values(region, year).format()
    }

    /// The seven-point historical/projected temperature series for `region`
    ///
    /// Anchor years are fixed and identical across regions; each base
    /// deviation is scaled by the region's temperature factor. Always
    /// exactly seven points, in ascending year order.
    pub fn historical_series(&self, region: Region) -> Vec<HistoricalPoint> {
        let factors: RegionalFactors = self.factors.get(region);
        ANCHOR_YEARS
            .iter()
            .zip(BASE_DEVIATIONS.iter())
            .map(|(year, deviation)| HistoricalPoint {
                year: *year,
                temperature: deviation * factors.temperature,
            })
            .collect()
    }

    /// The historical series as a [`Timeseries`] for interpolated readouts
    ///
    /// Linear interpolation between anchors; lookups outside
    /// [1900, horizon] refuse to extrapolate.
    pub fn historical_timeseries(&self, region: Region) -> Timeseries {
        self.series_with_strategy(
            region,
            InterpolationStrategy::from(LinearSplineStrategy::new(false)),
        )
    }

    /// The historical series as a step-hold [`Timeseries`]
    ///
    /// Readouts between anchors return the most recent anchor's value; used
    /// by table views that must show a sampled value, never an interpolated
    /// one.
    pub fn historical_step_series(&self, region: Region) -> Timeseries {
        self.series_with_strategy(region, InterpolationStrategy::from(PreviousStrategy::new(false)))
    }

    fn series_with_strategy(&self, region: Region, strategy: InterpolationStrategy) -> Timeseries {
        let points = self.historical_series(region);
        let time: Array1<Time> = points.iter().map(|p| Time::from(p.year)).collect();
        let values: Array1<FloatValue> = points.iter().map(|p| p.temperature).collect();
        Timeseries::new(
            values,
            Arc::new(TimeAxis::from_values(time)),
            "degC".to_string(),
            strategy,
        )
    }
}

//! Scalar time series with pluggable interpolation
//!
//! The dashboard's historical temperature chart is backed by a
//! [`Timeseries`]: values sampled at a fixed set of years, with an
//! interpolation strategy for readouts between samples. Series are built
//! once and read many times; there is no mutation API.

use crate::errors::ClimascopeResult;
use crate::interpolate::strategies::{InterpolationStrategy, LinearSplineStrategy};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Scalar value type used throughout the workspace
pub type FloatValue = f64;
/// Time values are fractional years
pub type Time = f64;

/// A strictly ascending axis of sample times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeAxis {
    values: Array1<Time>,
}

impl TimeAxis {
    /// Create an axis from sample times
    ///
    /// # Panics
    ///
    /// Panics if the values are not strictly ascending or empty.
    pub fn from_values(values: Array1<Time>) -> Self {
        assert!(!values.is_empty(), "Time axis cannot be empty");
        assert!(
            values.windows(2).into_iter().all(|w| w[0] < w[1]),
            "Time axis values must be strictly ascending"
        );
        Self { values }
    }

    pub fn values(&self) -> &Array1<Time> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First sample time
    pub fn first(&self) -> Time {
        self.values[0]
    }

    /// Last sample time
    pub fn last(&self) -> Time {
        self.values[self.values.len() - 1]
    }
}

/// A scalar series sampled on a [`TimeAxis`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeseries {
    values: Array1<FloatValue>,
    time_axis: Arc<TimeAxis>,
    units: String,
    interpolation_strategy: InterpolationStrategy,
}

impl Timeseries {
    /// Create a series from values, an axis, units and a strategy
    ///
    /// # Panics
    ///
    /// Panics if `values` and the axis differ in length.
    pub fn new(
        values: Array1<FloatValue>,
        time_axis: Arc<TimeAxis>,
        units: String,
        interpolation_strategy: InterpolationStrategy,
    ) -> Self {
        assert_eq!(
            values.len(),
            time_axis.len(),
            "Values and time axis must have the same length"
        );
        Self {
            values,
            time_axis,
            units,
            interpolation_strategy,
        }
    }

    /// Create a unitless series with linear interpolation (no extrapolation)
    pub fn from_values(values: Array1<FloatValue>, time: Array1<Time>) -> Self {
        Self::new(
            values,
            Arc::new(TimeAxis::from_values(time)),
            "".to_string(),
            InterpolationStrategy::from(LinearSplineStrategy::new(false)),
        )
    }

    pub fn values(&self) -> &Array1<FloatValue> {
        &self.values
    }

    pub fn time_axis(&self) -> &TimeAxis {
        &self.time_axis
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at an arbitrary time, per the series' interpolation strategy
    pub fn at_time(&self, time: Time) -> ClimascopeResult<FloatValue> {
        self.interpolation_strategy
            .interpolate(self.time_axis.values(), &self.values, time)
    }

    /// The value at the final sample time
    pub fn latest_value(&self) -> Option<FloatValue> {
        self.values.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClimascopeError;
    use is_close::is_close;
    use ndarray::array;

    #[test]
    fn axis_accessors() {
        let axis = TimeAxis::from_values(array![2000.0, 2010.0, 2020.0]);
        assert_eq!(axis.len(), 3);
        assert_eq!(axis.first(), 2000.0);
        assert_eq!(axis.last(), 2020.0);
        assert_eq!(axis.values(), &array![2000.0, 2010.0, 2020.0]);
    }

    #[test]
    #[should_panic(expected = "strictly ascending")]
    fn axis_rejects_unsorted_values() {
        TimeAxis::from_values(array![2000.0, 1990.0]);
    }

    #[test]
    #[should_panic(expected = "strictly ascending")]
    fn axis_rejects_duplicate_values() {
        TimeAxis::from_values(array![2000.0, 2000.0]);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn series_rejects_length_mismatch() {
        Timeseries::new(
            array![1.0, 2.0, 3.0],
            Arc::new(TimeAxis::from_values(array![2000.0, 2010.0])),
            "degC".to_string(),
            InterpolationStrategy::from(LinearSplineStrategy::new(false)),
        );
    }

    #[test]
    fn at_time_interpolates_linearly() {
        let series = Timeseries::from_values(array![0.0, 1.0], array![2000.0, 2010.0]);
        assert!(is_close!(series.at_time(2005.0).unwrap(), 0.5));
    }

    #[test]
    fn at_time_refuses_extrapolation_by_default() {
        let series = Timeseries::from_values(array![0.0, 1.0], array![2000.0, 2010.0]);
        assert!(matches!(
            series.at_time(2050.0),
            Err(ClimascopeError::ExtrapolationNotAllowed { .. })
        ));
    }

    #[test]
    fn latest_value_is_final_sample() {
        let series = Timeseries::from_values(array![0.5, 1.1, 1.6], array![2000.0, 2023.0, 2050.0]);
        assert_eq!(series.latest_value(), Some(1.6));
    }

    #[test]
    fn serde_round_trip() {
        let series = Timeseries::from_values(array![0.0, 1.0], array![2000.0, 2010.0]);
        let json = serde_json::to_string(&series).unwrap();
        let restored: Timeseries = serde_json::from_str(&json).unwrap();
        assert_eq!(series, restored);
    }
}

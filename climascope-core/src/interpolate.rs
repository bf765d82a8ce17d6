//! Interpolation strategies for series lookups
//!
//! A [`Timeseries`](crate::timeseries::Timeseries) stores values at discrete
//! sample times; consumers (chart tooltips, intermediate-year readouts) ask
//! for values at arbitrary times. The strategies here define how values
//! between (and outside) the samples are produced.
//!
//! Each strategy carries an `extrapolate` switch. When it is off, a target
//! time outside the sampled range fails with
//! [`ClimascopeError::ExtrapolationNotAllowed`] instead of silently
//! extending the series.

use crate::errors::{ClimascopeError, ClimascopeResult};
use crate::timeseries::{FloatValue, Time};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

pub mod strategies {
    pub use super::{InterpolationStrategy, LinearSplineStrategy, PreviousStrategy};
}

/// Linear interpolation between bracketing samples
///
/// Outside the sampled range the end segments are extended linearly when
/// `extrapolate` is set.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearSplineStrategy {
    extrapolate: bool,
}

impl LinearSplineStrategy {
    pub fn new(extrapolate: bool) -> Self {
        Self { extrapolate }
    }

    fn interpolate(
        &self,
        times: &Array1<Time>,
        values: &Array1<FloatValue>,
        target: Time,
    ) -> ClimascopeResult<FloatValue> {
        let (first, last) = range_of(times);
        if !self.extrapolate && (target < first || target > last) {
            return Err(ClimascopeError::ExtrapolationNotAllowed {
                target,
                range_start: first,
                range_end: last,
            });
        }

        if times.len() == 1 {
            return Ok(values[0]);
        }

        // Segment whose upper bound is the first sample at or after the
        // target; ends are extended from the outermost segments.
        let upper = times
            .iter()
            .position(|t| *t >= target)
            .unwrap_or(times.len() - 1)
            .max(1);
        let lower = upper - 1;

        let slope = (values[upper] - values[lower]) / (times[upper] - times[lower]);
        Ok(values[lower] + slope * (target - times[lower]))
    }
}

/// Step interpolation holding the most recent sample value
///
/// Before the first sample the series fails unless `extrapolate` is set, in
/// which case the first value is used.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreviousStrategy {
    extrapolate: bool,
}

impl PreviousStrategy {
    pub fn new(extrapolate: bool) -> Self {
        Self { extrapolate }
    }

    fn interpolate(
        &self,
        times: &Array1<Time>,
        values: &Array1<FloatValue>,
        target: Time,
    ) -> ClimascopeResult<FloatValue> {
        let (first, last) = range_of(times);
        if !self.extrapolate && (target < first || target > last) {
            return Err(ClimascopeError::ExtrapolationNotAllowed {
                target,
                range_start: first,
                range_end: last,
            });
        }

        let index = times
            .iter()
            .rposition(|t| *t <= target)
            .unwrap_or(0);
        Ok(values[index])
    }
}

/// The set of available interpolation strategies
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InterpolationStrategy {
    LinearSpline(LinearSplineStrategy),
    Previous(PreviousStrategy),
}

impl InterpolationStrategy {
    pub fn interpolate(
        &self,
        times: &Array1<Time>,
        values: &Array1<FloatValue>,
        target: Time,
    ) -> ClimascopeResult<FloatValue> {
        match self {
            InterpolationStrategy::LinearSpline(strategy) => {
                strategy.interpolate(times, values, target)
            }
            InterpolationStrategy::Previous(strategy) => {
                strategy.interpolate(times, values, target)
            }
        }
    }
}

impl From<LinearSplineStrategy> for InterpolationStrategy {
    fn from(strategy: LinearSplineStrategy) -> Self {
        InterpolationStrategy::LinearSpline(strategy)
    }
}

impl From<PreviousStrategy> for InterpolationStrategy {
    fn from(strategy: PreviousStrategy) -> Self {
        InterpolationStrategy::Previous(strategy)
    }
}

fn range_of(times: &Array1<Time>) -> (Time, Time) {
    (times[0], times[times.len() - 1])
}

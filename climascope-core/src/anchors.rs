//! Historical temperature anchors
//!
//! The historical/projected temperature chart is built from a fixed set of
//! seven anchor years and the base temperature deviations observed (or
//! projected) at those years for the global mean. The anchors are constants
//! shared by every region; only the deviation values are scaled by a
//! region's temperature factor.
//!
//! Conventions:
//!
//! - Deviations are in °C relative to the 1900–1950 baseline.
//! - Anchor years are strictly ascending; 2023 (the projection base year)
//!   is always at index [`BASE_YEAR_INDEX`].
//!
//! ```rust
//! use climascope_core::anchors::{ANCHOR_YEARS, BASE_DEVIATIONS, BASE_YEAR_INDEX};
//!
//! assert_eq!(ANCHOR_YEARS[BASE_YEAR_INDEX], 2023);
//! assert_eq!(BASE_DEVIATIONS[BASE_YEAR_INDEX], 1.1);
//! ```

use crate::timeseries::FloatValue;
use serde::{Deserialize, Serialize};

/// Number of anchors in the historical series
pub const N_ANCHORS: usize = 7;

/// Anchor years, identical for every region
pub const ANCHOR_YEARS: [i32; N_ANCHORS] = [1900, 1950, 2000, 2023, 2030, 2040, 2050];

/// Base (global) temperature deviations at each anchor year, in °C
pub const BASE_DEVIATIONS: [FloatValue; N_ANCHORS] = [-0.2, 0.0, 0.5, 1.1, 1.3, 1.4, 1.6];

/// Index of the projection base year (2023) within [`ANCHOR_YEARS`]
pub const BASE_YEAR_INDEX: usize = 3;

/// One sample of the historical/projected temperature series
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub year: i32,
    /// Temperature deviation in °C, scaled for the series' region
    pub temperature: FloatValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_strictly_ascending() {
        assert!(ANCHOR_YEARS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn base_year_anchor() {
        assert_eq!(ANCHOR_YEARS[BASE_YEAR_INDEX], 2023);
        assert_eq!(BASE_DEVIATIONS[BASE_YEAR_INDEX], 1.1);
    }

    #[test]
    fn tables_have_matching_lengths() {
        assert_eq!(ANCHOR_YEARS.len(), N_ANCHORS);
        assert_eq!(BASE_DEVIATIONS.len(), N_ANCHORS);
    }

    #[test]
    fn deviations_span_published_range() {
        assert_eq!(BASE_DEVIATIONS[0], -0.2);
        assert_eq!(BASE_DEVIATIONS[N_ANCHORS - 1], 1.6);
    }
}

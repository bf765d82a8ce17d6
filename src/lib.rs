//! Regional climate projection calculator for the climascope dashboard.
//!
//! This crate is the single import the presentation layer uses. It
//! re-exports the core types (regions, factor tables, series) and the
//! projection calculator.
//!
//! ```rust
//! use climascope::prelude::*;
//!
//! let calculator = ProjectionCalculator::new();
//! let metrics = calculator.compute_metrics(Region::Global, 2050);
//! assert_eq!(metrics.temperature, "1.6");
//!
//! let series = calculator.historical_series(Region::Global);
//! assert_eq!(series.len(), 7);
//! ```

pub use climascope_components::parameters::ProjectionParameters;
pub use climascope_components::projection::{
    ProjectionCalculator, ProjectionMetrics, ProjectionValues,
};
pub use climascope_core::anchors::{HistoricalPoint, ANCHOR_YEARS, BASE_DEVIATIONS};
pub use climascope_core::config::FactorTable;
pub use climascope_core::errors::{ClimascopeError, ClimascopeResult};
pub use climascope_core::region::{Region, RegionalFactors};

/// Everything the presentation layer needs in one import
pub mod prelude {
    pub use climascope_components::parameters::ProjectionParameters;
    pub use climascope_components::projection::{
        ProjectionCalculator, ProjectionMetrics, ProjectionValues,
    };
    pub use climascope_core::anchors::HistoricalPoint;
    pub use climascope_core::config::FactorTable;
    pub use climascope_core::errors::{ClimascopeError, ClimascopeResult};
    pub use climascope_core::region::{Region, RegionalFactors};
    pub use climascope_core::timeseries::{FloatValue, Time, Timeseries};
}

//! Projection components for climascope
//!
//! This crate provides the Regional Projection Calculator consumed by the
//! dashboard's presentation layer: pure functions from (region, year) to
//! displayable metrics and the historical temperature series.
//!
//! # Module Organisation
//!
//! - `projection`: the calculator and its output types
//! - `parameters`: the interpolation constants, with published defaults

pub mod parameters;
pub mod projection;

pub use parameters::ProjectionParameters;
pub use projection::{ProjectionCalculator, ProjectionMetrics, ProjectionValues};

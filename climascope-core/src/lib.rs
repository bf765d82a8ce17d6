pub mod anchors;
pub mod config;
pub mod interpolate;
pub mod region;
pub mod timeseries;

pub mod errors;

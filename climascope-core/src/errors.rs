use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum ClimascopeError {
    #[error("Unknown region '{0}'. Expected one of the 7 defined regions")]
    UnknownRegion(String),
    #[error("Invalid {metric} factor {value} for region '{region}'. Factors must be > 0")]
    InvalidFactor {
        region: String,
        metric: String,
        value: f64,
    },
    #[error("Extrapolation is not allowed. Target={target}, interpolation range=[{range_start}, {range_end}]")]
    ExtrapolationNotAllowed {
        target: f64,
        range_start: f64,
        range_end: f64,
    },
    #[error("Invalid factor configuration: {0}")]
    Config(String),
}

/// Convenience type for `Result<T, ClimascopeError>`.
pub type ClimascopeResult<T> = Result<T, ClimascopeError>;

use thiserror::Error;

/// Errors returned when counting ticks or breaking down an interval.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported unit: {0}")]
    UnsupportedUnit(String),
    #[error("the interval cannot be represented: {0}")]
    InvalidInterval(#[from] time::error::ComponentRange),
}

use thiserror::Error;

/// Errors returned when constructing a clock.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("the local utc offset could not be determined")]
    IndeterminateOffset,
}

impl From<time::error::IndeterminateOffset> for Error {
    fn from(_: time::error::IndeterminateOffset) -> Self {
        Error::IndeterminateOffset
    }
}

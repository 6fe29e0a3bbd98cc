/// Contract violations reported by [`crate::SizeAndPositionManager`].
///
/// None of these are retried internally; the failing call has no partial result and the
/// caller decides whether to try again with corrected input.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An index outside `0..count` was requested.
    #[error("requested index {index} is outside of range 0..{count}")]
    IndexOutOfRange { index: usize, count: usize },

    /// An offset-accepting query was given `NaN`.
    #[error("invalid offset {offset} specified")]
    InvalidOffset { offset: f64 },

    /// A size source produced a size that is `NaN`, infinite or negative.
    #[error("invalid size returned for index {index} of value {value}")]
    InvalidMeasurement { index: usize, value: f64 },

    /// The configured estimated item size is `NaN`, infinite or negative.
    #[error("invalid estimated item size {value}")]
    InvalidEstimate { value: f64 },
}

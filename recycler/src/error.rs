use thiserror::Error;

/// Errors raised synchronously by the engine's entry points.
///
/// Validation always runs before any state is touched, so a call that returns an error leaves
/// the engine exactly as it was.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("no viewport was configured")]
    MissingViewport,
    #[error("no view-unit factory was configured")]
    MissingTemplate,
    #[error("navigation needs either a total duration or a per-element duration")]
    MissingDuration,
    #[error("the viewport enables neither the horizontal nor the vertical axis")]
    NoScrollAxis,
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Returns `true` for errors caused by missing or invalid configuration (as opposed to an
    /// out-of-range index).
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::IndexOutOfRange { .. })
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

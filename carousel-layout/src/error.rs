use thiserror::Error;

/// Errors raised synchronously by configuration setters and positioning requests.
///
/// Layout, offset and transform computations never fail; an empty carousel is a regular state.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("axis should be HORIZONTAL (0) or VERTICAL (1), got {0}")]
    InvalidAxis(i32),

    #[error("max_visible_items can't be less than 1")]
    InvalidMaxVisibleItems,

    #[error("position can't be less than 0, got {0}")]
    NegativePosition(i64),

    #[error("unsupported saved state version {0}")]
    UnsupportedStateVersion(u32),
}

/// Coarse classification of [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected while building or updating options.
    InvalidConfiguration,
    /// Rejected at the offending call (bad index, unknown persisted state).
    InvalidRequest,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidAxis(_) | Self::InvalidMaxVisibleItems => ErrorKind::InvalidConfiguration,
            Self::NegativePosition(_) | Self::UnsupportedStateVersion(_) => {
                ErrorKind::InvalidRequest
            }
        }
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

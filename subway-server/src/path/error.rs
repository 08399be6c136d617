//! Path finding error types.

use crate::domain::{DomainError, LineId, StationId};
use crate::network::NetworkError;

/// Error from a path query.
///
/// Callers render `InvalidRequest` and `StationNotFound` as bad requests,
/// `PathNotFound` as "no route", and the rest as system failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PathError {
    /// Request is malformed (same source and target, unknown path type)
    #[error("invalid path request: {0}")]
    InvalidRequest(String),

    /// Station is not registered or not on any line
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// Both stations exist but no route connects them
    #[error("no route from station {0} to station {1}")]
    PathNotFound(StationId, StationId),

    /// Section data is corrupt
    #[error("corrupt section data on line {line}: {message}")]
    DataIntegrity { line: LineId, message: String },

    /// The network source failed
    #[error(transparent)]
    Source(#[from] NetworkError),
}

impl From<DomainError> for PathError {
    fn from(e: DomainError) -> Self {
        PathError::InvalidRequest(e.to_string())
    }
}

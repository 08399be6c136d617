//! Network source error types.

use std::path::PathBuf;

use crate::domain::{LineId, StationId};

/// Errors that can occur when loading or reading the network.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NetworkError {
    /// Snapshot file could not be read
    #[error("failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },

    /// Snapshot JSON is malformed
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A section refers to a station the registry does not know
    #[error("line {line} refers to unknown station {station}")]
    UnknownStation { line: LineId, station: StationId },

    /// Two registry entries share an id
    #[error("station {0} is registered twice")]
    DuplicateStation(StationId),

    /// The backing store could not answer
    #[error("network source unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::UnknownStation {
            line: LineId::new(2),
            station: StationId::new(99),
        };
        assert_eq!(err.to_string(), "line 2 refers to unknown station 99");

        let err = NetworkError::DuplicateStation(StationId::new(4));
        assert_eq!(err.to_string(), "station 4 is registered twice");

        let err = NetworkError::Io {
            path: PathBuf::from("network.json"),
            message: "not found".into(),
        };
        assert_eq!(err.to_string(), "failed to read network.json: not found");
    }
}

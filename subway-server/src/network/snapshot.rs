//! Network snapshot file.
//!
//! One JSON document holding the station registry, every line with its
//! sections, and optionally the fare policy to charge.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::{Line, Station};
use crate::path::FareTable;

use super::{InMemoryNetwork, NetworkError};

/// Deserialized snapshot contents.
#[derive(Debug, Deserialize)]
pub struct NetworkSnapshot {
    pub stations: Vec<Station>,

    #[serde(default)]
    pub lines: Vec<Line>,

    /// Fare policy override; the default table applies when absent.
    #[serde(default)]
    pub fare: Option<FareTable>,
}

impl NetworkSnapshot {
    /// Read and parse a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| NetworkError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let snapshot = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            stations = snapshot.stations.len(),
            lines = snapshot.lines.len(),
            "Loaded network snapshot"
        );
        Ok(snapshot)
    }

    /// Parse a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        serde_json::from_str(json).map_err(|e| NetworkError::Json {
            message: e.to_string(),
        })
    }

    /// Check consistency and split into the network and its fare policy.
    pub fn into_parts(self) -> Result<(InMemoryNetwork, FareTable), NetworkError> {
        let network = InMemoryNetwork::builder()
            .stations(self.stations)
            .lines(self.lines)
            .build()?;
        Ok((network, self.fare.unwrap_or_default()))
    }
}

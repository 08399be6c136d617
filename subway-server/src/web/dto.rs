//! Data transfer objects for web requests and responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Line, Station, StationId};
use crate::path::PathResult;

/// Query string of `GET /paths`.
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    /// Source station id
    pub source: u64,

    /// Target station id
    pub target: u64,

    /// DISTANCE or DURATION
    #[serde(rename = "type")]
    pub path_type: String,
}

/// A station in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationResponse {
    pub id: u64,
    pub name: String,
}

impl From<&Station> for StationResponse {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id.get(),
            name: station.name.clone(),
        }
    }
}

/// Response for a path query.
#[derive(Debug, Serialize)]
pub struct PathResponse {
    /// Stations from source to target
    pub stations: Vec<StationResponse>,

    /// Total distance
    pub distance: u64,

    /// Total duration in minutes
    pub duration: u64,

    /// Fare for the total distance
    pub fare: u64,
}

impl From<PathResult> for PathResponse {
    fn from(result: PathResult) -> Self {
        Self {
            stations: result.stations.iter().map(StationResponse::from).collect(),
            distance: result.distance,
            duration: result.duration,
            fare: result.fare,
        }
    }
}

/// A line with its stations in order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDetailResponse {
    pub id: u64,
    pub name: String,

    /// First departure, HH:MM
    pub start_time: String,

    /// Last departure, HH:MM
    pub end_time: String,

    /// Minutes between trains
    pub interval_time: u32,

    pub stations: Vec<StationResponse>,
}

impl LineDetailResponse {
    /// Build from a line, resolving station names through `registry`.
    ///
    /// Stations missing from the registry are skipped.
    pub fn from_line(line: &Line, registry: &HashMap<StationId, Station>) -> Self {
        Self {
            id: line.id.get(),
            name: line.name.clone(),
            start_time: line.start_time.format("%H:%M").to_string(),
            end_time: line.end_time.format("%H:%M").to_string(),
            interval_time: line.interval_mins,
            stations: line
                .station_ids()
                .iter()
                .filter_map(|id| registry.get(id))
                .map(StationResponse::from)
                .collect(),
        }
    }
}

/// Every line in the network.
#[derive(Debug, Serialize)]
pub struct WholeSubwayResponse {
    pub lines: Vec<LineDetailResponse>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

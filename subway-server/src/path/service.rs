//! Path query orchestration.
//!
//! A query runs validate → build graph → find path → price → assemble,
//! stopping at the first failure. Nothing is retried: with a fixed snapshot
//! the same inputs always give the same outcome.

use tracing::debug;

use crate::domain::{PathType, Station, StationId};
use crate::network::NetworkSource;

use super::{FareTable, PathError, SubwayGraph, find_path};

/// Answer to a path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Stations from source to target inclusive.
    pub stations: Vec<Station>,

    /// Total distance along the route.
    pub distance: u64,

    /// Total duration along the route (minutes).
    pub duration: u64,

    /// Fare for the total distance.
    pub fare: u64,
}

/// Path finder over a network source.
pub struct PathService<S: NetworkSource> {
    source: S,
    fares: FareTable,
}

impl<S: NetworkSource> PathService<S> {
    /// Create a new path service.
    pub fn new(source: S, fares: FareTable) -> Self {
        Self { source, fares }
    }

    /// The network this service reads from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The fare policy in use.
    pub fn fares(&self) -> &FareTable {
        &self.fares
    }

    /// Find the cheapest route between two stations under `path_type`.
    pub fn get_path(
        &self,
        source: StationId,
        target: StationId,
        path_type: PathType,
    ) -> Result<PathResult, PathError> {
        if source == target {
            return Err(PathError::InvalidRequest(
                "source and target are the same station".to_string(),
            ));
        }
        self.registered(source)?;
        self.registered(target)?;

        // Rebuilt per query so edits to lines are always seen
        let lines = self.source.lines_with_sections()?;
        let graph = SubwayGraph::build(&lines)?;

        let path = find_path(&graph, source, target, path_type)?;
        let fare = self.fares.fare_for(path.distance);

        let stations = path
            .stations
            .iter()
            .map(|id| self.registered(*id))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            %source,
            %target,
            path_type = %path_type,
            stations = stations.len(),
            distance = path.distance,
            fare,
            "Answered path query"
        );

        Ok(PathResult {
            stations,
            distance: path.distance,
            duration: path.duration,
            fare,
        })
    }

    /// Like `get_path`, with the path type given as a string such as
    /// `"DISTANCE"`.
    pub fn get_path_str(
        &self,
        source: StationId,
        target: StationId,
        path_type: &str,
    ) -> Result<PathResult, PathError> {
        let path_type = PathType::parse(path_type)?;
        self.get_path(source, target, path_type)
    }

    /// Registry record for a station, or `StationNotFound`.
    fn registered(&self, id: StationId) -> Result<Station, PathError> {
        self.source
            .station(id)?
            .ok_or(PathError::StationNotFound(id))
    }
}

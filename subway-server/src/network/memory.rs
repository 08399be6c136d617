//! In-memory network snapshot.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{Line, Station, StationId};

use super::{NetworkError, NetworkSource};

/// A read-only network held in memory.
///
/// Guaranteed consistent by construction: every section refers to a
/// registered station and station ids are unique.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNetwork {
    stations: BTreeMap<StationId, Station>,
    lines: Vec<Line>,
}

impl InMemoryNetwork {
    pub fn builder() -> InMemoryNetworkBuilder {
        InMemoryNetworkBuilder::default()
    }

    /// Number of registered stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl NetworkSource for InMemoryNetwork {
    fn lines_with_sections(&self) -> Result<Vec<Line>, NetworkError> {
        Ok(self.lines.clone())
    }

    fn station(&self, id: StationId) -> Result<Option<Station>, NetworkError> {
        Ok(self.stations.get(&id).cloned())
    }

    fn stations(&self) -> Result<Vec<Station>, NetworkError> {
        Ok(self.stations.values().cloned().collect())
    }
}

/// Builder for creating an in-memory network.
///
/// Provides a fluent API; consistency is checked once, in `build`.
#[derive(Debug, Default)]
pub struct InMemoryNetworkBuilder {
    stations: Vec<Station>,
    lines: Vec<Line>,
}

impl InMemoryNetworkBuilder {
    /// Register a station.
    pub fn station(mut self, id: u64, name: &str) -> Self {
        self.stations.push(Station::new(StationId::new(id), name));
        self
    }

    /// Register several stations at once.
    pub fn stations(mut self, stations: impl IntoIterator<Item = Station>) -> Self {
        self.stations.extend(stations);
        self
    }

    /// Add a line with its sections.
    pub fn line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    /// Add several lines at once.
    pub fn lines(mut self, lines: impl IntoIterator<Item = Line>) -> Self {
        self.lines.extend(lines);
        self
    }

    /// Check consistency and build the network.
    pub fn build(self) -> Result<InMemoryNetwork, NetworkError> {
        let mut stations = BTreeMap::new();
        for station in self.stations {
            let id = station.id;
            if stations.insert(id, station).is_some() {
                return Err(NetworkError::DuplicateStation(id));
            }
        }

        for line in &self.lines {
            for section in &line.sections {
                let referenced = section.from.into_iter().chain(Some(section.to));
                for station in referenced {
                    if !stations.contains_key(&station) {
                        return Err(NetworkError::UnknownStation {
                            line: line.id,
                            station,
                        });
                    }
                }
            }
        }

        debug!(
            stations = stations.len(),
            lines = self.lines.len(),
            "Built in-memory network"
        );

        Ok(InMemoryNetwork {
            stations,
            lines: self.lines,
        })
    }
}

//! Graph assembly from line sections.
//!
//! Every section with both endpoints becomes one undirected edge. Sections
//! from different lines between the same two stations stay separate
//! parallel edges, each with its own distance and duration.

use std::collections::HashMap;

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use tracing::debug;

use crate::domain::{Line, LineId, PathType, Section, StationId};

use super::PathError;

/// Physical track between two stations, as contributed by one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub line: LineId,
    pub distance: u64,
    /// Minutes.
    pub duration: u64,
}

impl Track {
    /// The weight minimised for the given path type.
    pub fn weight(&self, path_type: PathType) -> u64 {
        match path_type {
            PathType::Distance => self.distance,
            PathType::Duration => self.duration,
        }
    }
}

/// Undirected multigraph of stations connected by tracks.
#[derive(Debug, Clone, Default)]
pub struct SubwayGraph {
    graph: UnGraph<StationId, Track>,
    nodes: HashMap<StationId, NodeIndex>,
}

impl SubwayGraph {
    /// Build the graph from all lines' sections.
    ///
    /// Fails with `DataIntegrity` if a section has a negative distance or
    /// duration, before any search could run over it.
    pub fn build(lines: &[Line]) -> Result<Self, PathError> {
        let mut graph = SubwayGraph::default();

        for line in lines {
            for section in &line.sections {
                let to = graph.node(section.to);

                // The head section only anchors the line
                let Some(from) = section.from else {
                    continue;
                };
                let from = graph.node(from);

                let track = Track {
                    line: line.id,
                    distance: checked_weight(line, section, "distance", section.distance)?,
                    duration: checked_weight(line, section, "duration", section.duration)?,
                };
                graph.graph.add_edge(from, to, track);
            }
        }

        debug!(
            lines = lines.len(),
            stations = graph.node_count(),
            tracks = graph.edge_count(),
            "Built subway graph"
        );

        Ok(graph)
    }

    /// Index of a station, adding it if unseen.
    fn node(&mut self, station: StationId) -> NodeIndex {
        *self
            .nodes
            .entry(station)
            .or_insert_with(|| self.graph.add_node(station))
    }

    /// Returns true if any section refers to this station.
    pub fn contains(&self, station: StationId) -> bool {
        self.nodes.contains_key(&station)
    }

    /// Number of stations in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of tracks, counting parallel tracks separately.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All tracks directly joining two stations, in either direction.
    #[cfg(test)]
    fn tracks_between(&self, a: StationId, b: StationId) -> Vec<Track> {
        use petgraph::visit::EdgeRef;

        let (Some(&a), Some(&b)) = (self.nodes.get(&a), self.nodes.get(&b)) else {
            return Vec::new();
        };
        self.graph
            .edges(a)
            .filter(|edge| neighbour(edge.source(), edge.target(), a) == b)
            .map(|edge| *edge.weight())
            .collect()
    }

    pub(super) fn index_of(&self, station: StationId) -> Option<NodeIndex> {
        self.nodes.get(&station).copied()
    }

    pub(super) fn inner(&self) -> &UnGraph<StationId, Track> {
        &self.graph
    }

    pub(super) fn track(&self, edge: EdgeIndex) -> Option<(NodeIndex, NodeIndex, Track)> {
        let (a, b) = self.graph.edge_endpoints(edge)?;
        let track = self.graph.edge_weight(edge)?;
        Some((a, b, *track))
    }
}

/// The end of an undirected edge that is not `from`.
pub(super) fn neighbour(source: NodeIndex, target: NodeIndex, from: NodeIndex) -> NodeIndex {
    if source == from { target } else { source }
}

fn checked_weight(
    line: &Line,
    section: &Section,
    what: &str,
    value: i64,
) -> Result<u64, PathError> {
    u64::try_from(value).map_err(|_| PathError::DataIntegrity {
        line: line.id,
        message: format!(
            "negative {what} {value} from {} to {}",
            section.from.map_or_else(|| "origin".to_string(), |s| s.to_string()),
            section.to
        ),
    })
}

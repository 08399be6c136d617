//! Dijkstra shortest path search.
//!
//! Edge weights are non-negative by construction (the graph builder rejects
//! negative section data), so each station is settled at most once, with
//! its final cost. Costs accumulate in `u128`: every weight fits in `i64`,
//! so no route through a graph that fits in memory can overflow them.
//!
//! When several routes have the same cost, the first one discovered wins.
//! Which one that is depends on the order sections were added to the graph,
//! so callers must not rely on a particular route among equal-cost ones.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::{debug, trace};

use crate::domain::{LineId, PathType, StationId};

use super::PathError;
use super::graph::{SubwayGraph, neighbour};

/// A route through the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Stations from source to target inclusive. Never empty, no repeats.
    pub stations: Vec<StationId>,

    /// Sum of the distances of the tracks taken.
    pub distance: u64,

    /// Sum of the durations of the tracks taken (minutes).
    pub duration: u64,
}

impl Path {
    pub fn source(&self) -> Option<StationId> {
        self.stations.first().copied()
    }

    pub fn target(&self) -> Option<StationId> {
        self.stations.last().copied()
    }

    /// Number of tracks ridden.
    pub fn hop_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }
}

/// Find the cheapest route from `source` to `target`.
///
/// `path_type` picks the weight being minimised; the returned path reports
/// both totals either way. Where several tracks join the same two stations,
/// the one cheapest under `path_type` is taken.
pub fn find_path(
    graph: &SubwayGraph,
    source: StationId,
    target: StationId,
    path_type: PathType,
) -> Result<Path, PathError> {
    if source == target {
        return Err(PathError::InvalidRequest(
            "source and target are the same station".to_string(),
        ));
    }

    let start = graph
        .index_of(source)
        .ok_or(PathError::StationNotFound(source))?;
    let goal = graph
        .index_of(target)
        .ok_or(PathError::StationNotFound(target))?;

    let inner = graph.inner();
    let n = inner.node_count();

    let mut cost: Vec<Option<u128>> = vec![None; n];
    let mut via: Vec<Option<EdgeIndex>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut settled_count = 0usize;

    let mut frontier: BinaryHeap<Reverse<(u128, NodeIndex)>> = BinaryHeap::new();
    cost[start.index()] = Some(0);
    frontier.push(Reverse((0, start)));

    while let Some(Reverse((so_far, node))) = frontier.pop() {
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;
        settled_count += 1;

        let station = inner[node];
        trace!(%station, cost = so_far, "Settled station");

        if node == goal {
            break;
        }

        for edge in inner.edges(node) {
            let next = neighbour(edge.source(), edge.target(), node);
            if settled[next.index()] {
                continue;
            }

            let candidate = so_far + u128::from(edge.weight().weight(path_type));
            if cost[next.index()].is_none_or(|known| candidate < known) {
                cost[next.index()] = Some(candidate);
                via[next.index()] = Some(edge.id());
                frontier.push(Reverse((candidate, next)));
            }
        }
    }

    if !settled[goal.index()] {
        debug!(%source, %target, settled = settled_count, "No route between stations");
        return Err(PathError::PathNotFound(source, target));
    }

    let path = trace_back(graph, start, goal, &via)?
        .ok_or(PathError::PathNotFound(source, target))?;

    debug!(
        %source,
        %target,
        path_type = %path_type,
        hops = path.hop_count(),
        distance = path.distance,
        duration = path.duration,
        settled = settled_count,
        "Found shortest path"
    );

    Ok(path)
}

/// Walk the predecessor tracks back from `goal`, summing both weights.
///
/// Fails with `DataIntegrity` if a total does not fit in `u64`.
fn trace_back(
    graph: &SubwayGraph,
    start: NodeIndex,
    goal: NodeIndex,
    via: &[Option<EdgeIndex>],
) -> Result<Option<Path>, PathError> {
    let inner = graph.inner();
    let mut stations = vec![inner[goal]];
    let mut distance = 0u64;
    let mut duration = 0u64;

    let mut node = goal;
    while node != start {
        let Some((a, b, track)) = via[node.index()].and_then(|edge| graph.track(edge)) else {
            return Ok(None);
        };
        distance = add_checked(distance, track.distance, "distance", track.line)?;
        duration = add_checked(duration, track.duration, "duration", track.line)?;
        node = neighbour(a, b, node);
        stations.push(inner[node]);
    }

    stations.reverse();
    Ok(Some(Path {
        stations,
        distance,
        duration,
    }))
}

fn add_checked(total: u64, weight: u64, what: &str, line: LineId) -> Result<u64, PathError> {
    total.checked_add(weight).ok_or_else(|| PathError::DataIntegrity {
        line,
        message: format!("total {what} along route overflows"),
    })
}

//! Shortest path finding over the subway network.
//!
//! This module implements the core query: "what is the cheapest way from
//! this station to that one, by distance or by duration, and what does it
//! cost?"
//!
//! A fresh graph is built from the network snapshot for every query, so a
//! path never reflects stale line data. Dijkstra's algorithm then finds the
//! minimum-cost route for the chosen metric, and the fare table prices it
//! by total distance.

mod error;
mod fare;
mod finder;
mod graph;
mod service;


pub use error::PathError;
pub use fare::{FareTable, FareTier, InvalidFareTable};
pub use finder::{Path, find_path};
pub use graph::{SubwayGraph, Track};
pub use service::{PathResult, PathService};

//! Subway path finder server.
//!
//! Answers "what is the shortest way from this station to that one?" over a
//! network assembled from independently operated lines, and prices the
//! winning route.

pub mod config;
pub mod domain;
pub mod network;
pub mod path;
pub mod web;

//! Application state for the web layer.

use std::sync::Arc;

use crate::network::InMemoryNetwork;
use crate::path::{FareTable, PathService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Path finder over the loaded network snapshot
    pub paths: Arc<PathService<InMemoryNetwork>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: InMemoryNetwork, fares: FareTable) -> Self {
        Self {
            paths: Arc::new(PathService::new(network, fares)),
        }
    }
}

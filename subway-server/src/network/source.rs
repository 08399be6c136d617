//! The network source abstraction.

use crate::domain::{Line, Station, StationId};

use super::NetworkError;

/// Trait for providing stations and lines to the path finder.
///
/// Every call must observe the same consistent snapshot for the duration
/// of a path query; how that is achieved is up to the implementation. This
/// abstraction allows the path service to be tested with fixed networks
/// and failing sources.
pub trait NetworkSource {
    /// All lines, each with its sections in order.
    fn lines_with_sections(&self) -> Result<Vec<Line>, NetworkError>;

    /// Look up a single station.
    fn station(&self, id: StationId) -> Result<Option<Station>, NetworkError>;

    /// All registered stations, ordered by id.
    fn stations(&self) -> Result<Vec<Station>, NetworkError>;
}

//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from path-finding and data-source errors.

use super::{FavoriteId, StationId};

/// Domain-level errors for validation and value-type invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Path type string is neither DISTANCE nor DURATION
    #[error("unsupported path type: {0:?}")]
    InvalidPathType(String),

    /// A favorite for the same station pair exists
    #[error("favorite from {0} to {1} already exists")]
    DuplicateFavorite(StationId, StationId),

    /// A favorite with the same id exists
    #[error("favorite {0} already exists")]
    DuplicateFavoriteId(FavoriteId),

    /// No favorite with this id
    #[error("favorite {0} not found")]
    FavoriteNotFound(FavoriteId),
}

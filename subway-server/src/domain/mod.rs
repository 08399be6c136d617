//! Domain types for the subway path finder.
//!
//! Stations, lines and their sections as supplied by the network source,
//! plus the small value types the path finder and its callers share.

mod error;
mod favorite;
mod line;
mod path_type;
mod station;

pub use error::DomainError;
pub use favorite::{Favorite, FavoriteId, Favorites};
pub use line::{Line, LineId, Section};
pub use path_type::PathType;
pub use station::{Station, StationId};

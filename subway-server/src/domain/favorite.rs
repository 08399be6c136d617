//! Favorite routes.
//!
//! A rider's bookmarked station pairs. `Favorites` owns the collection and
//! is the only way to change it, so uniqueness and ordering hold no matter
//! who the caller is.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DomainError, StationId};

/// Favorite identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteId(u64);

impl FavoriteId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bookmarked route between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: FavoriteId,
    pub source: StationId,
    pub target: StationId,
}

impl Favorite {
    pub fn new(id: FavoriteId, source: StationId, target: StationId) -> Self {
        Self { id, source, target }
    }
}

/// An insertion-ordered set of favorites.
///
/// No two entries share an id, and no two entries share a
/// `(source, target)` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    items: Vec<Favorite>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a favorite at the end of the list.
    pub fn add(&mut self, favorite: Favorite) -> Result<(), DomainError> {
        if self.items.iter().any(|f| f.id == favorite.id) {
            return Err(DomainError::DuplicateFavoriteId(favorite.id));
        }
        if self
            .items
            .iter()
            .any(|f| f.source == favorite.source && f.target == favorite.target)
        {
            return Err(DomainError::DuplicateFavorite(favorite.source, favorite.target));
        }

        self.items.push(favorite);
        Ok(())
    }

    /// Remove the favorite with the given id, returning it.
    pub fn remove_by_id(&mut self, id: FavoriteId) -> Result<Favorite, DomainError> {
        let pos = self
            .items
            .iter()
            .position(|f| f.id == id)
            .ok_or(DomainError::FavoriteNotFound(id))?;
        Ok(self.items.remove(pos))
    }

    /// Favorites in insertion order.
    pub fn list(&self) -> &[Favorite] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

//! Station identity and registry records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Externally assigned station identifier.
///
/// The path finder never invents ids; it only compares and hashes them.
///
/// # Examples
///
/// ```
/// use subway_server::domain::StationId;
///
/// let gangnam = StationId::new(1);
/// assert_eq!(gangnam.get(), 1);
/// assert_eq!(gangnam.to_string(), "1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u64);

impl StationId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station as known to the station registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_debug() {
        let id = StationId::new(42);
        assert_eq!(format!("{}", id), "42");
        assert_eq!(format!("{:?}", id), "StationId(42)");
    }

    #[test]
    fn serializes_as_plain_number() {
        let station = Station::new(StationId::new(7), "강남역");
        let json = serde_json::to_string(&station).unwrap();
        assert_eq!(json, r#"{"id":7,"name":"강남역"}"#);

        let back: Station = serde_json::from_str(&json).unwrap();
        assert_eq!(back, station);
    }

    #[test]
    fn ordering_follows_numeric_id() {
        assert!(StationId::new(2) < StationId::new(10));
    }
}

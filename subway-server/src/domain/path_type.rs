//! Cost metric selection for path queries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Which edge weight a path query minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PathType {
    Distance,
    Duration,
}

impl PathType {
    /// Parse a path type, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_server::domain::PathType;
    ///
    /// assert_eq!(PathType::parse("DISTANCE").unwrap(), PathType::Distance);
    /// assert_eq!(PathType::parse("duration").unwrap(), PathType::Duration);
    /// assert!(PathType::parse("FARE").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.eq_ignore_ascii_case("DISTANCE") {
            Ok(PathType::Distance)
        } else if s.eq_ignore_ascii_case("DURATION") {
            Ok(PathType::Duration)
        } else {
            Err(DomainError::InvalidPathType(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PathType::Distance => "DISTANCE",
            PathType::Duration => "DURATION",
        }
    }
}

impl FromStr for PathType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_types() {
        assert_eq!(PathType::parse("DISTANCE").unwrap(), PathType::Distance);
        assert_eq!(PathType::parse("Duration").unwrap(), PathType::Duration);
        assert_eq!("distance".parse::<PathType>().unwrap(), PathType::Distance);
    }

    #[test]
    fn reject_unknown_types() {
        assert!(PathType::parse("").is_err());
        assert!(PathType::parse("TIME").is_err());
        assert!(PathType::parse(" DISTANCE").is_err());
    }

    #[test]
    fn display_roundtrip() {
        for t in [PathType::Distance, PathType::Duration] {
            assert_eq!(PathType::parse(&t.to_string()).unwrap(), t);
        }
    }

    #[test]
    fn serde_uses_uppercase() {
        assert_eq!(
            serde_json::to_string(&PathType::Duration).unwrap(),
            r#""DURATION""#
        );
    }
}

//! Lines and the sections that make them up.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::StationId;

/// Line identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(u64);

impl LineId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One directed track segment of a line.
///
/// The first section of a line has no `from` station: it anchors the line at
/// its origin and carries no traversable track. `distance` and `duration`
/// are kept exactly as the data source supplied them; the graph builder
/// rejects negative values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub from: Option<StationId>,
    pub to: StationId,
    pub distance: i64,
    /// Minutes.
    pub duration: i64,
}

impl Section {
    /// A track segment between two stations.
    pub fn new(from: StationId, to: StationId, distance: i64, duration: i64) -> Self {
        Self {
            from: Some(from),
            to,
            distance,
            duration,
        }
    }

    /// The head section anchoring a line at `origin`.
    pub fn head(origin: StationId) -> Self {
        Self {
            from: None,
            to: origin,
            distance: 0,
            duration: 0,
        }
    }
}

/// A named service made of ordered sections.
///
/// Operating hours and interval are passthrough data: the path finder
/// ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub interval_mins: u32,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Line {
    /// Create a line with no sections, running 05:30-23:30 every 10 minutes.
    pub fn new(id: LineId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            start_time: NaiveTime::from_hms_opt(5, 30, 0).unwrap_or_default(),
            end_time: NaiveTime::from_hms_opt(23, 30, 0).unwrap_or_default(),
            interval_mins: 10,
            sections: Vec::new(),
        }
    }

    /// Set the operating hours and interval.
    pub fn with_schedule(mut self, start: NaiveTime, end: NaiveTime, interval_mins: u32) -> Self {
        self.start_time = start;
        self.end_time = end;
        self.interval_mins = interval_mins;
        self
    }

    /// Append a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Stations served by this line, in section order.
    ///
    /// Each section contributes its `to` station; a station reached twice
    /// (a loop line) is listed once, at its first position.
    pub fn station_ids(&self) -> Vec<StationId> {
        let mut ids: Vec<StationId> = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            if !ids.contains(&section.to) {
                ids.push(section.to);
            }
        }
        ids
    }
}
